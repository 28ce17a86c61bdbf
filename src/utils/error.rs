use thiserror::Error;

#[derive(Error, Debug)]
pub enum IsingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid lattice shape {rows}x{cols}: both dimensions must be at least 1")]
    InvalidShape { rows: usize, cols: usize },

    #[error("Lattice {rows}x{cols} exceeds the maximum of {max_sites} sites")]
    LatticeTooLarge {
        rows: usize,
        cols: usize,
        max_sites: usize,
    },

    #[error("Coupling J = {energy_j} is outside [-{max}, {max}]")]
    CouplingOutOfRange { energy_j: i64, max: i64 },

    #[error("Invalid spin value {value} at ({row}, {col}): expected 1 or -1")]
    InvalidSpin { row: usize, col: usize, value: String },

    #[error("Site ({row}, {col}) is outside the {rows}x{cols} lattice")]
    SiteOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Ragged lattice: row {row} has {found} columns, expected {expected}")]
    RaggedLattice {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Lattice,
    Io,
    Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl IsingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            IsingError::ConfigValidationError { .. }
            | IsingError::InvalidConfigValueError { .. }
            | IsingError::MissingConfigError { .. }
            | IsingError::TomlError(_) => ErrorCategory::Configuration,
            IsingError::InvalidShape { .. }
            | IsingError::LatticeTooLarge { .. }
            | IsingError::CouplingOutOfRange { .. }
            | IsingError::InvalidSpin { .. }
            | IsingError::SiteOutOfBounds { .. }
            | IsingError::RaggedLattice { .. } => ErrorCategory::Lattice,
            IsingError::IoError(_) => ErrorCategory::Io,
            IsingError::SerializationError(_) | IsingError::CsvError(_) => ErrorCategory::Format,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Lattice | ErrorCategory::Format => ErrorSeverity::High,
            ErrorCategory::Io => match self {
                IsingError::IoError(e)
                    if matches!(
                        e.kind(),
                        std::io::ErrorKind::Interrupted | std::io::ErrorKind::WouldBlock
                    ) =>
                {
                    ErrorSeverity::Medium
                }
                _ => ErrorSeverity::Critical,
            },
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            IsingError::IoError(_) => {
                "Check that the output directory is writable and the input file exists".to_string()
            }
            IsingError::SerializationError(_) => {
                "The report could not be encoded; this usually indicates a bug".to_string()
            }
            IsingError::CsvError(_) => {
                "Make sure the lattice file is plain CSV with one row per lattice row".to_string()
            }
            IsingError::TomlError(_) | IsingError::ConfigValidationError { .. } => {
                "Check the configuration file syntax against the documented sections".to_string()
            }
            IsingError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' and try again", field)
            }
            IsingError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration", field)
            }
            IsingError::InvalidShape { .. } => {
                "Use at least one row and one column".to_string()
            }
            IsingError::LatticeTooLarge { max_sites, .. } => {
                format!("Use a lattice with at most {} sites", max_sites)
            }
            IsingError::CouplingOutOfRange { max, .. } => {
                format!("Use a coupling between -{} and {}", max, max)
            }
            IsingError::InvalidSpin { .. } => {
                "Every lattice site must be 1 or -1".to_string()
            }
            IsingError::SiteOutOfBounds { rows, cols, .. } => {
                format!("Use a row below {} and a column below {}", rows, cols)
            }
            IsingError::RaggedLattice { .. } => {
                "Every row of the lattice file must have the same number of columns".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Lattice => format!("Lattice problem: {}", self),
            ErrorCategory::Io => format!("File system problem: {}", self),
            ErrorCategory::Format => format!("Data format problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, IsingError>;
