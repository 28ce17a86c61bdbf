use crate::core::export::SUPPORTED_FORMATS;
use crate::core::lattice::{DEFAULT_ENERGY_J, MAX_ENERGY_J};
use crate::domain::model::{LatticeSource, Shape};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{IsingError, Result};
use crate::utils::logger::{self, LOG_LEVELS};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub lattice: LatticeConfig,
    pub random: Option<RandomConfig>,
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatticeConfig {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub energy_j: Option<i64>,
    /// CSV lattice to load instead of generating one.
    pub input: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

fn default_formats() -> Vec<String> {
    SUPPORTED_FORMATS.iter().map(|f| f.to_string()).collect()
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| IsingError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn seed(&self) -> Option<u64> {
        self.random.as_ref().and_then(|r| r.seed)
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.random = Some(RandomConfig { seed: Some(seed) });
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    /// Fallback log filter: `verbose` forces debug, else `[logging] level`, else info.
    pub fn log_directive(&self, verbose: bool) -> String {
        match self.log_level() {
            Some(level) if !verbose => logger::level_directive(level),
            _ => logger::default_directive(verbose),
        }
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn lattice_source(&self) -> Result<LatticeSource> {
        if let Some(input) = &self.lattice.input {
            return Ok(LatticeSource::CsvFile(input.clone()));
        }

        let rows = validation::validate_required_field("lattice.rows", &self.lattice.rows)?;
        let cols = validation::validate_required_field("lattice.cols", &self.lattice.cols)?;
        Ok(LatticeSource::Random {
            shape: Shape::new(*rows, *cols)?,
            seed: self.seed(),
        })
    }

    fn energy_j(&self) -> i64 {
        self.lattice.energy_j.unwrap_or(DEFAULT_ENERGY_J)
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        match &self.lattice.input {
            Some(input) => validation::validate_path("lattice.input", &input.to_string_lossy())?,
            None => {
                let rows = validation::validate_required_field("lattice.rows", &self.lattice.rows)?;
                let cols = validation::validate_required_field("lattice.cols", &self.lattice.cols)?;
                Shape::new(*rows, *cols)?;
            }
        }

        validation::validate_range(
            "lattice.energy_j",
            self.energy_j(),
            -MAX_ENERGY_J,
            MAX_ENERGY_J,
        )?;
        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level.trim().to_ascii_lowercase().as_str()) {
                return Err(IsingError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }
        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_formats("output.formats", &self.output.formats, &SUPPORTED_FORMATS)?;
        Ok(())
    }
}
