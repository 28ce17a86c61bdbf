use crate::core::lattice::Model;
use crate::core::observables::Observables;
use crate::utils::error::{IsingError, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SUPPORTED_FORMATS: [&str; 2] = ["json", "csv"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Observables report.
    Json,
    /// The spin grid itself.
    Csv,
}

impl OutputFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "observables.json",
            OutputFormat::Csv => "lattice.csv",
        }
    }

    /// Parses a list of names, keeping the first occurrence of each format.
    pub fn parse_list(names: &[String]) -> Result<Vec<OutputFormat>> {
        let mut formats = Vec::with_capacity(names.len());
        for name in names {
            let format = name.parse::<OutputFormat>()?;
            if !formats.contains(&format) {
                formats.push(format);
            }
        }
        Ok(formats)
    }
}

impl FromStr for OutputFormat {
    type Err = IsingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(IsingError::InvalidConfigValueError {
                field: "output.formats".to_string(),
                value: s.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    SUPPORTED_FORMATS.join(", ")
                ),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// One CSV row per lattice row, values `1` / `-1`, no header.
pub fn lattice_to_csv(model: &Model) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    for row in model.lattice().rows() {
        writer.write_record(row.iter().map(|s| s.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| IsingError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn lattice_from_csv(input: impl AsRef<[u8]>, energy_j: i64) -> Result<Model> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_ref());

    let mut spins = Vec::new();
    let mut rows = 0;
    let mut cols = 0;

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if row == 0 {
            cols = record.len();
        } else if record.len() != cols {
            return Err(IsingError::RaggedLattice {
                row,
                expected: cols,
                found: record.len(),
            });
        }

        for (col, field) in record.iter().enumerate() {
            let value = field.parse::<i8>().map_err(|_| IsingError::InvalidSpin {
                row,
                col,
                value: field.to_string(),
            })?;
            spins.push(value);
        }
        rows += 1;
    }

    let grid = Array2::from_shape_vec((rows, cols), spins)
        .map_err(|_| IsingError::InvalidShape { rows, cols })?;
    Model::from_spins(grid, energy_j)
}

pub fn report_to_json(observables: &Observables) -> Result<String> {
    Ok(serde_json::to_string_pretty(observables)?)
}
