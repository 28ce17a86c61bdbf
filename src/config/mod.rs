pub mod cli;
pub mod toml_config;

use crate::core::export::SUPPORTED_FORMATS;
use crate::core::lattice::{DEFAULT_ENERGY_J, MAX_ENERGY_J};
use crate::domain::model::{LatticeSource, Shape};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "ising-model"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Build a square-lattice Ising model and report its magnetism and energy")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = "32"))]
    pub rows: usize,

    #[cfg_attr(feature = "cli", arg(long, default_value = "32"))]
    pub cols: usize,

    #[cfg_attr(
        feature = "cli",
        arg(long, default_value_t = DEFAULT_ENERGY_J, allow_hyphen_values = true, help = "Energy by which an aligned pair lowers the system")
    )]
    pub energy_j: i64,

    #[cfg_attr(feature = "cli", arg(long, help = "Seed for a reproducible lattice"))]
    pub seed: Option<u64>,

    #[cfg_attr(
        feature = "cli",
        arg(long, help = "Load the lattice from a CSV file instead of generating it")
    )]
    pub input: Option<PathBuf>,

    #[cfg_attr(feature = "cli", arg(long, default_value = "./output"))]
    pub output_path: String,

    #[cfg_attr(
        feature = "cli",
        arg(long, value_delimiter = ',', default_value = "json,csv")
    )]
    pub formats: Vec<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON lines"))]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn lattice_source(&self) -> Result<LatticeSource> {
        match &self.input {
            Some(path) => Ok(LatticeSource::CsvFile(path.clone())),
            None => Ok(LatticeSource::Random {
                shape: Shape::new(self.rows, self.cols)?,
                seed: self.seed,
            }),
        }
    }

    fn energy_j(&self) -> i64 {
        self.energy_j
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.input {
            Some(path) => validation::validate_path("input", &path.to_string_lossy())?,
            None => {
                Shape::new(self.rows, self.cols)?;
            }
        }
        validation::validate_range("energy_j", self.energy_j, -MAX_ENERGY_J, MAX_ENERGY_J)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_formats("formats", &self.formats, &SUPPORTED_FORMATS)?;
        Ok(())
    }
}
