pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use crate::core::{
    engine::{IsingEngine, RunPlan, RunSummary},
    export::OutputFormat,
    lattice::Model,
    observables::Observables,
};
pub use crate::domain::model::{LatticeSource, Shape, Spin};
pub use crate::utils::error::{IsingError, Result};
