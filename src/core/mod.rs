pub mod engine;
pub mod export;
pub mod lattice;
pub mod observables;

pub use crate::domain::model::{LatticeSource, Shape, Spin};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
