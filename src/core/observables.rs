use crate::core::lattice::Model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a lattice's macroscopic quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observables {
    pub rows: usize,
    pub cols: usize,
    pub site_count: usize,
    pub energy_j: i64,
    pub magnetism: u64,
    pub energy: i64,
    pub magnetism_per_site: f64,
    pub energy_per_site: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub generated_at: DateTime<Utc>,
}

impl Observables {
    pub fn measure(model: &Model, seed: Option<u64>) -> Self {
        let shape = model.shape();
        let site_count = model.site_count();
        let magnetism = model.magnetism();
        let energy = model.energy();

        Self {
            rows: shape.rows(),
            cols: shape.cols(),
            site_count,
            energy_j: model.energy_j(),
            magnetism,
            energy,
            magnetism_per_site: magnetism as f64 / site_count as f64,
            energy_per_site: energy as f64 / site_count as f64,
            seed,
            generated_at: Utc::now(),
        }
    }
}
