use crate::config::cli::LocalStorage;
use crate::core::export::{self, OutputFormat};
use crate::core::lattice::Model;
use crate::core::observables::Observables;
use crate::domain::model::LatticeSource;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;

/// What a run will do, resolved from configuration before any work happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub source: LatticeSource,
    pub energy_j: i64,
    pub formats: Vec<OutputFormat>,
}

impl RunPlan {
    pub fn file_names(&self) -> Vec<&'static str> {
        self.formats.iter().map(|f| f.file_name()).collect()
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub observables: Observables,
    /// Paths relative to the storage root, in the order they were written.
    pub written: Vec<String>,
}

pub struct IsingEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> IsingEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn plan(&self) -> Result<RunPlan> {
        Ok(RunPlan {
            source: self.config.lattice_source()?,
            energy_j: self.config.energy_j(),
            formats: OutputFormat::parse_list(self.config.output_formats())?,
        })
    }

    /// Resolves the plan and logs it without building a lattice or touching storage.
    pub fn dry_run(&self) -> Result<RunPlan> {
        let plan = self.plan()?;
        tracing::info!("Would build {} with J = {}", plan.source, plan.energy_j);
        for name in plan.file_names() {
            tracing::info!("Would write {}/{}", self.config.output_path(), name);
        }
        Ok(plan)
    }

    /// Builds the lattice and returns it with the seed that produced it, if any.
    ///
    /// An unseeded random source draws its seed up front so the run can be repeated.
    pub async fn build_model(&self, source: &LatticeSource) -> Result<(Model, Option<u64>)> {
        let energy_j = self.config.energy_j();
        match source {
            LatticeSource::Random { shape, seed } => {
                let seed = seed.unwrap_or_else(rand::random);
                tracing::debug!("Generating {} lattice from seed {}", shape, seed);
                Ok((Model::seeded(*shape, energy_j, seed)?, Some(seed)))
            }
            LatticeSource::CsvFile(path) => {
                tracing::debug!("Reading lattice from {}", path.display());
                let (input, name) = LocalStorage::for_file(path)?;
                let content = input.read_file(&name).await?;
                Ok((export::lattice_from_csv(&content, energy_j)?, None))
            }
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let plan = self.plan()?;
        tracing::info!("Building {}", plan.source);

        let (model, seed) = self.build_model(&plan.source).await?;
        let observables = Observables::measure(&model, seed);
        tracing::info!(
            "Lattice {}: magnetism = {}, energy = {} (J = {})",
            model.shape(),
            observables.magnetism,
            observables.energy,
            observables.energy_j
        );

        let mut written = Vec::with_capacity(plan.formats.len());
        for format in &plan.formats {
            let content = match format {
                OutputFormat::Json => export::report_to_json(&observables)?,
                OutputFormat::Csv => export::lattice_to_csv(&model)?,
            };
            let name = format.file_name();
            self.storage.write_file(name, content.as_bytes()).await?;
            tracing::info!("Wrote {} output to {}", format, name);
            written.push(name.to_string());
        }

        Ok(RunSummary {
            observables,
            written,
        })
    }
}
