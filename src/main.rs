use clap::Parser;
use ising_model::utils::{logger, validation::Validate};
use ising_model::{CliConfig, IsingEngine, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let directive = logger::default_directive(config.verbose);
    if config.log_json {
        logger::init_json_logger(&directive);
    } else {
        logger::init_cli_logger(&directive);
    }

    tracing::info!("Starting ising-model CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let engine = IsingEngine::new(storage.clone(), config);

    match engine.run().await {
        Ok(summary) => {
            let obs = &summary.observables;
            println!("Lattice:   {}x{} (J = {})", obs.rows, obs.cols, obs.energy_j);
            if let Some(seed) = obs.seed {
                println!("Seed:      {}", seed);
            }
            println!("Magnetism: {}", obs.magnetism);
            println!("Energy:    {}", obs.energy);
            for name in &summary.written {
                println!("📁 {}", storage.resolve(name).display());
            }
        }
        Err(e) => {
            tracing::error!(
                "Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.severity().exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
