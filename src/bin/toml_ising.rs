use anyhow::Context;
use clap::Parser;
use ising_model::domain::ports::ConfigProvider;
use ising_model::utils::{logger, validation::Validate};
use ising_model::{IsingEngine, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-ising")]
#[command(about = "Ising lattice tool driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "ising.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the seed from the config
    #[arg(long)]
    seed: Option<u64>,

    /// Override the output directory from the config
    #[arg(long)]
    output_path: Option<String>,

    /// Show what would be produced without building or writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    let directive = config.log_directive(args.verbose);
    if config.json_logs() {
        logger::init_json_logger(&directive);
    } else {
        logger::init_cli_logger(&directive);
    }
    tracing::info!("Loaded configuration from {}", args.config);

    if let Some(seed) = args.seed {
        config.set_seed(seed);
        tracing::info!("Seed overridden to {}", seed);
    }
    if let Some(output_path) = args.output_path {
        tracing::info!("Output path overridden to {}", output_path);
        config.output.path = output_path;
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = IsingEngine::new(storage.clone(), config);

    if args.dry_run {
        tracing::info!("DRY RUN - nothing will be written");
        let plan = engine.dry_run()?;
        println!("Source:  {}", plan.source);
        println!("J:       {}", plan.energy_j);
        for name in plan.file_names() {
            println!("Output:  {}", storage.resolve(name).display());
        }
        return Ok(());
    }

    match engine.run().await {
        Ok(summary) => {
            let obs = &summary.observables;
            println!(
                "{}x{} lattice: magnetism = {}, energy = {}",
                obs.rows, obs.cols, obs.magnetism, obs.energy
            );
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
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}
