use ising_model::core::export;
use ising_model::utils::validation::Validate;
use ising_model::{CliConfig, IsingEngine, LocalStorage, Model, Shape, TomlConfig};
use std::path::PathBuf;
use tempfile::TempDir;

fn cli_config(output_path: &str) -> CliConfig {
    CliConfig {
        rows: 10,
        cols: 5,
        energy_j: 1,
        seed: Some(2024),
        input: None,
        output_path: output_path.to_string(),
        formats: vec!["json".to_string(), "csv".to_string()],
        verbose: false,
        log_json: false,
    }
}

#[tokio::test]
async fn test_end_to_end_random_lattice() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("run");
    let output_path = output_path.to_str().unwrap().to_string();

    let config = cli_config(&output_path);
    assert!(config.validate().is_ok());

    let engine = IsingEngine::new(LocalStorage::new(output_path.clone()), config);
    let summary = engine.run().await.unwrap();

    assert_eq!(summary.written, vec!["observables.json", "lattice.csv"]);

    let report_path = PathBuf::from(&output_path).join("observables.json");
    let lattice_path = PathBuf::from(&output_path).join("lattice.csv");
    assert!(report_path.exists());
    assert!(lattice_path.exists());

    let expected = Model::seeded(Shape::new(10, 5).unwrap(), 1, 2024).unwrap();

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["rows"], 10);
    assert_eq!(report["cols"], 5);
    assert_eq!(report["seed"], 2024);
    assert_eq!(report["magnetism"], expected.magnetism());
    assert_eq!(report["energy"], expected.energy());

    let csv = std::fs::read_to_string(&lattice_path).unwrap();
    assert_eq!(csv.lines().count(), 10);
    assert!(csv
        .lines()
        .all(|line| line.split(',').all(|v| v == "1" || v == "-1")));
    assert_eq!(export::lattice_from_csv(&csv, 1).unwrap(), expected);
}

#[tokio::test]
async fn test_lattice_file_input_is_measured() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("aligned.csv");
    std::fs::write(&input_path, "1,1,1,1\n1,1,1,1\n1,1,1,1\n1,1,1,1\n").unwrap();

    let output_path = temp_dir.path().join("out").to_str().unwrap().to_string();
    let mut config = cli_config(&output_path);
    config.input = Some(input_path);
    config.energy_j = 2;
    config.formats = vec!["json".to_string()];

    let engine = IsingEngine::new(LocalStorage::new(output_path.clone()), config);
    let summary = engine.run().await.unwrap();

    assert_eq!(summary.observables.magnetism, 16);
    assert_eq!(summary.observables.energy, -64);
    assert_eq!(summary.observables.seed, None);
    assert_eq!(summary.written, vec!["observables.json"]);
    assert!(!PathBuf::from(&output_path).join("lattice.csv").exists());
}

#[tokio::test]
async fn test_invalid_lattice_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("broken.csv");
    std::fs::write(&input_path, "1,-1\n1,0\n").unwrap();

    let output_path = temp_dir.path().to_str().unwrap().to_string();
    let mut config = cli_config(&output_path);
    config.input = Some(input_path);

    let engine = IsingEngine::new(LocalStorage::new(output_path), config);
    let err = engine.run().await.unwrap_err();

    assert!(matches!(
        err,
        ising_model::IsingError::InvalidSpin { row: 1, col: 1, .. }
    ));
    assert_eq!(err.severity().exit_code(), 1);
}

#[tokio::test]
async fn test_unvalidated_limits_fail_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("run");
    let output_path = output_path.to_str().unwrap().to_string();

    let mut config = cli_config(&output_path);
    config.rows = usize::MAX / 2;
    config.cols = 4;
    let engine = IsingEngine::new(LocalStorage::new(output_path.clone()), config);
    assert!(matches!(
        engine.run().await,
        Err(ising_model::IsingError::LatticeTooLarge { .. })
    ));

    let mut config = cli_config(&output_path);
    config.energy_j = i64::MAX;
    let engine = IsingEngine::new(LocalStorage::new(output_path.clone()), config);
    assert!(matches!(
        engine.run().await,
        Err(ising_model::IsingError::CouplingOutOfRange { .. })
    ));

    assert!(!PathBuf::from(&output_path).exists());
}

#[tokio::test]
async fn test_toml_driven_run() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("toml-run");

    let toml_content = format!(
        r#"
[lattice]
rows = 8
cols = 8
energy_j = 1

[random]
seed = 5

[output]
path = "{}"
formats = ["csv"]
"#,
        output_path.to_str().unwrap().replace('\\', "/")
    );

    let config = TomlConfig::from_toml_str(&toml_content).unwrap();
    assert!(config.validate().is_ok());

    let engine = IsingEngine::new(LocalStorage::new(config.output.path.clone()), config);

    let plan = engine.dry_run().unwrap();
    assert_eq!(plan.file_names(), vec!["lattice.csv"]);
    assert!(!output_path.exists());

    let summary = engine.run().await.unwrap();
    let csv = std::fs::read_to_string(output_path.join("lattice.csv")).unwrap();
    let model = export::lattice_from_csv(&csv, 1).unwrap();

    assert_eq!(model, Model::seeded(Shape::new(8, 8).unwrap(), 1, 5).unwrap());
    assert_eq!(summary.observables.energy, model.energy());
}
