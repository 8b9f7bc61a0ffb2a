//! Loading engine configuration and scenarios from disk.

use std::io::Write;

use pd_app::{
    AppError, EngineConfig, Scenario, SimulationFacade, load_config, load_scenario, save_scenario,
};
use pd_core::ModelId;
use tempfile::{NamedTempFile, tempdir};

#[test]
fn config_file_changes_grid_size() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "sampling:\n  exponential: 50\n  sir: 120").unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.sampling.exponential, 50);
    assert_eq!(config.sampling.si, 300);

    let facade = SimulationFacade::new(&config).unwrap();
    let model = ModelId::Sir;
    let envelope = facade
        .evaluate(model, &model.default_params())
        .unwrap()
        .into_envelope()
        .unwrap();
    assert_eq!(envelope.series.len(), 120);
}

#[test]
fn rk4_config_still_evaluates_seir() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "ode:\n  method: rk4\n  rk4_substeps: 8").unwrap();
    let config = load_config(file.path()).unwrap();
    let facade = SimulationFacade::new(&config).unwrap();
    let outcome = facade
        .evaluate(ModelId::Seir, &ModelId::Seir.default_params())
        .unwrap();
    assert!(outcome.is_ok());
}

#[test]
fn missing_config_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.yaml");
    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, AppError::FileRead { what: "config", .. }));
    assert!(err.to_string().contains("nope.yaml"));
}

#[test]
fn scenario_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sir.yaml");
    let scenario = Scenario::new(
        ModelId::Sir,
        ModelId::Sir.default_params().without("gamma"),
    );
    save_scenario(&path, &scenario).unwrap();

    let loaded = load_scenario(&path).unwrap();
    assert_eq!(loaded, scenario);

    let outcome = SimulationFacade::new(&EngineConfig::default())
        .unwrap()
        .evaluate(loaded.model, &loaded.params)
        .unwrap();
    assert!(outcome.is_incomplete());
}
