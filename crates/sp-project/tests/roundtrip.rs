use sp_project::*;

fn temp_path(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("sp_project_roundtrip");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

fn sample_scenario() -> Scenario {
    let mut scenario = Scenario::reference();
    scenario.name = "Roundtrip reach".to_string();
    scenario.description = Some("Lower velocity, limiting-case policy".to_string());
    scenario.parameters.velocity_km_h = 1.25;
    scenario.grid.endpoint = Some(EndpointDef::Inclusive);
    scenario.degenerate_rates = DegeneracyDef::LimitingCase { tolerance: 1e-6 };
    scenario
}

#[test]
fn yaml_roundtrip() {
    let scenario = sample_scenario();
    let path = temp_path("scenario.yaml");

    save_yaml(&path, &scenario).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn json_roundtrip() {
    let scenario = sample_scenario();
    let path = temp_path("scenario.json");

    save_json(&path, &scenario).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn save_refuses_invalid_scenario() {
    let mut scenario = sample_scenario();
    scenario.grid.step_km = 0.0;
    let path = temp_path("invalid.yaml");

    let err = save_yaml(&path, &scenario).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
}

#[test]
fn malformed_yaml_reports_parse_error() {
    let err = from_yaml_str("version: [not a number").unwrap_err();
    assert!(matches!(err, ProjectError::Yaml(_)));
}

#[test]
fn future_version_rejected_on_load() {
    // Versions above latest are rejected by validation, not migration.
    let mut scenario = Scenario::reference();
    scenario.version = LATEST_VERSION + 1;
    let json = serde_json::to_string(&scenario).unwrap();
    let err = from_json_str(&json).unwrap_err();
    assert!(matches!(
        err,
        ProjectError::Validation(ValidationError::UnsupportedVersion { .. })
    ));
}
