use std::path::PathBuf;

fn scenarios_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("scenarios")
}

#[test]
fn shipped_scenarios_load_and_validate() {
    let names = ["reference.yaml", "equal_rates.yaml", "legacy_v0.yaml"];

    for name in names {
        let path = scenarios_dir().join(name);
        let scenario = sp_project::load_yaml(&path)
            .unwrap_or_else(|e| panic!("Failed to load {}: {}", name, e));
        sp_project::validate_scenario(&scenario)
            .unwrap_or_else(|e| panic!("Failed to validate {}: {}", name, e));
        assert_eq!(scenario.version, sp_project::LATEST_VERSION);
    }
}

#[test]
fn reference_file_matches_builtin_reference() {
    let loaded = sp_project::load_yaml(&scenarios_dir().join("reference.yaml")).unwrap();
    let builtin = sp_project::Scenario::reference();
    assert_eq!(loaded.parameters, builtin.parameters);
    assert_eq!(loaded.grid, builtin.grid);
    assert_eq!(loaded.critical_do_mg_l, builtin.critical_do_mg_l);
    assert_eq!(loaded.degenerate_rates, builtin.degenerate_rates);
}

#[test]
fn legacy_file_is_migrated_to_inclusive_grid() {
    let loaded = sp_project::load_yaml(&scenarios_dir().join("legacy_v0.yaml")).unwrap();
    assert_eq!(
        loaded.grid.endpoint,
        Some(sp_project::EndpointDef::Inclusive)
    );
    assert_eq!(loaded.critical_do_mg_l, 5.0);
}
