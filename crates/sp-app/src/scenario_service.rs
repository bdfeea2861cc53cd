//! Scenario loading, saving, validation, and conversion to model inputs.

use std::path::Path;

use sp_model::{DegeneracyPolicy, DistanceGrid, Endpoint, ModelEvaluator, ModelParameters};
use sp_project::{DegeneracyDef, EndpointDef, Scenario};

use crate::error::{AppError, AppResult};

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a scenario from YAML, or JSON when the extension is `.json`.
///
/// The scenario is migrated to the latest schema version and validated.
pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ScenarioFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let scenario = if is_json(path) {
        sp_project::from_json_str(&content)?
    } else {
        sp_project::from_yaml_str(&content)?
    };

    tracing::debug!(
        path = %path.display(),
        name = %scenario.name,
        "loaded scenario"
    );
    Ok(scenario)
}

/// Save a scenario, choosing the format from the extension.
pub fn save_scenario(path: &Path, scenario: &Scenario) -> AppResult<()> {
    let content = if is_json(path) {
        sp_project::to_json_string(scenario)?
    } else {
        sp_project::to_yaml_string(scenario)?
    };

    std::fs::write(path, content).map_err(|e| AppError::ScenarioFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

pub fn validate_scenario(scenario: &Scenario) -> AppResult<()> {
    sp_project::validate_scenario(scenario)?;
    Ok(())
}

pub fn build_parameters(scenario: &Scenario) -> AppResult<ModelParameters> {
    let p = &scenario.parameters;
    Ok(ModelParameters::new(
        p.saturation_do_mg_l,
        p.initial_do_mg_l,
        p.initial_bod_mg_l,
        p.decay_rate_per_h,
        p.reaeration_rate_per_h,
        p.velocity_km_h,
    )?)
}

pub fn build_evaluator(scenario: &Scenario) -> AppResult<ModelEvaluator> {
    let policy = match scenario.degenerate_rates {
        DegeneracyDef::Reject => DegeneracyPolicy::Reject,
        DegeneracyDef::LimitingCase { tolerance } => DegeneracyPolicy::LimitingCase { tolerance },
    };
    Ok(ModelEvaluator::with_policy(build_parameters(scenario)?, policy))
}

pub fn build_grid(scenario: &Scenario) -> AppResult<DistanceGrid> {
    let g = &scenario.grid;
    let endpoint = match g.endpoint_or_default() {
        EndpointDef::Exclusive => Endpoint::Exclusive,
        EndpointDef::Inclusive => Endpoint::Inclusive,
    };
    Ok(DistanceGrid::new(g.start_km, g.stop_km, g.step_km, endpoint)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_builds_reference_inputs() {
        let scenario = Scenario::reference();
        assert_eq!(
            build_parameters(&scenario).unwrap(),
            ModelParameters::reference()
        );
        assert_eq!(build_grid(&scenario).unwrap(), DistanceGrid::reference());
        assert_eq!(
            build_evaluator(&scenario).unwrap().policy(),
            DegeneracyPolicy::Reject
        );
    }

    #[test]
    fn limiting_policy_is_carried_over() {
        let mut scenario = Scenario::reference();
        scenario.degenerate_rates = DegeneracyDef::LimitingCase { tolerance: 1e-4 };
        let evaluator = build_evaluator(&scenario).unwrap();
        assert_eq!(
            evaluator.policy(),
            DegeneracyPolicy::LimitingCase { tolerance: 1e-4 }
        );
    }

    #[test]
    fn missing_endpoint_means_exclusive() {
        let mut scenario = Scenario::reference();
        scenario.grid.endpoint = None;
        assert_eq!(build_grid(&scenario).unwrap().endpoint(), Endpoint::Exclusive);
    }

    #[test]
    fn zero_velocity_surfaces_model_error() {
        let mut scenario = Scenario::reference();
        scenario.parameters.velocity_km_h = 0.0;
        assert!(matches!(
            build_parameters(&scenario),
            Err(AppError::Model(sp_model::ModelError::ZeroVelocity))
        ));
    }

    #[test]
    fn json_extension_detection() {
        assert!(is_json(Path::new("a/b/reach.JSON")));
        assert!(!is_json(Path::new("reach.yaml")));
        assert!(!is_json(Path::new("reach")));
    }
}
