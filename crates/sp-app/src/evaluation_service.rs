//! Scenario evaluation: grid, profile, critical point and excursions.

use std::path::Path;
use std::time::Instant;

use sp_core::units::{Time, km, km_per_h, travel_time};
use sp_model::{
    CriticalPoint, DistanceGrid, Excursion, Profile, RenderPayload, critical_point,
    evaluate_profile, find_excursions, impaired_length_km,
};
use sp_project::Scenario;

use crate::error::AppResult;
use crate::scenario_service;

/// Wall-clock breakdown of one evaluation.
#[derive(Debug, Clone, Default)]
pub struct EvaluationTiming {
    pub build_time_s: f64,
    pub profile_time_s: f64,
    pub analysis_time_s: f64,
    pub total_time_s: f64,
}

/// Everything computed for one scenario.
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub scenario_name: String,
    pub grid: DistanceGrid,
    pub profile: Profile,
    pub critical: CriticalPoint,
    pub excursions: Vec<Excursion>,
    pub impaired_length_km: f64,
    /// Time a parcel of water spends below the critical level.
    pub impaired_travel_time: Time,
    pub critical_do_mg_l: f64,
    pub limiting_case: bool,
    pub payload: RenderPayload,
    pub timing: EvaluationTiming,
}

pub fn evaluate_path(path: &Path) -> AppResult<EvaluationReport> {
    let scenario = scenario_service::load_scenario(path)?;
    evaluate_scenario(&scenario)
}

pub fn evaluate_scenario(scenario: &Scenario) -> AppResult<EvaluationReport> {
    let total_start = Instant::now();
    scenario_service::validate_scenario(scenario)?;

    let build_start = Instant::now();
    let evaluator = scenario_service::build_evaluator(scenario)?;
    let grid = scenario_service::build_grid(scenario)?;
    let distances = grid.generate();
    let build_time_s = build_start.elapsed().as_secs_f64();

    let profile_start = Instant::now();
    let profile = evaluate_profile(&evaluator, &distances, scenario.critical_do_mg_l)?;
    let profile_time_s = profile_start.elapsed().as_secs_f64();

    let analysis_start = Instant::now();
    let critical = critical_point(&evaluator)?;
    let excursions = find_excursions(
        &profile.distance_km,
        &profile.do_mg_l,
        scenario.critical_do_mg_l,
    )?;
    let impaired = impaired_length_km(&excursions);
    let impaired_travel_time = travel_time(
        km(impaired),
        km_per_h(evaluator.params().velocity().abs()),
    );
    let payload = RenderPayload::from_profile(scenario.name.clone(), &profile)?;
    let analysis_time_s = analysis_start.elapsed().as_secs_f64();

    if excursions.iter().any(|e| !e.recovers) {
        tracing::warn!(
            scenario = %scenario.name,
            critical_do_mg_l = scenario.critical_do_mg_l,
            "DO is still below the critical level at the end of the grid"
        );
    }

    tracing::info!(
        scenario = %scenario.name,
        points = profile.len(),
        min_do_mg_l = critical.min_do_mg_l,
        critical_km = critical.distance_km,
        excursions = excursions.len(),
        impaired_km = impaired,
        "evaluated scenario"
    );

    Ok(EvaluationReport {
        scenario_name: scenario.name.clone(),
        grid,
        profile,
        critical,
        excursions,
        impaired_length_km: impaired,
        impaired_travel_time,
        critical_do_mg_l: scenario.critical_do_mg_l,
        limiting_case: evaluator.uses_limiting_case(),
        payload,
        timing: EvaluationTiming {
            build_time_s,
            profile_time_s,
            analysis_time_s,
            total_time_s: total_start.elapsed().as_secs_f64(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_core::units::as_hours;
    use sp_project::DegeneracyDef;

    #[test]
    fn reference_report() {
        let report = evaluate_scenario(&Scenario::reference()).unwrap();
        assert_eq!(report.profile.len(), 250);
        assert_eq!(report.excursions.len(), 1);
        assert!(!report.limiting_case);
        assert!(report.impaired_length_km > 14.0 && report.impaired_length_km < 18.0);
        // 2 km/h -> hours = km / 2
        let hours = as_hours(report.impaired_travel_time);
        assert!((hours - report.impaired_length_km / 2.0).abs() < 1e-9);
        assert!(report.timing.total_time_s >= report.timing.profile_time_s);
        assert!(report.payload.is_aligned());
    }

    #[test]
    fn invalid_scenario_is_rejected_before_evaluation() {
        let mut scenario = Scenario::reference();
        scenario.parameters.reaeration_rate_per_h = scenario.parameters.decay_rate_per_h;
        let err = evaluate_scenario(&scenario).unwrap_err();
        assert!(matches!(err, crate::AppError::Validation(_)));
    }

    #[test]
    fn limiting_case_scenario_evaluates() {
        let mut scenario = Scenario::reference();
        scenario.parameters.reaeration_rate_per_h = scenario.parameters.decay_rate_per_h;
        scenario.degenerate_rates = DegeneracyDef::LimitingCase { tolerance: 1e-9 };
        let report = evaluate_scenario(&scenario).unwrap();
        assert!(report.limiting_case);
        assert!(report.profile.do_mg_l.iter().all(|v| v.is_finite()));
    }
}
