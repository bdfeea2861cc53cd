//! Query and export helpers for evaluation reports.

use sp_core::units::as_hours;

use crate::error::{AppError, AppResult};
use crate::evaluation_service::EvaluationReport;

/// Headline numbers of an evaluation.
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub name: String,
    pub point_count: usize,
    pub distance_range_km: (f64, f64),
    pub min_do_mg_l: f64,
    pub critical_distance_km: f64,
    pub critical_travel_time_h: f64,
    pub excursion_count: usize,
    pub impaired_length_km: f64,
    pub impaired_travel_time_h: f64,
    /// True when every excursion recovers before the end of the grid.
    pub recovers: bool,
}

pub fn summarize(report: &EvaluationReport) -> ReportSummary {
    let distances = &report.profile.distance_km;
    let d_min = distances.first().copied().unwrap_or(0.0);
    let d_max = distances.last().copied().unwrap_or(0.0);

    ReportSummary {
        name: report.scenario_name.clone(),
        point_count: report.profile.len(),
        distance_range_km: (d_min, d_max),
        min_do_mg_l: report.critical.min_do_mg_l,
        critical_distance_km: report.critical.distance_km,
        critical_travel_time_h: report.critical.travel_time_h(),
        excursion_count: report.excursions.len(),
        impaired_length_km: report.impaired_length_km,
        impaired_travel_time_h: as_hours(report.impaired_travel_time),
        recovers: report.excursions.iter().all(|e| e.recovers),
    }
}

/// Render payload as pretty-printed JSON.
pub fn export_payload_json(report: &EvaluationReport) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(&report.payload)?)
}

/// Profile as CSV text, one row per sampled distance.
pub fn export_csv(report: &EvaluationReport) -> String {
    let p = &report.profile;
    let mut csv = String::from("distance_km,bod_mg_l,do_mg_l,critical_do_mg_l\n");
    for i in 0..p.len() {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            p.distance_km[i], p.bod_mg_l[i], p.do_mg_l[i], p.threshold_mg_l[i]
        ));
    }
    csv
}

/// Extract `(distance_km, value)` pairs for one profile variable.
pub fn extract_series(report: &EvaluationReport, variable: &str) -> AppResult<Vec<(f64, f64)>> {
    let p = &report.profile;
    let values = match variable {
        "bod" | "bod_mg_l" => &p.bod_mg_l,
        "do" | "do_mg_l" => &p.do_mg_l,
        "deficit" | "deficit_mg_l" => &p.deficit_mg_l,
        "threshold" | "critical_do_mg_l" => &p.threshold_mg_l,
        _ => {
            return Err(AppError::InvalidInput(format!(
                "Unknown profile variable: {}",
                variable
            )));
        }
    };

    Ok(p.distance_km
        .iter()
        .copied()
        .zip(values.iter().copied())
        .collect())
}
