//! Application service layer for the oxygen-sag workspace.
//!
//! Loads scenario files, turns them into model inputs, evaluates the
//! profile and packages the results for a renderer or for export.

pub mod error;
pub mod evaluation_service;
pub mod query;
pub mod scenario_service;

pub use error::{AppError, AppResult};
pub use evaluation_service::{
    EvaluationReport, EvaluationTiming, evaluate_path, evaluate_scenario,
};
pub use query::{ReportSummary, export_csv, export_payload_json, extract_series, summarize};
pub use scenario_service::{
    build_evaluator, build_grid, build_parameters, load_scenario, save_scenario,
    validate_scenario,
};
