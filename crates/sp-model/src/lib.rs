//! sp-model: Streeter–Phelps oxygen-sag model for a single river reach.
//!
//! BOD decays exponentially with travel time; the dissolved-oxygen deficit is
//! the balance between that decay and atmospheric reaeration. Everything here
//! is a pure function of [`ModelParameters`] and the sampled distances.

pub mod critical;
pub mod error;
pub mod evaluator;
pub mod grid;
pub mod params;
pub mod profile;
pub mod render;
pub mod threshold;

pub use critical::{CriticalPoint, critical_point};
pub use error::{ModelError, ModelResult};
pub use evaluator::{
    DEFAULT_LIMIT_TOLERANCE, DegeneracyPolicy, ModelEvaluator, bod, deficit, dissolved_oxygen,
};
pub use grid::{DistanceGrid, DistanceSeries, Endpoint, MAX_GRID_POINTS};
pub use params::ModelParameters;
pub use profile::{
    ExecutionMode, PARALLEL_THRESHOLD, Profile, evaluate_profile, evaluate_profile_with,
};
pub use render::{
    BOD_SERIES, CONCENTRATION_AXIS_LABEL, DISTANCE_AXIS_LABEL, DO_SERIES, NamedSeries,
    RenderPayload, THRESHOLD_SERIES,
};
pub use threshold::{Excursion, constant_threshold, find_excursions, impaired_length_km};
