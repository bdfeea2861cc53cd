//! Longitudinal profile: BOD, DO, deficit and threshold on one distance grid.

use crate::error::{ModelError, ModelResult};
use crate::evaluator::{ModelEvaluator, Regime, do_in_regime};
use crate::grid::DistanceSeries;
use crate::threshold::constant_threshold;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sp_core::{Real, ensure_finite};

/// Grid size at which [`ExecutionMode::Auto`] switches to rayon.
pub const PARALLEL_THRESHOLD: usize = 16_384;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    #[default]
    Auto,
    Sequential,
    Parallel,
}

impl ExecutionMode {
    fn is_parallel(self, len: usize) -> bool {
        match self {
            Self::Auto => len >= PARALLEL_THRESHOLD,
            Self::Sequential => false,
            Self::Parallel => true,
        }
    }
}

/// Aligned concentration series along the reach. All vectors share one length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub distance_km: Vec<Real>,
    pub bod_mg_l: Vec<Real>,
    pub do_mg_l: Vec<Real>,
    pub deficit_mg_l: Vec<Real>,
    pub threshold_mg_l: Vec<Real>,
}

impl Profile {
    pub fn len(&self) -> usize {
        self.distance_km.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distance_km.is_empty()
    }

    /// Index and value of the lowest sampled DO.
    pub fn min_do(&self) -> Option<(usize, Real)> {
        self.do_mg_l
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, v)| !v.is_nan())
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Check that every series has the same length as the distances.
    pub fn check_aligned(&self) -> ModelResult<()> {
        let expected = self.distance_km.len();
        let series = [
            ("bod series", self.bod_mg_l.len()),
            ("do series", self.do_mg_l.len()),
            ("deficit series", self.deficit_mg_l.len()),
            ("threshold series", self.threshold_mg_l.len()),
        ];
        for (what, actual) in series {
            if actual != expected {
                return Err(ModelError::LengthMismatch {
                    what,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}

/// Evaluate the profile, picking sequential or parallel by grid size.
pub fn evaluate_profile(
    evaluator: &ModelEvaluator,
    distances: &DistanceSeries,
    threshold_mg_l: Real,
) -> ModelResult<Profile> {
    evaluate_profile_with(evaluator, distances, threshold_mg_l, ExecutionMode::Auto)
}

pub fn evaluate_profile_with(
    evaluator: &ModelEvaluator,
    distances: &DistanceSeries,
    threshold_mg_l: Real,
    mode: ExecutionMode,
) -> ModelResult<Profile> {
    let threshold_mg_l = ensure_finite(threshold_mg_l, "critical DO threshold")?;
    let regime = evaluator.regime()?;
    if regime == Regime::Limiting {
        tracing::warn!(
            kd = evaluator.params().decay_rate(),
            kr = evaluator.params().reaeration_rate(),
            "rates coincide; using limiting-case DO formula"
        );
    }

    let xs = distances.as_slice();
    let params = evaluator.params();
    let point = |x: Real| -> (Real, Real) { (evaluator.bod(x), do_in_regime(regime, x, params)) };

    let parallel = mode.is_parallel(xs.len());
    tracing::debug!(points = xs.len(), parallel, "evaluating profile");

    let (bod_mg_l, do_mg_l): (Vec<Real>, Vec<Real>) = if parallel {
        xs.par_iter().map(|&x| point(x)).unzip()
    } else {
        xs.iter().map(|&x| point(x)).unzip()
    };

    let cs = params.saturation_do();
    let deficit_mg_l = do_mg_l.iter().map(|c| cs - c).collect();

    Ok(Profile {
        distance_km: xs.to_vec(),
        bod_mg_l,
        do_mg_l,
        deficit_mg_l,
        threshold_mg_l: constant_threshold(threshold_mg_l, xs.len()),
    })
}
