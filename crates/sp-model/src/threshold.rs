//! Comparison of sampled DO against the critical level.

use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use sp_core::{Real, linear_crossing};

/// Constant threshold series, aligned with a distance series of length `len`.
pub fn constant_threshold(level: Real, len: usize) -> Vec<Real> {
    vec![level; len]
}

/// A contiguous run of samples strictly below the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Excursion {
    /// First index below the threshold.
    pub start_index: usize,
    /// Last index below the threshold (inclusive).
    pub end_index: usize,
    pub first_below_km: Real,
    pub last_below_km: Real,
    /// Interpolated downward crossing; `None` if the run starts at the first sample.
    pub entry_km: Option<Real>,
    /// Interpolated upward crossing; `None` if the run reaches the last sample.
    pub exit_km: Option<Real>,
    /// True only when the sample after the run is at or above the threshold.
    pub recovers: bool,
}

impl Excursion {
    pub fn sample_count(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    /// Length of impaired river, using crossings where they are known.
    pub fn length_km(&self) -> Real {
        let start = self.entry_km.unwrap_or(self.first_below_km);
        let end = self.exit_km.unwrap_or(self.last_below_km);
        end - start
    }
}

/// Scan a sampled profile for runs below `threshold`.
///
/// NaN samples never count as below the threshold.
pub fn find_excursions(
    distances_km: &[Real],
    values: &[Real],
    threshold: Real,
) -> ModelResult<Vec<Excursion>> {
    if distances_km.len() != values.len() {
        return Err(ModelError::LengthMismatch {
            what: "concentration series",
            expected: distances_km.len(),
            actual: values.len(),
        });
    }

    let below = |v: Real| v < threshold;
    let n = values.len();
    let mut excursions = Vec::new();
    let mut i = 0;
    while i < n {
        if !below(values[i]) {
            i += 1;
            continue;
        }

        let start = i;
        while i + 1 < n && below(values[i + 1]) {
            i += 1;
        }
        let end = i;

        let entry_km = (start > 0)
            .then(|| {
                linear_crossing(
                    distances_km[start - 1],
                    values[start - 1],
                    distances_km[start],
                    values[start],
                    threshold,
                )
            })
            .flatten();
        let exit_km = (end + 1 < n)
            .then(|| {
                linear_crossing(
                    distances_km[end],
                    values[end],
                    distances_km[end + 1],
                    values[end + 1],
                    threshold,
                )
            })
            .flatten();

        excursions.push(Excursion {
            start_index: start,
            end_index: end,
            first_below_km: distances_km[start],
            last_below_km: distances_km[end],
            entry_km,
            exit_km,
            recovers: end + 1 < n && values[end + 1] >= threshold,
        });
        i += 1;
    }

    Ok(excursions)
}

/// Total impaired length over all excursions.
pub fn impaired_length_km(excursions: &[Excursion]) -> Real {
    excursions.iter().map(Excursion::length_km).sum()
}
