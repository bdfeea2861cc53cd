//! Distance grids along the river.
//!
//! A grid is a uniform lattice `start + i * step`. Points are computed from
//! the index rather than by accumulation, so long grids do not drift.

use crate::error::{ModelError, ModelResult};
use sp_core::{MAX_SAMPLES, Real, ensure_finite};
use std::fmt;

/// Upper bound on generated grid size.
pub const MAX_GRID_POINTS: usize = MAX_SAMPLES;

/// Relative slack when deciding whether `stop` sits on the step lattice.
const LATTICE_TOL: Real = 1e-9;

/// Whether the grid includes its stop value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endpoint {
    /// Half-open `[start, stop)`, like `arange`.
    #[default]
    Exclusive,
    /// Closed `[start, stop]`; `stop` is emitted exactly when it lies on the lattice.
    Inclusive,
}

/// Uniform sampling of distances in km.
///
/// Fields are private so every grid has passed the checks in [`DistanceGrid::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceGrid {
    start_km: Real,
    stop_km: Real,
    step_km: Real,
    endpoint: Endpoint,
}

impl DistanceGrid {
    pub fn new(
        start_km: Real,
        stop_km: Real,
        step_km: Real,
        endpoint: Endpoint,
    ) -> ModelResult<Self> {
        let grid = Self {
            start_km: ensure_finite(start_km, "grid start")?,
            stop_km: ensure_finite(stop_km, "grid stop")?,
            step_km: ensure_finite(step_km, "grid step")?,
            endpoint,
        };

        if grid.start_km < 0.0 {
            return Err(ModelError::InvalidGrid {
                what: format!("start must be non-negative, got {start_km}"),
            });
        }
        if grid.step_km <= 0.0 {
            return Err(ModelError::InvalidGrid {
                what: format!("step must be positive, got {step_km}"),
            });
        }
        if grid.stop_km < grid.start_km {
            return Err(ModelError::InvalidGrid {
                what: format!("stop ({stop_km}) is before start ({start_km})"),
            });
        }

        let steps = (grid.stop_km - grid.start_km) / grid.step_km;
        if steps >= MAX_GRID_POINTS as Real {
            return Err(ModelError::InvalidGrid {
                what: format!("grid would exceed {MAX_GRID_POINTS} points"),
            });
        }

        Ok(grid)
    }

    /// 0 to 50 km every 0.2 km, stop excluded (250 points).
    pub fn reference() -> Self {
        Self {
            start_km: 0.0,
            stop_km: 50.0,
            step_km: 0.2,
            endpoint: Endpoint::Exclusive,
        }
    }

    pub fn start_km(&self) -> Real {
        self.start_km
    }

    pub fn stop_km(&self) -> Real {
        self.stop_km
    }

    pub fn step_km(&self) -> Real {
        self.step_km
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Whole steps between start and stop, and whether stop lands on the lattice.
    fn lattice(&self) -> (usize, bool) {
        let raw = (self.stop_km - self.start_km) / self.step_km;
        let nearest = raw.round();
        if (raw - nearest).abs() <= LATTICE_TOL * nearest.max(1.0) {
            (nearest as usize, true)
        } else {
            (raw.floor() as usize, false)
        }
    }

    pub fn len(&self) -> usize {
        let (steps, on_lattice) = self.lattice();
        match (self.endpoint, on_lattice) {
            (Endpoint::Exclusive, true) => steps,
            (Endpoint::Exclusive, false) | (Endpoint::Inclusive, _) => steps + 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn generate(&self) -> DistanceSeries {
        let n = self.len();
        let mut points: Vec<Real> = (0..n)
            .map(|i| self.start_km + i as Real * self.step_km)
            .collect();

        // Ensure exact endpoint
        if self.endpoint == Endpoint::Inclusive
            && self.lattice().1
            && let Some(last) = points.last_mut()
        {
            *last = self.stop_km;
        }

        tracing::debug!(
            points = n,
            start_km = self.start_km,
            stop_km = self.stop_km,
            step_km = self.step_km,
            "generated distance grid"
        );
        DistanceSeries { values: points }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exclusive => write!(f, "exclusive"),
            Self::Inclusive => write!(f, "inclusive"),
        }
    }
}

impl fmt::Display for DistanceGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {} km every {} km ({}, {} points)",
            self.start_km,
            self.stop_km,
            self.step_km,
            self.endpoint,
            self.len()
        )
    }
}

/// Ordered sample distances in km, non-negative and finite.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DistanceSeries {
    values: Vec<Real>,
}

impl DistanceSeries {
    /// Wrap caller-provided distances. Order is preserved as given.
    pub fn new(values: Vec<Real>) -> ModelResult<Self> {
        for &v in &values {
            ensure_finite(v, "distance")?;
            if v < 0.0 {
                return Err(ModelError::InvalidGrid {
                    what: format!("distance must be non-negative, got {v}"),
                });
            }
        }
        Ok(Self { values })
    }

    pub fn as_slice(&self) -> &[Real] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Real> {
        self.values.iter()
    }

    pub fn into_inner(self) -> Vec<Real> {
        self.values
    }
}

impl From<DistanceGrid> for DistanceSeries {
    fn from(grid: DistanceGrid) -> Self {
        grid.generate()
    }
}
