//! Location of the oxygen sag minimum.
//!
//! Setting `dD/dt = 0` gives the critical travel time
//!
//! ```text
//! tc = ln[ (kr/kd) * (1 - D0 (kr - kd) / (kd L0)) ] / (kr - kd)
//! ```
//!
//! and, for coincident rates, `tc = (1 - D0/L0) / kd`. A non-positive
//! `tc` (or no real solution) means the deficit only shrinks downstream and
//! the worst point is the outfall itself.

use crate::error::ModelResult;
use crate::evaluator::{ModelEvaluator, Regime};
use crate::params::ModelParameters;
use sp_core::Real;
use sp_core::units::{Time, as_hours, hours};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalPoint {
    /// Travel time from the outfall to the sag minimum.
    pub travel_time: Time,
    pub distance_km: Real,
    pub max_deficit_mg_l: Real,
    pub min_do_mg_l: Real,
    /// True when the worst DO is at the outfall (no downstream sag).
    pub at_outfall: bool,
}

impl CriticalPoint {
    pub fn travel_time_h(&self) -> Real {
        as_hours(self.travel_time)
    }
}

pub fn critical_point(evaluator: &ModelEvaluator) -> ModelResult<CriticalPoint> {
    let regime = evaluator.regime()?;
    let params = evaluator.params();

    let tc = match regime {
        Regime::General => general_critical_time(params),
        Regime::Limiting => limiting_critical_time(params),
    }
    .filter(|t| t.is_finite() && *t > 0.0)
    .unwrap_or(0.0);

    let distance_km = params.velocity() * tc;
    let min_do_mg_l = evaluator.dissolved_oxygen(distance_km)?;

    Ok(CriticalPoint {
        travel_time: hours(tc),
        distance_km,
        max_deficit_mg_l: params.saturation_do() - min_do_mg_l,
        min_do_mg_l,
        at_outfall: tc == 0.0,
    })
}

fn general_critical_time(p: &ModelParameters) -> Option<Real> {
    let kd = p.decay_rate();
    let kr = p.reaeration_rate();
    let l0 = p.initial_bod();
    if kd == 0.0 || l0 == 0.0 {
        return None;
    }
    let arg = (kr / kd) * (1.0 - p.initial_deficit() * (kr - kd) / (kd * l0));
    if arg.is_nan() || arg <= 0.0 {
        return None;
    }
    Some(arg.ln() / (kr - kd))
}

fn limiting_critical_time(p: &ModelParameters) -> Option<Real> {
    let kd = p.decay_rate();
    let l0 = p.initial_bod();
    if kd == 0.0 || l0 == 0.0 {
        return None;
    }
    Some((1.0 - p.initial_deficit() / l0) / kd)
}
