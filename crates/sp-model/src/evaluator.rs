//! Closed-form BOD and dissolved-oxygen evaluation.
//!
//! With travel time `t = x / U`:
//!
//! ```text
//! L(x)  = L0 * exp(-kd t)
//! DO(x) = Cs - [ kd L0 / (kr - kd) * (exp(-kd t) - exp(-kr t)) + D0 * exp(-kr t) ]
//! ```
//!
//! where `D0 = Cs - C0`. The DO form divides by `kr - kd`; when the rates
//! coincide the caller either gets [`ModelError::DegenerateParameter`] or,
//! with [`DegeneracyPolicy::LimitingCase`], the limit
//! `DO(x) = Cs - [ kd L0 t exp(-kd t) + D0 exp(-kd t) ]`.

use crate::error::{ModelError, ModelResult};
use crate::params::ModelParameters;
use sp_core::Real;

/// Default `|kr - kd|` below which the limiting-case formula is used.
pub const DEFAULT_LIMIT_TOLERANCE: Real = 1e-9;

/// What to do when the reaeration and decay rates coincide.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DegeneracyPolicy {
    /// Fail with [`ModelError::DegenerateParameter`] when `kr == kd`.
    #[default]
    Reject,
    /// Switch to the limiting-case formula when `|kr - kd| <= tolerance`.
    LimitingCase { tolerance: Real },
}

impl DegeneracyPolicy {
    pub fn limiting_case() -> Self {
        Self::LimitingCase {
            tolerance: DEFAULT_LIMIT_TOLERANCE,
        }
    }
}

/// Which closed form applies to a parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Regime {
    General,
    Limiting,
}

/// BOD remaining at distance `x_km` below the outfall.
#[inline]
pub fn bod(x_km: Real, params: &ModelParameters) -> Real {
    let t = params.travel_time_h(x_km);
    params.initial_bod() * (-params.decay_rate() * t).exp()
}

/// Dissolved oxygen at distance `x_km`.
///
/// Fails only when `kr == kd`.
pub fn dissolved_oxygen(x_km: Real, params: &ModelParameters) -> ModelResult<Real> {
    let regime = resolve_regime(params, DegeneracyPolicy::Reject)?;
    Ok(do_in_regime(regime, x_km, params))
}

/// Oxygen deficit `Cs - DO(x)`.
pub fn deficit(x_km: Real, params: &ModelParameters) -> ModelResult<Real> {
    Ok(params.saturation_do() - dissolved_oxygen(x_km, params)?)
}

pub(crate) fn resolve_regime(
    params: &ModelParameters,
    policy: DegeneracyPolicy,
) -> ModelResult<Regime> {
    let kd = params.decay_rate();
    let kr = params.reaeration_rate();
    match policy {
        DegeneracyPolicy::Reject if kr == kd => Err(ModelError::DegenerateParameter { kd, kr }),
        DegeneracyPolicy::Reject => Ok(Regime::General),
        DegeneracyPolicy::LimitingCase { tolerance } if (kr - kd).abs() <= tolerance => {
            Ok(Regime::Limiting)
        }
        DegeneracyPolicy::LimitingCase { .. } => Ok(Regime::General),
    }
}

#[inline]
pub(crate) fn do_in_regime(regime: Regime, x_km: Real, params: &ModelParameters) -> Real {
    let cs = params.saturation_do();
    let l0 = params.initial_bod();
    let kd = params.decay_rate();
    let kr = params.reaeration_rate();
    let d0 = params.initial_deficit();
    let t = params.travel_time_h(x_km);

    match regime {
        Regime::General => {
            let decay = (-kd * t).exp();
            let reaeration = (-kr * t).exp();
            cs - (kd * l0 / (kr - kd) * (decay - reaeration) + d0 * reaeration)
        }
        Regime::Limiting => {
            let decay = (-kd * t).exp();
            cs - (kd * l0 * t * decay + d0 * decay)
        }
    }
}

/// The model bound to one parameter set and degeneracy policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelEvaluator {
    params: ModelParameters,
    policy: DegeneracyPolicy,
}

impl ModelEvaluator {
    pub fn new(params: ModelParameters) -> Self {
        Self::with_policy(params, DegeneracyPolicy::Reject)
    }

    pub fn with_policy(params: ModelParameters, policy: DegeneracyPolicy) -> Self {
        Self { params, policy }
    }

    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    pub fn policy(&self) -> DegeneracyPolicy {
        self.policy
    }

    pub(crate) fn regime(&self) -> ModelResult<Regime> {
        resolve_regime(&self.params, self.policy)
    }

    /// True when DO is computed with the limiting-case formula.
    pub fn uses_limiting_case(&self) -> bool {
        matches!(self.regime(), Ok(Regime::Limiting))
    }

    pub fn bod(&self, x_km: Real) -> Real {
        bod(x_km, &self.params)
    }

    pub fn dissolved_oxygen(&self, x_km: Real) -> ModelResult<Real> {
        let regime = self.regime()?;
        Ok(do_in_regime(regime, x_km, &self.params))
    }

    pub fn deficit(&self, x_km: Real) -> ModelResult<Real> {
        Ok(self.params.saturation_do() - self.dissolved_oxygen(x_km)?)
    }

    pub fn bod_series(&self, distances_km: &[Real]) -> Vec<Real> {
        distances_km.iter().map(|&x| self.bod(x)).collect()
    }

    /// DO at every distance; the degeneracy check happens once, up front.
    pub fn do_series(&self, distances_km: &[Real]) -> ModelResult<Vec<Real>> {
        let regime = self.regime()?;
        Ok(distances_km
            .iter()
            .map(|&x| do_in_regime(regime, x, &self.params))
            .collect())
    }

    pub fn deficit_series(&self, distances_km: &[Real]) -> ModelResult<Vec<Real>> {
        let cs = self.params.saturation_do();
        Ok(self
            .do_series(distances_km)?
            .into_iter()
            .map(|c| cs - c)
            .collect())
    }
}
