//! Physical and chemical parameters of a river reach.

use crate::error::{ModelError, ModelResult};
use sp_core::units::{Concentration, Velocity, as_km_per_h, as_mg_per_l};
use sp_core::{Real, ensure_finite, ensure_nonzero};

/// Immutable parameter set for the Streeter–Phelps equations.
///
/// Concentrations are in mg/L, rates in 1/h and velocity in km/h, so that
/// `rate * distance / velocity` is dimensionless when distance is in km.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    saturation_do: Real,
    initial_do: Real,
    initial_bod: Real,
    decay_rate: Real,
    reaeration_rate: Real,
    velocity: Real,
}

impl ModelParameters {
    /// Build a parameter set.
    ///
    /// Arguments in order: saturation DO `cs`, initial DO `c0`, initial BOD
    /// `l0`, BOD decay rate `kd`, reaeration rate `kr`, stream velocity `u`.
    /// All values must be finite and `u` must be non-zero. Equal rates are
    /// accepted here and rejected when DO is evaluated.
    pub fn new(cs: Real, c0: Real, l0: Real, kd: Real, kr: Real, u: Real) -> ModelResult<Self> {
        Ok(Self {
            saturation_do: ensure_finite(cs, "saturation DO")?,
            initial_do: ensure_finite(c0, "initial DO")?,
            initial_bod: ensure_finite(l0, "initial BOD")?,
            decay_rate: ensure_finite(kd, "decay rate")?,
            reaeration_rate: ensure_finite(kr, "reaeration rate")?,
            velocity: ensure_nonzero(ensure_finite(u, "stream velocity")?, "stream velocity")
                .map_err(|_| ModelError::ZeroVelocity)?,
        })
    }

    /// Build from dimensioned concentrations and velocity.
    pub fn from_quantities(
        saturation_do: Concentration,
        initial_do: Concentration,
        initial_bod: Concentration,
        decay_rate_per_h: Real,
        reaeration_rate_per_h: Real,
        velocity: Velocity,
    ) -> ModelResult<Self> {
        Self::new(
            as_mg_per_l(saturation_do),
            as_mg_per_l(initial_do),
            as_mg_per_l(initial_bod),
            decay_rate_per_h,
            reaeration_rate_per_h,
            as_km_per_h(velocity),
        )
    }

    /// Reference reach: Cs=9, C0=7, L0=20 mg/L, kd=0.2/h, kr=0.3/h, U=2 km/h.
    pub fn reference() -> Self {
        Self {
            saturation_do: 9.0,
            initial_do: 7.0,
            initial_bod: 20.0,
            decay_rate: 0.2,
            reaeration_rate: 0.3,
            velocity: 2.0,
        }
    }

    pub fn saturation_do(&self) -> Real {
        self.saturation_do
    }

    pub fn initial_do(&self) -> Real {
        self.initial_do
    }

    pub fn initial_bod(&self) -> Real {
        self.initial_bod
    }

    pub fn decay_rate(&self) -> Real {
        self.decay_rate
    }

    pub fn reaeration_rate(&self) -> Real {
        self.reaeration_rate
    }

    pub fn velocity(&self) -> Real {
        self.velocity
    }

    /// Oxygen deficit at the outfall, `Cs - C0`.
    pub fn initial_deficit(&self) -> Real {
        self.saturation_do - self.initial_do
    }

    /// Travel time in hours to reach distance `x_km`.
    #[inline]
    pub fn travel_time_h(&self, x_km: Real) -> Real {
        x_km / self.velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_core::units::{km_per_h, mg_per_l};

    #[test]
    fn reference_matches_explicit_construction() {
        let explicit = ModelParameters::new(9.0, 7.0, 20.0, 0.2, 0.3, 2.0).unwrap();
        assert_eq!(explicit, ModelParameters::reference());
        assert_eq!(explicit.initial_deficit(), 2.0);
    }

    #[test]
    fn zero_velocity_rejected() {
        let err = ModelParameters::new(9.0, 7.0, 20.0, 0.2, 0.3, 0.0).unwrap_err();
        assert_eq!(err, ModelError::ZeroVelocity);
        let err = ModelParameters::new(9.0, 7.0, 20.0, 0.2, 0.3, -0.0).unwrap_err();
        assert_eq!(err, ModelError::ZeroVelocity);
    }

    #[test]
    fn non_finite_rejected() {
        let err = ModelParameters::new(9.0, f64::NAN, 20.0, 0.2, 0.3, 2.0).unwrap_err();
        assert!(err.to_string().contains("initial DO"));
    }

    #[test]
    fn equal_rates_accepted_at_construction() {
        assert!(ModelParameters::new(9.0, 7.0, 20.0, 0.25, 0.25, 2.0).is_ok());
    }

    #[test]
    fn negative_values_are_not_policed() {
        let p = ModelParameters::new(-1.0, -2.0, -3.0, -0.1, -0.2, -2.0).unwrap();
        assert_eq!(p.velocity(), -2.0);
    }

    #[test]
    fn from_quantities_converts_units() {
        let p = ModelParameters::from_quantities(
            mg_per_l(9.0),
            mg_per_l(7.0),
            mg_per_l(20.0),
            0.2,
            0.3,
            km_per_h(2.0),
        )
        .unwrap();
        assert!((p.saturation_do() - 9.0).abs() < 1e-12);
        assert!((p.initial_bod() - 20.0).abs() < 1e-12);
        assert!((p.velocity() - 2.0).abs() < 1e-12);
    }
}
