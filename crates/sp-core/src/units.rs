// sp-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, MassDensity as UomMassDensity, Time as UomTime,
    Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Velocity = UomVelocity;
pub type Time = UomTime;
/// Mass concentration of a dissolved species (mass per volume).
pub type Concentration = UomMassDensity;

/// 1 mg/L expressed in kg/m^3.
const MG_PER_L_IN_KG_PER_M3: f64 = 1.0e-3;

#[inline]
pub fn km(v: f64) -> Length {
    use uom::si::length::kilometer;
    Length::new::<kilometer>(v)
}

#[inline]
pub fn km_per_h(v: f64) -> Velocity {
    use uom::si::velocity::kilometer_per_hour;
    Velocity::new::<kilometer_per_hour>(v)
}

#[inline]
pub fn hours(v: f64) -> Time {
    use uom::si::time::hour;
    Time::new::<hour>(v)
}

#[inline]
pub fn mg_per_l(v: f64) -> Concentration {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Concentration::new::<kilogram_per_cubic_meter>(v * MG_PER_L_IN_KG_PER_M3)
}

#[inline]
pub fn as_km(l: Length) -> f64 {
    use uom::si::length::kilometer;
    l.get::<kilometer>()
}

#[inline]
pub fn as_hours(t: Time) -> f64 {
    use uom::si::time::hour;
    t.get::<hour>()
}

#[inline]
pub fn as_km_per_h(v: Velocity) -> f64 {
    use uom::si::velocity::kilometer_per_hour;
    v.get::<kilometer_per_hour>()
}

#[inline]
pub fn as_mg_per_l(c: Concentration) -> f64 {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    c.get::<kilogram_per_cubic_meter>() / MG_PER_L_IN_KG_PER_M3
}

/// Time for a parcel of water to travel `distance` at `velocity`.
#[inline]
pub fn travel_time(distance: Length, velocity: Velocity) -> Time {
    distance / velocity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _l = km(50.0);
        let _u = km_per_h(2.0);
        let _t = hours(1.5);
        let _c = mg_per_l(9.0);
    }

    #[test]
    fn river_units_round_trip() {
        assert!((as_km(km(12.5)) - 12.5).abs() < 1e-12);
        assert!((as_hours(hours(3.25)) - 3.25).abs() < 1e-12);
        assert!((as_km_per_h(km_per_h(2.0)) - 2.0).abs() < 1e-12);
        assert!((as_mg_per_l(mg_per_l(7.0)) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn travel_time_is_distance_over_velocity() {
        let t = travel_time(km(10.0), km_per_h(2.0));
        assert!((as_hours(t) - 5.0).abs() < 1e-12);
    }
}
