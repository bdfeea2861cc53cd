//! Scenario validation logic.

use crate::schema::{DegeneracyDef, GridDef, ParametersDef, Scenario};
use sp_core::MAX_SAMPLES;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported feature: {feature} - {reason}")]
    Unsupported { feature: String, reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    if scenario.name.trim().is_empty() {
        return Err(invalid("name", &scenario.name, "must not be empty"));
    }

    validate_parameters(&scenario.parameters)?;
    validate_grid(&scenario.grid)?;
    finite("critical_do_mg_l", scenario.critical_do_mg_l)?;
    validate_degeneracy(&scenario.parameters, scenario.degenerate_rates)?;

    Ok(())
}

fn validate_parameters(p: &ParametersDef) -> Result<(), ValidationError> {
    finite("parameters.saturation_do_mg_l", p.saturation_do_mg_l)?;
    finite("parameters.initial_do_mg_l", p.initial_do_mg_l)?;
    finite("parameters.initial_bod_mg_l", p.initial_bod_mg_l)?;
    finite("parameters.decay_rate_per_h", p.decay_rate_per_h)?;
    finite("parameters.reaeration_rate_per_h", p.reaeration_rate_per_h)?;
    finite("parameters.velocity_km_h", p.velocity_km_h)?;

    if p.velocity_km_h == 0.0 {
        return Err(invalid(
            "parameters.velocity_km_h",
            p.velocity_km_h,
            "velocity divides distance and must be non-zero",
        ));
    }
    Ok(())
}

fn validate_grid(grid: &GridDef) -> Result<(), ValidationError> {
    finite("grid.start_km", grid.start_km)?;
    finite("grid.stop_km", grid.stop_km)?;
    finite("grid.step_km", grid.step_km)?;

    if grid.start_km < 0.0 {
        return Err(invalid("grid.start_km", grid.start_km, "must be non-negative"));
    }
    if grid.step_km <= 0.0 {
        return Err(invalid("grid.step_km", grid.step_km, "must be positive"));
    }
    if grid.stop_km < grid.start_km {
        return Err(invalid(
            "grid.stop_km",
            grid.stop_km,
            "must not be before grid.start_km",
        ));
    }
    if (grid.stop_km - grid.start_km) / grid.step_km >= MAX_SAMPLES as f64 {
        return Err(invalid(
            "grid.step_km",
            grid.step_km,
            &format!("grid would exceed {MAX_SAMPLES} points"),
        ));
    }
    Ok(())
}

fn validate_degeneracy(p: &ParametersDef, policy: DegeneracyDef) -> Result<(), ValidationError> {
    match policy {
        DegeneracyDef::Reject if p.decay_rate_per_h == p.reaeration_rate_per_h => {
            Err(ValidationError::Unsupported {
                feature: format!(
                    "Equal decay and reaeration rates ({} per hour)",
                    p.decay_rate_per_h
                ),
                reason: "The closed-form DO profile divides by kr - kd. \
                         Set degenerate_rates.policy to limiting_case to use the limit formula."
                    .to_string(),
            })
        }
        DegeneracyDef::Reject => Ok(()),
        DegeneracyDef::LimitingCase { tolerance } => {
            finite("degenerate_rates.tolerance", tolerance)?;
            if tolerance < 0.0 {
                return Err(invalid(
                    "degenerate_rates.tolerance",
                    tolerance,
                    "must be non-negative",
                ));
            }
            Ok(())
        }
    }
}

fn finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite"))
    }
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
