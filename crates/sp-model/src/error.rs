//! Error types for model evaluation.

use sp_core::SpError;
use thiserror::Error;

/// Errors raised while building or evaluating the oxygen-sag model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Degenerate parameters: kr={kr} equals kd={kd}, closed-form DO is undefined")]
    DegenerateParameter { kd: f64, kr: f64 },

    #[error("Stream velocity must be non-zero")]
    ZeroVelocity,

    #[error("Invalid distance grid: {what}")]
    InvalidGrid { what: String },

    #[error("Series length mismatch: {what} (expected {expected}, got {actual})")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Core(#[from] SpError),
}

pub type ModelResult<T> = Result<T, ModelError>;

impl From<ModelError> for SpError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::DegenerateParameter { .. } => SpError::InvalidArg {
                what: "reaeration rate equals decay rate",
            },
            ModelError::ZeroVelocity => SpError::InvalidArg {
                what: "zero stream velocity",
            },
            ModelError::InvalidGrid { .. } => SpError::InvalidArg {
                what: "distance grid",
            },
            ModelError::LengthMismatch { what, .. } => SpError::Invariant { what },
            ModelError::Core(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ModelError::DegenerateParameter { kd: 0.2, kr: 0.2 };
        let msg = err.to_string();
        assert!(msg.contains("kr=0.2"));
        assert!(msg.contains("kd=0.2"));
    }

    #[test]
    fn error_conversion() {
        let err = ModelError::ZeroVelocity;
        let core: SpError = err.into();
        assert!(matches!(core, SpError::InvalidArg { .. }));

        let wrapped = ModelError::from(SpError::NonFinite {
            what: "x",
            value: f64::NAN,
        });
        assert!(matches!(
            SpError::from(wrapped),
            SpError::NonFinite { what: "x", .. }
        ));
    }
}
