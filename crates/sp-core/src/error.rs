use thiserror::Error;

pub type SpResult<T> = Result<T, SpError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
