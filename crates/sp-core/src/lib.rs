//! sp-core: numeric foundation for the oxygen-sag workspace.
//!
//! Contains:
//! - units (uom SI types + river-scale constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{SpError, SpResult};
pub use numeric::*;
pub use units::*;
