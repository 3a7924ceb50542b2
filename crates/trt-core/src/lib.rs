//! trt-core: stable foundation for thermal response test analysis.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real, Euler-Mascheroni constant, float helpers)
//! - regression (ordinary least-squares line fit)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod regression;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TrtError, TrtResult};
pub use numeric::*;
pub use regression::{LinearFit, linear_fit};
pub use units::*;
