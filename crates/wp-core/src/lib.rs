//! wp-core: shared foundation for windpower.
//!
//! Contains:
//! - units (uom SI types + constructors for speeds, power, lengths)
//! - numeric (Real + float helpers)
//! - interp (piecewise-linear table interpolation)
//! - error (shared error types)

pub mod error;
pub mod interp;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{WpError, WpResult};
pub use interp::interp;
pub use numeric::*;
pub use units::*;
