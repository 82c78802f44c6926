//! wp-turbine: wind turbine power models.
//!
//! Provides two ways of turning wind speed into electrical power:
//! - `GeneralTurbine`: analytical cubic ramp between cut-in and rated speed,
//!   flat at rated power up to cut-out
//! - `MeasuredTurbine`: piecewise-linear interpolation over a measured power curve
//!
//! Both share the same `TurbineSpecs` parameter set and implement the
//! `PowerModel` trait. `TurbineModel` wraps either one when the caller picks the
//! strategy at runtime.
//!
//! # Example
//!
//! ```
//! use wp_turbine::{GeneralTurbine, PowerModel, TurbineSpecs};
//!
//! let specs = TurbineSpecs::new(90.0, 80.0, 2000.0, 3.0, 12.0, 25.0);
//! let turbine = GeneralTurbine::new(specs).unwrap();
//!
//! let power = turbine.compute_power(&[2.0, 6.0, 12.0, 26.0]);
//! assert_eq!(power, vec![0.0, 250.0, 2000.0, 0.0]);
//! ```

pub mod error;
pub mod general;
pub mod measured;
pub mod model;
pub mod specs;
pub mod sweep;
pub mod traits;

// Re-exports
pub use error::{TurbineError, TurbineResult};
pub use general::GeneralTurbine;
pub use measured::{MeasuredTurbine, PowerCurve};
pub use model::TurbineModel;
pub use specs::TurbineSpecs;
pub use sweep::{PowerTable, speed_range};
pub use traits::PowerModel;
