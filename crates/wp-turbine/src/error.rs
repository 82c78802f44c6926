//! Error types for turbine model construction.

use thiserror::Error;

/// Errors that can occur while building a turbine model.
///
/// Power evaluation itself never fails; everything is checked up front.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TurbineError {
    #[error("Rated wind speed must be finite and non-zero (got {value})")]
    DegenerateRatedSpeed { value: f64 },

    #[error("Power curve must contain at least one sample")]
    EmptyPowerCurve,

    #[error("Power curve columns differ in length (speeds={speeds}, powers={powers})")]
    LengthMismatch { speeds: usize, powers: usize },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type TurbineResult<T> = Result<T, TurbineError>;
