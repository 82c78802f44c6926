//! Validation of loaded specification and power curve files.

use crate::schema::{PowerCurveDef, SpecsDef};
use wp_core::ensure_finite;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Non-finite value for {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("Power curve has no rows")]
    EmptyPowerCurve,

    #[error("Non-finite {column} in power curve row {row}: {value}")]
    NonFiniteSample {
        row: usize,
        column: &'static str,
        value: f64,
    },
}

/// Every numeric field must be finite. Ordering of the speeds is left alone.
pub fn validate_specs(specs: &SpecsDef) -> Result<(), ValidationError> {
    let fields = [
        ("rotor_diameter", specs.rotor_diameter),
        ("hub_height", specs.hub_height),
        ("rated_power", specs.rated_power),
        ("cut_in_wind_speed", specs.cut_in_wind_speed),
        ("rated_wind_speed", specs.rated_wind_speed),
        ("cut_out_wind_speed", specs.cut_out_wind_speed),
    ];
    for (field, value) in fields {
        ensure_finite(value, field).map_err(|_| ValidationError::NonFinite { field, value })?;
    }
    Ok(())
}

/// The table must have rows and every sample must be finite. Sorting is not
/// checked here.
pub fn validate_power_curve(curve: &PowerCurveDef) -> Result<(), ValidationError> {
    if curve.rows.is_empty() {
        return Err(ValidationError::EmptyPowerCurve);
    }
    for (row, sample) in curve.rows.iter().enumerate() {
        if !sample.wind_speed.is_finite() {
            return Err(ValidationError::NonFiniteSample {
                row,
                column: crate::schema::SPEED_COLUMN,
                value: sample.wind_speed,
            });
        }
        if !sample.power.is_finite() {
            return Err(ValidationError::NonFiniteSample {
                row,
                column: crate::schema::POWER_COLUMN,
                value: sample.power,
            });
        }
    }
    Ok(())
}
