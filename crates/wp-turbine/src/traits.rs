//! Core trait for turbine power models.

use crate::specs::TurbineSpecs;

/// A strategy for turning wind speed into power output.
///
/// Models are immutable after construction and evaluation is a pure function
/// of the stored parameters, so they can be shared across threads freely.
pub trait PowerModel: Send + Sync {
    /// Parameter set the model was built from.
    fn specs(&self) -> &TurbineSpecs;

    /// Short label identifying the strategy ("general", "measured").
    fn model_kind(&self) -> &'static str;

    /// Power output (kW) at a single wind speed (m/s).
    ///
    /// Speeds are not validated: negative, huge and NaN inputs are evaluated
    /// with the same rules as any other value.
    fn power_at(&self, v: f64) -> f64;

    /// Turbine name, if one was given.
    fn name(&self) -> Option<&str> {
        self.specs().name.as_deref()
    }

    /// Name if present, otherwise the model kind. Used for column headers.
    fn label(&self) -> &str {
        self.name().unwrap_or(self.model_kind())
    }

    /// Power output for every speed in `speeds`.
    ///
    /// The result always has the same length as the input.
    fn compute_power(&self, speeds: &[f64]) -> Vec<f64> {
        speeds.iter().map(|&v| self.power_at(v)).collect()
    }
}
