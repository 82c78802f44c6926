//! Analytical power curve driven by nameplate ratings.

use crate::error::{TurbineError, TurbineResult};
use crate::specs::TurbineSpecs;
use crate::traits::PowerModel;

/// Turbine modelled by its rated parameters alone.
///
/// ## Model
///
/// ```text
/// v_in    <= v <  v_rated : P = P_rated * (v / v_rated)^3
/// v_rated <= v <= v_out   : P = P_rated
/// otherwise               : P = 0
/// ```
///
/// `v == v_in` is on the ramp, `v == v_rated` and `v == v_out` are flat.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneralTurbine {
    specs: TurbineSpecs,
}

impl GeneralTurbine {
    /// Create a new analytical turbine model.
    ///
    /// # Errors
    /// Returns `DegenerateRatedSpeed` if `v_rated` is zero or non-finite, since
    /// the ramp divides by it.
    pub fn new(specs: TurbineSpecs) -> TurbineResult<Self> {
        if specs.v_rated == 0.0 || !specs.v_rated.is_finite() {
            return Err(TurbineError::DegenerateRatedSpeed {
                value: specs.v_rated,
            });
        }

        tracing::trace!(name = ?specs.name, v_rated = specs.v_rated, "built general turbine model");
        Ok(Self { specs })
    }
}

impl PowerModel for GeneralTurbine {
    fn specs(&self) -> &TurbineSpecs {
        &self.specs
    }

    fn model_kind(&self) -> &'static str {
        "general"
    }

    fn power_at(&self, v: f64) -> f64 {
        let s = &self.specs;
        if s.v_in <= v && v < s.v_rated {
            s.rated_power * (v / s.v_rated).powi(3)
        } else if s.v_rated <= v && v <= s.v_out {
            s.rated_power
        } else {
            0.0
        }
    }
}
