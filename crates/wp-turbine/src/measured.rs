//! Table-driven power curve from measured data.

use crate::error::{TurbineError, TurbineResult};
use crate::specs::TurbineSpecs;
use crate::traits::PowerModel;
use wp_core::{interp, is_strictly_ascending};

/// Measured wind speed (m/s) → power (kW) samples.
///
/// Stored as two parallel columns. The table is never empty. Speeds are
/// expected to be strictly ascending but this is not enforced; use
/// [`PowerCurve::is_ascending`] to check.
#[derive(Clone, Debug, PartialEq)]
pub struct PowerCurve {
    speeds: Vec<f64>,
    powers: Vec<f64>,
}

impl PowerCurve {
    /// Build a curve from parallel speed and power columns.
    ///
    /// # Errors
    /// - `LengthMismatch` if the columns differ in length
    /// - `EmptyPowerCurve` if there are no samples
    pub fn new(speeds: Vec<f64>, powers: Vec<f64>) -> TurbineResult<Self> {
        if speeds.len() != powers.len() {
            return Err(TurbineError::LengthMismatch {
                speeds: speeds.len(),
                powers: powers.len(),
            });
        }
        if speeds.is_empty() {
            return Err(TurbineError::EmptyPowerCurve);
        }
        Ok(Self { speeds, powers })
    }

    /// Build a curve from `(speed, power)` pairs in table order.
    pub fn from_pairs<I>(pairs: I) -> TurbineResult<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (speeds, powers) = pairs.into_iter().unzip();
        Self::new(speeds, powers)
    }

    pub fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    pub fn powers(&self) -> &[f64] {
        &self.powers
    }

    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    /// Always false; kept alongside `len` for the usual collection API.
    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }

    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.speeds.iter().copied().zip(self.powers.iter().copied())
    }

    pub fn is_ascending(&self) -> bool {
        is_strictly_ascending(&self.speeds)
    }

    /// Interpolated power at `v`, clamped to the end samples.
    pub fn interpolate(&self, v: f64) -> f64 {
        interp(v, &self.speeds, &self.powers)
    }
}

/// Turbine modelled by a measured power curve.
///
/// ## Model
///
/// ```text
/// v < v_in or v > v_out : P = 0
/// otherwise             : P = interp(v, curve)
/// ```
///
/// `v_rated` is carried for reference only and may be zero.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredTurbine {
    specs: TurbineSpecs,
    curve: PowerCurve,
}

impl MeasuredTurbine {
    pub fn new(specs: TurbineSpecs, curve: PowerCurve) -> Self {
        tracing::trace!(
            name = ?specs.name,
            samples = curve.len(),
            "built measured turbine model"
        );
        Self { specs, curve }
    }

    pub fn curve(&self) -> &PowerCurve {
        &self.curve
    }
}

impl PowerModel for MeasuredTurbine {
    fn specs(&self) -> &TurbineSpecs {
        &self.specs
    }

    fn model_kind(&self) -> &'static str {
        "measured"
    }

    fn power_at(&self, v: f64) -> f64 {
        // NaN is outside the envelope but still goes to interp, which returns NaN
        if self.specs.in_envelope(v) || v.is_nan() {
            self.curve.interpolate(v)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve() -> PowerCurve {
        PowerCurve::from_pairs([(3.0, 0.0), (6.0, 300.0), (12.0, 2000.0), (25.0, 2000.0)]).unwrap()
    }

    fn turbine() -> MeasuredTurbine {
        MeasuredTurbine::new(TurbineSpecs::new(90.0, 80.0, 2000.0, 3.0, 12.0, 25.0), curve())
    }

    #[test]
    fn curve_rejects_empty() {
        assert_eq!(
            PowerCurve::new(vec![], vec![]).unwrap_err(),
            TurbineError::EmptyPowerCurve
        );
    }

    #[test]
    fn curve_rejects_ragged_columns() {
        let err = PowerCurve::new(vec![1.0, 2.0], vec![0.0]).unwrap_err();
        assert_eq!(
            err,
            TurbineError::LengthMismatch {
                speeds: 2,
                powers: 1
            }
        );
    }

    #[test]
    fn curve_accessors() {
        let c = curve();
        assert_eq!(c.len(), 4);
        assert!(!c.is_empty());
        assert!(c.is_ascending());
        assert_eq!(c.speeds(), &[3.0, 6.0, 12.0, 25.0]);
        assert_eq!(c.samples().nth(1), Some((6.0, 300.0)));
    }

    #[test]
    fn unsorted_curve_is_accepted() {
        let c = PowerCurve::from_pairs([(6.0, 300.0), (3.0, 0.0)]).unwrap();
        assert!(!c.is_ascending());
    }

    #[test]
    fn zero_outside_envelope() {
        let t = turbine();
        assert_eq!(t.power_at(2.9), 0.0);
        assert_eq!(t.power_at(25.1), 0.0);
        assert_eq!(t.power_at(-3.0), 0.0);
    }

    #[test]
    fn interpolates_inside_envelope() {
        let t = turbine();
        assert_relative_eq!(t.power_at(4.0), 100.0);
        assert_eq!(t.power_at(6.0), 300.0);
        assert_eq!(t.power_at(25.0), 2000.0);
    }

    #[test]
    fn envelope_wider_than_table_clamps() {
        let t = MeasuredTurbine::new(TurbineSpecs::new(90.0, 80.0, 2000.0, 1.0, 12.0, 30.0), curve());
        assert_eq!(t.power_at(1.5), 0.0);
        assert_eq!(t.power_at(28.0), 2000.0);
    }

    #[test]
    fn zero_rated_speed_is_fine_for_measured() {
        let t = MeasuredTurbine::new(TurbineSpecs::new(90.0, 80.0, 2000.0, 3.0, 0.0, 25.0), curve());
        assert_relative_eq!(t.power_at(9.0), 1150.0);
    }

    #[test]
    fn nan_speed_propagates() {
        assert!(turbine().power_at(f64::NAN).is_nan());
    }

    #[test]
    fn produces_exactly_inside_envelope() {
        let flat = PowerCurve::from_pairs([(0.0, 500.0), (40.0, 500.0)]).unwrap();
        let t = MeasuredTurbine::new(TurbineSpecs::new(90.0, 80.0, 500.0, 3.0, 12.0, 25.0), flat);
        for v in [-1.0, 2.999, 3.0, 12.0, 25.0, 25.001, 39.0] {
            assert_eq!(t.power_at(v) == 500.0, t.specs().in_envelope(v), "v = {v}");
        }
    }
}
