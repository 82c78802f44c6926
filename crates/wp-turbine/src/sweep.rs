//! Speed sweeps and side-by-side evaluation of several models.

use crate::error::{TurbineError, TurbineResult};
use crate::traits::PowerModel;

/// Upper bound on the number of points `speed_range` will allocate.
pub const MAX_RANGE_POINTS: f64 = 1e9;

/// Half-open range `[start, stop)` with spacing `step`.
///
/// Values are computed as `start + i * step` so rounding does not accumulate.
/// An empty vector is returned when `stop <= start`. Ranges with more than
/// [`MAX_RANGE_POINTS`] points are rejected.
pub fn speed_range(start: f64, stop: f64, step: f64) -> TurbineResult<Vec<f64>> {
    if !start.is_finite() || !stop.is_finite() {
        return Err(TurbineError::InvalidArg {
            what: "speed range bounds must be finite",
        });
    }
    if !(step.is_finite() && step > 0.0) {
        return Err(TurbineError::InvalidArg {
            what: "speed range step must be positive",
        });
    }
    if stop <= start {
        return Ok(Vec::new());
    }

    let n = ((stop - start) / step).ceil();
    if !n.is_finite() || n > MAX_RANGE_POINTS {
        return Err(TurbineError::InvalidArg {
            what: "speed range has too many points",
        });
    }
    let n = n as usize;
    Ok((0..n).map(|i| start + i as f64 * step).collect())
}

/// Power output of several models over a shared set of speeds.
#[derive(Clone, Debug, PartialEq)]
pub struct PowerTable {
    speeds: Vec<f64>,
    columns: Vec<(String, Vec<f64>)>,
}

impl PowerTable {
    /// Evaluate each model at every speed. Columns keep the order of `models`
    /// and are labelled with [`PowerModel::label`].
    pub fn build(speeds: Vec<f64>, models: &[&dyn PowerModel]) -> Self {
        let columns = models
            .iter()
            .map(|m| (m.label().to_string(), m.compute_power(&speeds)))
            .collect();
        Self { speeds, columns }
    }

    pub fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|(label, _)| label.as_str())
    }

    pub fn column(&self, label: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, values)| values.as_slice())
    }

    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }

    /// One `(speed, powers)` entry per speed, powers in column order.
    pub fn rows(&self) -> impl Iterator<Item = (f64, Vec<f64>)> + '_ {
        self.speeds.iter().enumerate().map(|(i, &v)| {
            let powers = self.columns.iter().map(|(_, values)| values[i]).collect();
            (v, powers)
        })
    }
}
