//! Piecewise-linear interpolation over tabulated samples.
//!
//! Semantics match the usual one-dimensional `interp` found in numeric
//! libraries:
//!
//! ```text
//! x <= xs[0]        -> ys[0]
//! x >= xs[n - 1]    -> ys[n - 1]
//! xs[i] <= x < xs[i+1] -> ys[i] + (x - xs[i]) / (xs[i+1] - xs[i]) * (ys[i+1] - ys[i])
//! ```
//!
//! `xs` is assumed to be ascending. Nothing here checks that; an unsorted table
//! gives an unspecified (but finite-indexed, non-panicking) result.

use crate::numeric::Real;

/// Interpolate `ys` at `x` given sample abscissae `xs`.
///
/// Only the first `min(xs.len(), ys.len())` samples are used. Returns NaN when
/// there are no samples or when `x` is NaN.
pub fn interp(x: Real, xs: &[Real], ys: &[Real]) -> Real {
    debug_assert_eq!(xs.len(), ys.len());

    let n = xs.len().min(ys.len());
    if n == 0 || x.is_nan() {
        return Real::NAN;
    }
    let (xs, ys) = (&xs[..n], &ys[..n]);

    if n == 1 || x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }

    // First sample strictly greater than x; clamped for unsorted tables.
    let hi = xs.partition_point(|&xi| xi <= x).clamp(1, n - 1);
    let lo = hi - 1;

    let (x0, x1) = (xs[lo], xs[hi]);
    let (y0, y1) = (ys[lo], ys[hi]);
    let dx = x1 - x0;
    if dx == 0.0 {
        return y1;
    }

    let t = (x - x0) / dx;
    y0 + t * (y1 - y0)
}
