use crate::WpError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, WpError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(WpError::NonFinite { what, value: v })
    }
}

/// True if every consecutive pair in `xs` is strictly increasing.
///
/// Empty and single-element slices count as ascending.
pub fn is_strictly_ascending(xs: &[Real]) -> bool {
    xs.windows(2).all(|w| w[0] < w[1])
}
