//! Midpoint rectangle rule.
//!
//! Partitions `[a, b]` into `n` equal sub-intervals and sums the function
//! value at each sub-interval midpoint, weighted by the sub-interval width.
//! Second-order accurate for smooth integrands.

use ndarray::Array1;

use crate::error::{QuadError, Result};
use crate::polynomial::CubicPolynomial;

/// Midpoint rule, one sub-interval at a time.
///
/// Computes `sum_{i=0}^{n-1} f(a + (i + 0.5) * h) * h` with `h = (b - a) / n`.
///
/// # Errors
///
/// Returns [`QuadError::InvalidSegmentCount`] if `n == 0`.
pub fn midpoint(p: &CubicPolynomial, a: f64, b: f64, n: usize) -> Result<f64> {
    if n == 0 {
        return Err(QuadError::InvalidSegmentCount { n });
    }

    let h = (b - a) / n as f64;
    let mut sum = 0.0;
    for i in 0..n {
        sum += p.eval(a + (i as f64 + 0.5) * h);
    }

    Ok(sum * h)
}

/// Midpoint rule over a batch-evaluated midpoint grid.
///
/// Numerically equivalent to [`midpoint`] up to summation order.
///
/// # Errors
///
/// Returns [`QuadError::InvalidSegmentCount`] if `n == 0`.
pub fn midpoint_vectorized(p: &CubicPolynomial, a: f64, b: f64, n: usize) -> Result<f64> {
    if n == 0 {
        return Err(QuadError::InvalidSegmentCount { n });
    }

    let h = (b - a) / n as f64;
    let mids = Array1::linspace(a + 0.5 * h, a + (n as f64 - 0.5) * h, n);

    Ok(p.eval_array(&mids).sum() * h)
}
