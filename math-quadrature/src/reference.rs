//! Cross-check variants backed by peroxide's Newton–Cotes rules.
//!
//! Applying the library's closed Newton–Cotes formula of order 1 (trapezoid)
//! or order 2 (Simpson) on each sub-interval and summing reproduces the
//! composite rules of [`crate::trapezoid`] and [`crate::simpson`], giving an
//! independent implementation to validate the custom ones against.

use peroxide::numerical::integral::newton_cotes_quadrature;

use crate::error::{QuadError, Result};
use crate::polynomial::CubicPolynomial;

/// Composite trapezoid rule built on the external library's order-1 rule.
///
/// Agrees with [`crate::trapezoid`] within 1e-9 relative tolerance.
///
/// # Errors
///
/// Returns [`QuadError::InvalidSegmentCount`] if `n == 0`.
pub fn trapezoid_reference(p: &CubicPolynomial, a: f64, b: f64, n: usize) -> Result<f64> {
    composite_newton_cotes(p, a, b, n, 1)
}

/// Composite Simpson rule built on the external library's order-2 rule.
///
/// Agrees with [`crate::simpson`] within 1e-9 relative tolerance.
///
/// # Errors
///
/// Returns [`QuadError::InvalidSegmentCount`] if `n == 0`.
pub fn simpson_reference(p: &CubicPolynomial, a: f64, b: f64, n: usize) -> Result<f64> {
    composite_newton_cotes(p, a, b, n, 2)
}

fn composite_newton_cotes(
    p: &CubicPolynomial,
    a: f64,
    b: f64,
    n: usize,
    order: usize,
) -> Result<f64> {
    if n == 0 {
        return Err(QuadError::InvalidSegmentCount { n });
    }
    if a == b {
        return Ok(0.0);
    }
    // The library rule expects an ascending cell; integrate reversed bounds
    // the other way round and flip the sign.
    if a > b {
        return composite_newton_cotes(p, b, a, n, order).map(|v| -v);
    }

    let h = (b - a) / n as f64;
    let mut sum = 0.0;
    for i in 0..n {
        let left = a + i as f64 * h;
        sum += newton_cotes_quadrature(|x| p.eval(x), order, (left, left + h));
    }

    Ok(sum)
}
