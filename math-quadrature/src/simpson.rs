//! Simpson's rule.
//!
//! Fits a parabola over each pair of half-steps: with `h = (b - a) / n` the
//! rule samples `2n + 1` nodes at step `h / 2` and computes
//! `(h / 6) * [f(x0) + f(x_2n) + 4 * sum_odd + 2 * sum_even_interior]`.
//! Exact for polynomials up to degree 3, so on a cubic integrand the result
//! matches the analytical integral at any segment count.

use ndarray::{s, Array1};

use crate::error::{QuadError, Result};
use crate::polynomial::CubicPolynomial;

/// Simpson's rule, one node at a time.
///
/// # Errors
///
/// Returns [`QuadError::InvalidSegmentCount`] if `n == 0`.
pub fn simpson(p: &CubicPolynomial, a: f64, b: f64, n: usize) -> Result<f64> {
    if n == 0 {
        return Err(QuadError::InvalidSegmentCount { n });
    }

    let h = (b - a) / n as f64;
    let half = 0.5 * h;

    let mut odd = 0.0;
    let mut even = 0.0;
    for i in 1..2 * n {
        let y = p.eval(a + i as f64 * half);
        if i % 2 == 1 {
            odd += y;
        } else {
            even += y;
        }
    }

    Ok(h / 6.0 * (p.eval(a) + p.eval(b) + 4.0 * odd + 2.0 * even))
}

/// Simpson's rule over a batch-evaluated node grid.
///
/// Samples all `2n + 1` nodes in one shot, then reduces the odd and even
/// interior strides separately. Matches [`simpson`] up to summation order.
///
/// # Errors
///
/// Returns [`QuadError::InvalidSegmentCount`] if `n == 0`.
pub fn simpson_vectorized(p: &CubicPolynomial, a: f64, b: f64, n: usize) -> Result<f64> {
    if n == 0 {
        return Err(QuadError::InvalidSegmentCount { n });
    }

    let h = (b - a) / n as f64;
    let xs = Array1::linspace(a, b, 2 * n + 1);
    let ys = p.eval_array(&xs);
    let odd = ys.slice(s![1..2 * n; 2]).sum();
    let even = ys.slice(s![2..2 * n; 2]).sum();

    Ok(h / 6.0 * (ys[0] + ys[2 * n] + 4.0 * odd + 2.0 * even))
}
