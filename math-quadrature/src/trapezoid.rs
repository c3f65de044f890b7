//! Trapezoid rule.
//!
//! Approximates each of `n` equal sub-intervals by the trapezoid through its
//! endpoints: `h * [(f(x0) + f(xn)) / 2 + sum_{i=1}^{n-1} f(xi)]` over the
//! `n + 1` nodes `xi = a + i * h`. Second-order accurate.

use ndarray::{s, Array1};

use crate::error::{QuadError, Result};
use crate::polynomial::CubicPolynomial;

/// Trapezoid rule, one node at a time.
///
/// # Errors
///
/// Returns [`QuadError::InvalidSegmentCount`] if `n == 0`.
pub fn trapezoid(p: &CubicPolynomial, a: f64, b: f64, n: usize) -> Result<f64> {
    if n == 0 {
        return Err(QuadError::InvalidSegmentCount { n });
    }

    let h = (b - a) / n as f64;
    let mut sum = 0.5 * (p.eval(a) + p.eval(b));
    for i in 1..n {
        sum += p.eval(a + i as f64 * h);
    }

    Ok(sum * h)
}

/// Trapezoid rule over a batch-evaluated node grid.
///
/// Samples `n + 1` equally spaced nodes in one shot and reduces, matching
/// [`trapezoid`] up to summation order.
///
/// # Errors
///
/// Returns [`QuadError::InvalidSegmentCount`] if `n == 0`.
pub fn trapezoid_vectorized(p: &CubicPolynomial, a: f64, b: f64, n: usize) -> Result<f64> {
    if n == 0 {
        return Err(QuadError::InvalidSegmentCount { n });
    }

    let h = (b - a) / n as f64;
    let xs = Array1::linspace(a, b, n + 1);
    let ys = p.eval_array(&xs);
    let interior = ys.slice(s![1..n]).sum();

    Ok(h * (0.5 * (ys[0] + ys[n]) + interior))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_segments() {
        let p = CubicPolynomial::new([1.0, 2.0, 3.0, 4.0]);
        assert!(trapezoid(&p, 0.0, 10.0, 0).is_err());
        assert!(trapezoid_vectorized(&p, 0.0, 10.0, 0).is_err());
    }

    #[test]
    fn test_single_segment_reference_value() {
        // (f(0) + f(10)) / 2 * 10 = (1 + 4321) / 2 * 10 = 21610
        let p = CubicPolynomial::new([1.0, 2.0, 3.0, 4.0]);
        assert!((trapezoid(&p, 0.0, 10.0, 1).unwrap() - 21610.0).abs() < 1e-9);
        assert!((trapezoid_vectorized(&p, 0.0, 10.0, 1).unwrap() - 21610.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_is_exact() {
        let p = CubicPolynomial::new([2.0, -3.0, 0.0, 0.0]);
        let exact = p.integral(-1.0, 4.0);
        assert!((trapezoid(&p, -1.0, 4.0, 1).unwrap() - exact).abs() < 1e-12);
        assert!((trapezoid(&p, -1.0, 4.0, 9).unwrap() - exact).abs() < 1e-12);
    }

    #[test]
    fn test_error_shrinks_with_n() {
        let p = CubicPolynomial::new([1.0, 2.0, 3.0, 4.0]);
        let exact = p.integral(0.0, 10.0);
        let e10 = (trapezoid(&p, 0.0, 10.0, 10).unwrap() - exact).abs();
        let e100 = (trapezoid(&p, 0.0, 10.0, 100).unwrap() - exact).abs();
        assert!(e10 > 0.0);
        assert!(e100 < e10);
    }

    #[test]
    fn test_variants_agree() {
        let p = CubicPolynomial::new([3.0, 0.0, -1.5, 2.25]);
        for n in [1, 2, 33, 1000] {
            let it = trapezoid(&p, -4.0, 4.0, n).unwrap();
            let vec = trapezoid_vectorized(&p, -4.0, 4.0, n).unwrap();
            assert!((it - vec).abs() <= 1e-9 * it.abs().max(1.0));
        }
    }
}
