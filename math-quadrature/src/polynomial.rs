//! Cubic polynomial evaluation and closed-form integration.
//!
//! [`CubicPolynomial`] is the integrand shared by every quadrature method
//! and the analytical baseline they are measured against. It is an immutable
//! value type: construct it once, evaluate it anywhere.

use ndarray::Array1;

use crate::error::{QuadError, Result};

/// A degree-3 polynomial `f(x) = c0 + c1*x + c2*x^2 + c3*x^3`.
///
/// Coefficients are stored constant-term first. Evaluation uses Horner's
/// scheme; non-finite inputs propagate per IEEE-754 instead of failing.
///
/// # Example
///
/// ```rust
/// use math_quadrature::CubicPolynomial;
///
/// let p = CubicPolynomial::new([1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(p.eval(0.0), 1.0);
/// assert_eq!(p.eval(10.0), 4321.0);
/// assert_eq!(p.integral(0.0, 10.0), 11110.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicPolynomial {
    coeffs: [f64; 4],
}

impl CubicPolynomial {
    /// Creates a polynomial from `[c0, c1, c2, c3]`, constant term first.
    pub fn new(coeffs: [f64; 4]) -> Self {
        Self { coeffs }
    }

    /// Creates a polynomial from a coefficient slice.
    ///
    /// # Errors
    ///
    /// Returns [`QuadError::InvalidCoefficientCount`] unless the slice has
    /// exactly 4 elements.
    pub fn from_slice(coeffs: &[f64]) -> Result<Self> {
        let coeffs: [f64; 4] = coeffs
            .try_into()
            .map_err(|_| QuadError::InvalidCoefficientCount { len: coeffs.len() })?;
        Ok(Self { coeffs })
    }

    /// Returns the coefficients `[c0, c1, c2, c3]`.
    pub fn coefficients(&self) -> [f64; 4] {
        self.coeffs
    }

    /// Evaluates the polynomial at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        let [c0, c1, c2, c3] = self.coeffs;
        c0 + x * (c1 + x * (c2 + x * c3))
    }

    /// Evaluates the polynomial element-wise over `xs`.
    pub fn eval_array(&self, xs: &Array1<f64>) -> Array1<f64> {
        xs.mapv(|x| self.eval(x))
    }

    /// Computes the exact definite integral over `[a, b]` from the
    /// antiderivative coefficients:
    ///
    /// `c0*(b-a) + c1*(b^2-a^2)/2 + c2*(b^3-a^3)/3 + c3*(b^4-a^4)/4`
    ///
    /// Valid for `a > b` as well, yielding the sign-flipped result.
    pub fn integral(&self, a: f64, b: f64) -> f64 {
        let [c0, c1, c2, c3] = self.coeffs;
        c0 * (b - a)
            + c1 * (b.powi(2) - a.powi(2)) / 2.0
            + c2 * (b.powi(3) - a.powi(3)) / 3.0
            + c3 * (b.powi(4) - a.powi(4)) / 4.0
    }
}

impl From<[f64; 4]> for CubicPolynomial {
    fn from(coeffs: [f64; 4]) -> Self {
        Self::new(coeffs)
    }
}
