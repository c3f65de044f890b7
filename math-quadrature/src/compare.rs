//! Error and timing measurement for a single segment count.
//!
//! Every quadrature estimate is compared against the closed-form integral,
//! and execution cost is measured as the arithmetic mean of repeated
//! invocations on a monotonic clock. Arguments are bound once, outside the
//! timed loop, so measurements exclude setup cost.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::error::{QuadError, Result};
use crate::polynomial::CubicPolynomial;
use crate::registry::{MethodRegistry, QuadratureFn};

/// Default number of timed repetitions per measurement.
pub const DEFAULT_REPETITIONS: usize = 10;

/// Measurement of one method at one segment count.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Registered method name
    pub method: String,
    /// Quadrature estimate of the integral
    pub estimate: f64,
    /// `|exact - estimate|`
    pub absolute_error: f64,
    /// Arithmetic mean wall-clock time per invocation
    pub mean_time: Duration,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<22} estimate: {:>14.3}  error: {:.2e}  time: {:.2e} s",
            self.method,
            self.estimate,
            self.absolute_error,
            self.mean_time.as_secs_f64()
        )
    }
}

/// Absolute difference between the exact and approximate values.
///
/// Total for finite inputs; NaN propagates.
pub fn absolute_error(exact: f64, approx: f64) -> f64 {
    (exact - approx).abs()
}

/// Absolute error of `method` at segment count `n`, measured against the
/// analytical integral.
///
/// # Errors
///
/// Propagates the method's argument errors.
pub fn error_for_method(
    p: &CubicPolynomial,
    a: f64,
    b: f64,
    method: QuadratureFn,
    n: usize,
) -> Result<f64> {
    Ok(absolute_error(p.integral(a, b), method(p, a, b, n)?))
}

/// Mean wall-clock time of `repetitions` invocations of `method` with the
/// given arguments.
///
/// One untimed call runs first, so argument errors surface before the timed
/// loop starts and the measured runs hit warm code.
///
/// # Errors
///
/// Returns [`QuadError::InvalidRepetitions`] if `repetitions == 0`, and
/// propagates the method's own errors.
pub fn time_method(
    method: QuadratureFn,
    p: &CubicPolynomial,
    a: f64,
    b: f64,
    n: usize,
    repetitions: usize,
) -> Result<Duration> {
    if repetitions == 0 {
        return Err(QuadError::InvalidRepetitions);
    }
    method(p, a, b, n)?;

    let start = Instant::now();
    for _ in 0..repetitions {
        black_box(method(black_box(p), black_box(a), black_box(b), black_box(n)))?;
    }
    let elapsed = start.elapsed();

    Ok(elapsed / repetitions as u32)
}

/// Measures estimate, absolute error and mean execution time of one method
/// at one segment count.
///
/// # Errors
///
/// Propagates argument errors from the method or the timing loop.
pub fn measure_method(
    name: &str,
    method: QuadratureFn,
    p: &CubicPolynomial,
    a: f64,
    b: f64,
    n: usize,
    repetitions: usize,
) -> Result<Measurement> {
    let estimate = method(p, a, b, n)?;
    let mean_time = time_method(method, p, a, b, n, repetitions)?;

    Ok(Measurement {
        method: name.to_string(),
        estimate,
        absolute_error: absolute_error(p.integral(a, b), estimate),
        mean_time,
    })
}

/// Measures every registered method at segment count `n`.
///
/// Returns one `(name, outcome)` entry per method in sorted-name order. A
/// failing method is surfaced in its slot instead of aborting the batch;
/// the caller decides whether to skip it or halt.
pub fn compare_all(
    registry: &MethodRegistry,
    p: &CubicPolynomial,
    a: f64,
    b: f64,
    n: usize,
    repetitions: usize,
) -> Vec<(String, Result<Measurement>)> {
    registry
        .list_methods()
        .into_iter()
        .map(|name| {
            let method = registry
                .get(&name)
                .expect("listed methods are always registered");
            let outcome = measure_method(&name, method, p, a, b, n, repetitions);
            (name, outcome)
        })
        .collect()
}
