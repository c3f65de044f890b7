//! Convergence and performance sweeps across segment counts.
//!
//! A sweep runs every registered method over a range of segment counts and
//! records, per (method, n) pair, the estimate, the absolute error against
//! the analytical integral, and the mean execution time. Failing pairs stay
//! in the output as errors; one bad data point never aborts the sweep.

use std::time::Duration;

use crate::compare::measure_method;
use crate::error::{QuadError, Result};
use crate::polynomial::CubicPolynomial;
use crate::registry::MethodRegistry;

/// One successful sweep data point.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    /// Quadrature estimate of the integral
    pub estimate: f64,
    /// `|exact - estimate|`
    pub absolute_error: f64,
    /// Arithmetic mean wall-clock time per invocation
    pub mean_time: Duration,
}

/// Sweep results of a single method: one outcome per requested segment
/// count, in request order.
#[derive(Debug, Clone)]
pub struct MethodSweep {
    /// Registered method name
    pub method: String,
    /// `(segment count, outcome)` pairs
    pub points: Vec<(usize, Result<SweepPoint>)>,
}

impl MethodSweep {
    /// `(n, absolute_error)` pairs of the successful points.
    pub fn errors(&self) -> Vec<(usize, f64)> {
        self.points
            .iter()
            .filter_map(|(n, outcome)| {
                outcome.as_ref().ok().map(|pt| (*n, pt.absolute_error))
            })
            .collect()
    }

    /// `(n, mean seconds)` pairs of the successful points.
    pub fn timings(&self) -> Vec<(usize, f64)> {
        self.points
            .iter()
            .filter_map(|(n, outcome)| {
                outcome.as_ref().ok().map(|pt| (*n, pt.mean_time.as_secs_f64()))
            })
            .collect()
    }

    /// First failing point, if any.
    pub fn first_error(&self) -> Option<(usize, &QuadError)> {
        self.points
            .iter()
            .find_map(|(n, outcome)| outcome.as_ref().err().map(|e| (*n, e)))
    }
}

/// The reference sweep range: 10 to 100 000 segments with per-decade
/// spacing, finer at small counts and coarser at large ones.
///
/// Produces `10, 20, .., 90, 100, 200, .., 90_000, 100_000` (37 counts over
/// four orders of magnitude).
pub fn default_segment_counts() -> Vec<usize> {
    let mut counts = Vec::new();
    let mut step = 10;
    while step <= 10_000 {
        let mut n = step;
        while n < step * 10 {
            counts.push(n);
            n += step;
        }
        step *= 10;
    }
    counts.push(100_000);
    counts
}

/// Runs every registered method over `segment_counts`, measuring error and
/// mean execution time at each count.
///
/// Methods are swept in sorted-name order; within a method, points keep the
/// order of `segment_counts`. Per-point failures are recorded in place;
/// callers choose between skipping them ([`MethodSweep::errors`] and
/// [`MethodSweep::timings`] already do) and halting
/// ([`MethodSweep::first_error`]).
pub fn sweep(
    registry: &MethodRegistry,
    p: &CubicPolynomial,
    a: f64,
    b: f64,
    segment_counts: &[usize],
    repetitions: usize,
) -> Vec<MethodSweep> {
    registry
        .list_methods()
        .into_iter()
        .map(|name| {
            let method = registry
                .get(&name)
                .expect("listed methods are always registered");
            let points = segment_counts
                .iter()
                .map(|&n| {
                    let outcome =
                        measure_method(&name, method, p, a, b, n, repetitions).map(|m| SweepPoint {
                            estimate: m.estimate,
                            absolute_error: m.absolute_error,
                            mean_time: m.mean_time,
                        });
                    (n, outcome)
                })
                .collect();
            MethodSweep {
                method: name,
                points,
            }
        })
        .collect()
}
