//! Quadrature rule comparison for cubic polynomials.
//!
//! This crate approximates the definite integral of a degree-3 polynomial
//! with classical quadrature rules and compares each rule's accuracy,
//! convergence behavior and execution cost against the closed-form result.
//!
//! # Features
//!
//! - Midpoint rectangle, trapezoid and Simpson rules, each as an iterative
//!   and an ndarray-vectorized variant with matching output
//! - A third, library-backed family (peroxide Newton–Cotes) as an
//!   independent correctness cross-check
//! - Closed-form analytical integration as the error baseline
//! - A method registry driving the comparison harness and the presentation
//!   binaries
//! - Error/timing measurement at a fixed segment count and sweeps across
//!   segment counts for convergence and performance analysis
//!
//! # Example
//!
//! ```rust
//! use math_quadrature::{compare_all, CubicPolynomial, MethodRegistry};
//!
//! let p = CubicPolynomial::new([1.0, 2.0, 3.0, 4.0]);
//! let registry = MethodRegistry::new();
//!
//! for (name, outcome) in compare_all(&registry, &p, 0.0, 10.0, 1000, 10) {
//!     let measurement = outcome.expect("valid arguments");
//!     println!("{}", measurement);
//!     assert!(measurement.absolute_error < 0.1, "{} diverged", name);
//! }
//! ```
#![warn(missing_docs)]

pub mod error;
pub use error::{QuadError, Result};

/// Cubic polynomial evaluation and closed-form integration.
pub mod polynomial;

/// Midpoint rectangle rule (iterative and vectorized).
pub mod midpoint;
/// Simpson's rule (iterative and vectorized).
pub mod simpson;
/// Trapezoid rule (iterative and vectorized).
pub mod trapezoid;

/// Library-backed cross-check variants of the trapezoid and Simpson rules.
pub mod reference;

/// Registry mapping method names to quadrature functions.
pub mod registry;

/// Error and timing measurement at a fixed segment count.
pub mod compare;
/// Convergence and performance sweeps across segment counts.
pub mod sweep;

pub use compare::{
    absolute_error, compare_all, error_for_method, measure_method, time_method, Measurement,
    DEFAULT_REPETITIONS,
};
pub use midpoint::{midpoint, midpoint_vectorized};
pub use polynomial::CubicPolynomial;
pub use reference::{simpson_reference, trapezoid_reference};
pub use registry::{MethodRegistry, QuadratureFn};
pub use simpson::{simpson, simpson_vectorized};
pub use sweep::{default_segment_counts, sweep, MethodSweep, SweepPoint};
pub use trapezoid::{trapezoid, trapezoid_vectorized};
