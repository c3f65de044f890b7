//! Error types for quadrature operations.
//!
//! Argument problems are detected eagerly, before any arithmetic, and
//! reported through [`QuadError`]. Non-finite floating-point values are not
//! errors: they propagate through the computations as ordinary `f64`
//! NaN/infinity results.

use thiserror::Error;

/// Errors that can occur when evaluating a quadrature method or running the
/// comparison harness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadError {
    /// Segment count is zero (every rule divides the interval by `n`).
    #[error("invalid segment count: {n} (must be >= 1)")]
    InvalidSegmentCount {
        /// The rejected segment count
        n: usize,
    },

    /// Coefficient slice does not describe a cubic polynomial.
    #[error("invalid coefficient count: {len} (a cubic polynomial has exactly 4)")]
    InvalidCoefficientCount {
        /// Number of coefficients provided
        len: usize,
    },

    /// Timing was requested with zero repetitions.
    #[error("invalid repetition count: 0 (mean execution time needs at least 1 run)")]
    InvalidRepetitions,

    /// A method name was not found in the registry.
    #[error("unknown method: '{name}'")]
    UnknownMethod {
        /// The name that failed to resolve
        name: String,
    },
}

/// A specialized `Result` type for quadrature operations.
pub type Result<T> = std::result::Result<T, QuadError>;

impl QuadError {
    /// Returns `true` if this error was caused by an invalid argument
    /// (segment count, coefficient slice, or repetition count).
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            QuadError::InvalidSegmentCount { .. }
                | QuadError::InvalidCoefficientCount { .. }
                | QuadError::InvalidRepetitions
        )
    }

    /// Returns `true` if this is a registry lookup failure.
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, QuadError::UnknownMethod { .. })
    }
}
