//! Registry of quadrature method variants.
//!
//! Maps display names to method function pointers, the mapping consumed by
//! the comparison harness and the presentation binaries. Presentation
//! metadata (line styles, colors) deliberately lives with the consumers, not
//! here.

use std::collections::HashMap;

use crate::error::{QuadError, Result};
use crate::midpoint::{midpoint, midpoint_vectorized};
use crate::polynomial::CubicPolynomial;
use crate::reference::{simpson_reference, trapezoid_reference};
use crate::simpson::{simpson, simpson_vectorized};
use crate::trapezoid::{trapezoid, trapezoid_vectorized};

/// Quadrature method type: `(polynomial, a, b, segments) -> estimate`.
pub type QuadratureFn = fn(&CubicPolynomial, f64, f64, usize) -> Result<f64>;

/// Registry mapping method names to function pointers.
pub struct MethodRegistry {
    methods: HashMap<String, QuadratureFn>,
}

impl MethodRegistry {
    /// Creates a registry holding every method variant of the crate: the
    /// iterative, vectorized and library-backed families of the midpoint,
    /// trapezoid and Simpson rules.
    pub fn new() -> Self {
        let mut methods: HashMap<String, QuadratureFn> = HashMap::new();

        methods.insert("midpoint".to_string(), midpoint as QuadratureFn);
        methods.insert(
            "midpoint_vectorized".to_string(),
            midpoint_vectorized as QuadratureFn,
        );

        methods.insert("trapezoid".to_string(), trapezoid as QuadratureFn);
        methods.insert(
            "trapezoid_vectorized".to_string(),
            trapezoid_vectorized as QuadratureFn,
        );
        methods.insert(
            "trapezoid_reference".to_string(),
            trapezoid_reference as QuadratureFn,
        );

        methods.insert("simpson".to_string(), simpson as QuadratureFn);
        methods.insert(
            "simpson_vectorized".to_string(),
            simpson_vectorized as QuadratureFn,
        );
        methods.insert(
            "simpson_reference".to_string(),
            simpson_reference as QuadratureFn,
        );

        Self { methods }
    }

    /// Gets a method by name.
    pub fn get(&self, name: &str) -> Option<QuadratureFn> {
        self.methods.get(name).copied()
    }

    /// Gets a method by name, reporting an [`QuadError::UnknownMethod`]
    /// error on a miss.
    pub fn lookup(&self, name: &str) -> Result<QuadratureFn> {
        self.get(name).ok_or_else(|| QuadError::UnknownMethod {
            name: name.to_string(),
        })
    }

    /// Lists all registered method names, sorted alphabetically.
    pub fn list_methods(&self) -> Vec<String> {
        let mut names: Vec<_> = self.methods.keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns an iterator over all (name, method) pairs, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &QuadratureFn)> {
        self.methods.iter()
    }

    /// Keeps only the methods whose name satisfies `predicate`.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.methods.retain(|name, _| predicate(name));
    }

    /// Number of registered methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Returns `true` if the registry holds no methods.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::new()
    }
}
