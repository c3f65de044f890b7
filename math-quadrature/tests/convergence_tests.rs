//! End-to-end properties of the quadrature rules and the comparison
//! harness, exercised through the public API.

use approx::assert_relative_eq;
use std::time::Duration;

use math_quadrature::{
    compare_all, default_segment_counts, sweep, time_method, CubicPolynomial, MethodRegistry,
    QuadError,
};

fn reference_polynomial() -> CubicPolynomial {
    CubicPolynomial::new([1.0, 2.0, 3.0, 4.0])
}

#[test]
fn analytical_integral_matches_hand_computation() {
    // 1*10 + 2*50 + 3*(1000/3) + 4*(10000/4) = 11110
    let p = reference_polynomial();
    assert_relative_eq!(p.integral(0.0, 10.0), 11110.0);
}

#[test]
fn simpson_family_is_exact_on_cubics() {
    let registry = MethodRegistry::new();
    let p = reference_polynomial();
    for name in ["simpson", "simpson_vectorized", "simpson_reference"] {
        let method = registry.lookup(name).unwrap();
        for n in [1, 2, 10, 999] {
            let estimate = method(&p, 0.0, 10.0, n).unwrap();
            assert_relative_eq!(estimate, 11110.0, max_relative = 1e-9);
        }
    }
}

#[test]
fn trapezoid_single_segment_reference_value() {
    // (f(0) + f(10)) / 2 * 10 = (1 + 4321) / 2 * 10 = 21610
    let registry = MethodRegistry::new();
    let p = reference_polynomial();
    for name in ["trapezoid", "trapezoid_vectorized", "trapezoid_reference"] {
        let method = registry.lookup(name).unwrap();
        assert_relative_eq!(
            method(&p, 0.0, 10.0, 1).unwrap(),
            21610.0,
            max_relative = 1e-9
        );
    }
}

#[test]
fn midpoint_error_positive_and_shrinking() {
    let registry = MethodRegistry::new();
    let p = reference_polynomial();
    let exact = p.integral(0.0, 10.0);

    let method = registry.lookup("midpoint").unwrap();
    let e10 = (method(&p, 0.0, 10.0, 10).unwrap() - exact).abs();
    let e100 = (method(&p, 0.0, 10.0, 100).unwrap() - exact).abs();
    assert!(e10 > 0.0);
    assert!(e100 < e10);
}

#[test]
fn variant_families_agree_within_tolerance() {
    let registry = MethodRegistry::new();
    let p = CubicPolynomial::new([-2.5, 0.75, 1.0, -3.0]);
    let families = [
        ["midpoint", "midpoint_vectorized", "midpoint"],
        ["trapezoid", "trapezoid_vectorized", "trapezoid_reference"],
        ["simpson", "simpson_vectorized", "simpson_reference"],
    ];

    for family in families {
        for n in [1, 7, 100] {
            let base = registry.lookup(family[0]).unwrap()(&p, -3.0, 4.0, n).unwrap();
            for name in &family[1..] {
                let other = registry.lookup(name).unwrap()(&p, -3.0, 4.0, n).unwrap();
                assert_relative_eq!(base, other, max_relative = 1e-9);
            }
        }
    }
}

#[test]
fn every_method_converges_over_the_default_sweep() {
    let registry = MethodRegistry::new();
    let p = reference_polynomial();
    // Small slice of the default ladder keeps the test fast.
    let ladder = default_segment_counts();
    let counts = &ladder[..5];
    let sweeps = sweep(&registry, &p, 0.0, 10.0, counts, 1);

    for method_sweep in &sweeps {
        let errors = method_sweep.errors();
        assert_eq!(errors.len(), counts.len());
        let first = errors.first().unwrap().1;
        let last = errors.last().unwrap().1;
        assert!(
            last <= first + 1e-9,
            "{} error grew from {} to {}",
            method_sweep.method,
            first,
            last
        );
    }
}

#[test]
fn single_segment_succeeds_zero_segments_fails() {
    let registry = MethodRegistry::new();
    let p = reference_polynomial();
    for name in registry.list_methods() {
        let method = registry.get(&name).unwrap();
        assert!(method(&p, 0.0, 10.0, 1).is_ok(), "{} failed at n = 1", name);
        assert_eq!(
            method(&p, 0.0, 10.0, 0).unwrap_err(),
            QuadError::InvalidSegmentCount { n: 0 },
            "{} accepted n = 0",
            name
        );
    }
}

#[test]
fn idempotent_for_identical_inputs() {
    let registry = MethodRegistry::new();
    let p = reference_polynomial();
    for name in registry.list_methods() {
        let method = registry.get(&name).unwrap();
        let first = method(&p, 0.0, 10.0, 321).unwrap();
        let second = method(&p, 0.0, 10.0, 321).unwrap();
        assert_eq!(first, second, "{} is not deterministic", name);
    }
}

#[test]
fn timing_is_nonnegative_and_repeatable() {
    let registry = MethodRegistry::new();
    let p = reference_polynomial();
    let method = registry.lookup("trapezoid").unwrap();

    let t1 = time_method(method, &p, 0.0, 10.0, 10, 10).unwrap();
    let t2 = time_method(method, &p, 0.0, 10.0, 10, 10).unwrap();
    assert!(t1 >= Duration::ZERO);
    assert!(t2 >= Duration::ZERO);
}

#[test]
fn compare_all_reports_every_method_once() {
    let registry = MethodRegistry::new();
    let p = reference_polynomial();
    let results = compare_all(&registry, &p, 0.0, 10.0, 10, 2);

    assert_eq!(results.len(), 8);
    for (name, outcome) in results {
        let measurement = outcome.unwrap();
        assert_eq!(measurement.method, name);
        assert!(measurement.estimate.is_finite());
        if name.starts_with("simpson") {
            assert!(measurement.absolute_error <= 1e-9 * 11110.0);
        }
    }
}

#[test]
fn nonfinite_bounds_propagate_without_panicking() {
    let registry = MethodRegistry::new();
    let p = reference_polynomial();
    for name in ["midpoint", "trapezoid", "simpson"] {
        let method = registry.lookup(name).unwrap();
        let estimate = method(&p, 0.0, f64::INFINITY, 10).unwrap();
        assert!(!estimate.is_finite());
    }
}
