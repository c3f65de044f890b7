//! Convergence study over the reference cubic: prints the comparison table
//! at n = 10, then the error decay of each rule across a segment-count
//! ladder.
//!
//! Run with: cargo run --example convergence_study

use math_quadrature::{compare_all, sweep, CubicPolynomial, MethodRegistry};

fn main() {
    let p = CubicPolynomial::new([1.0, 2.0, 3.0, 4.0]);
    let (a, b) = (0.0, 10.0);
    let registry = MethodRegistry::new();

    println!("f(x) = 1 + 2x + 3x^2 + 4x^3 on [{}, {}]", a, b);
    println!("analytical integral: {:.3}\n", p.integral(a, b));

    for (name, outcome) in compare_all(&registry, &p, a, b, 10, 10) {
        match outcome {
            Ok(measurement) => println!("{}", measurement),
            Err(e) => eprintln!("{:<22} FAILED: {}", name, e),
        }
    }

    let counts = [10, 100, 1_000, 10_000];
    println!("\nError decay per rule:");
    for method_sweep in sweep(&registry, &p, a, b, &counts, 3) {
        print!("{:<22}", method_sweep.method);
        for (n, error) in method_sweep.errors() {
            print!("  n={:<6} {:.2e}", n, error);
        }
        println!();
    }
}
