use clap::Parser;
use std::process;

use math_quadrature::{
    default_segment_counts, measure_method, sweep, CubicPolynomial, MethodRegistry,
    DEFAULT_REPETITIONS,
};

/// CLI arguments for the quadrature comparison run
#[derive(Parser)]
#[command(name = "run_compare")]
#[command(about = "Compare quadrature rules on a cubic polynomial against the analytical integral")]
struct Args {
    /// Polynomial coefficients c0,c1,c2,c3 (constant term first)
    #[arg(short, long, default_value = "1,2,3,4", value_delimiter = ',')]
    coefficients: Vec<f64>,

    /// Lower integration bound
    #[arg(short = 'a', long, default_value_t = 0.0)]
    lower: f64,

    /// Upper integration bound
    #[arg(short = 'b', long, default_value_t = 10.0)]
    upper: f64,

    /// Segment count for the comparison table
    #[arg(short = 'n', long, default_value_t = 10)]
    segments: usize,

    /// Timing repetitions per measurement
    #[arg(short, long, default_value_t = DEFAULT_REPETITIONS)]
    repetitions: usize,

    /// Only run methods whose name contains this pattern
    #[arg(short, long)]
    filter: Option<String>,

    /// List registered methods and exit
    #[arg(short, long)]
    list: bool,

    /// Also run the convergence/performance sweep from 10 to 100000 segments
    #[arg(long)]
    sweep: bool,

    /// Abort on the first failing method instead of reporting and continuing
    #[arg(long)]
    fail_fast: bool,
}

fn main() {
    let args = Args::parse();
    let mut registry = MethodRegistry::new();

    if args.list {
        println!("Registered methods:");
        for name in registry.list_methods() {
            println!("  {}", name);
        }
        return;
    }

    let p = match CubicPolynomial::from_slice(&args.coefficients) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    };

    if let Some(pattern) = &args.filter {
        registry.retain(|name| name.contains(pattern.as_str()));
    }
    let selected = registry.list_methods();

    if selected.is_empty() {
        eprintln!("No methods match the filter criteria");
        process::exit(1);
    }

    let [c0, c1, c2, c3] = p.coefficients();
    println!(
        "f(x) = {} + {}x + {}x^2 + {}x^3 on [{}, {}]",
        c0, c1, c2, c3, args.lower, args.upper
    );
    println!(
        "analytical integral: {:.3}",
        p.integral(args.lower, args.upper)
    );
    println!(
        "\n=== RESULTS (n = {}, {} repetitions) ===",
        args.segments, args.repetitions
    );

    let mut failures = 0;
    for name in &selected {
        let method = registry.get(name).expect("selected from the listing");
        match measure_method(
            name,
            method,
            &p,
            args.lower,
            args.upper,
            args.segments,
            args.repetitions,
        ) {
            Ok(measurement) => println!("{}", measurement),
            Err(e) => {
                failures += 1;
                eprintln!("{:<22} FAILED: {}", name, e);
                if args.fail_fast {
                    process::exit(1);
                }
            }
        }
    }

    if args.sweep {
        let counts = default_segment_counts();
        println!(
            "\n=== CONVERGENCE SWEEP ({} .. {} segments) ===",
            counts.first().unwrap(),
            counts.last().unwrap()
        );
        let sweeps = sweep(
            &registry,
            &p,
            args.lower,
            args.upper,
            &counts,
            args.repetitions,
        );
        for method_sweep in &sweeps {
            println!("{}", method_sweep.method);
            for (n, outcome) in &method_sweep.points {
                match outcome {
                    Ok(pt) => println!(
                        "  n = {:>6}  error: {:.2e}  time: {:.2e} s",
                        n,
                        pt.absolute_error,
                        pt.mean_time.as_secs_f64()
                    ),
                    Err(e) => {
                        failures += 1;
                        eprintln!("  n = {:>6}  FAILED: {}", n, e);
                        if args.fail_fast {
                            process::exit(1);
                        }
                    }
                }
            }
        }
    }

    if failures > 0 {
        eprintln!("\n{} measurement(s) failed", failures);
        process::exit(1);
    }
}
