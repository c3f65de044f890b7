use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::process;

use plotly::common::{DashType, Line, Mode, Title};
use plotly::layout::{Axis, AxisType, BarMode};
use plotly::{Bar, Layout, Plot, Scatter};

use math_quadrature::{
    default_segment_counts, sweep, CubicPolynomial, MethodRegistry, MethodSweep,
    DEFAULT_REPETITIONS,
};

// Log axes cannot render an exactly-zero error (Simpson on a cubic), so
// plotted errors are floored at this value.
const ERROR_FLOOR: f64 = 1e-16;

/// CLI arguments for plotting quadrature convergence and timing charts
#[derive(Parser)]
#[command(name = "plot_quadrature")]
#[command(about = "Render quadrature convergence, timing and error charts with Plotly")]
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

    /// Timing repetitions per sweep point
    #[arg(short, long, default_value_t = DEFAULT_REPETITIONS)]
    repetitions: usize,

    /// Segment counts shown in the error bar chart
    #[arg(long, default_value = "10,100,1000", value_delimiter = ',')]
    bar_segments: Vec<usize>,

    /// Output directory for HTML files (defaults to the user cache dir)
    #[arg(short, long)]
    output_dir: Option<String>,
}

/// Get the chart output directory, creating it if needed
fn get_output_dir(args: &Args) -> Result<PathBuf, String> {
    let dir = match &args.output_dir {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("org", "quadrature", "math-quadrature")
            .ok_or("Failed to determine project directories")?
            .cache_dir()
            .join("charts"),
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| format!("Failed to create output directory: {}", e))?;

    Ok(dir)
}

/// Line style per method family: solid for iterative, dashed for
/// vectorized, dotted for the library-backed reference variants.
fn line_style(method: &str) -> DashType {
    if method.ends_with("_vectorized") {
        DashType::Dash
    } else if method.ends_with("_reference") {
        DashType::Dot
    } else {
        DashType::Solid
    }
}

fn convergence_plot(sweeps: &[MethodSweep]) -> Plot {
    let mut plot = Plot::new();
    for method_sweep in sweeps {
        let errors = method_sweep.errors();
        let xs: Vec<f64> = errors.iter().map(|(n, _)| *n as f64).collect();
        let ys: Vec<f64> = errors.iter().map(|(_, e)| e.max(ERROR_FLOOR)).collect();
        let trace = Scatter::new(xs, ys)
            .mode(Mode::LinesMarkers)
            .name(&method_sweep.method)
            .line(Line::new().dash(line_style(&method_sweep.method)));
        plot.add_trace(trace);
    }

    let layout = Layout::new()
        .title(Title::with_text("Convergence: absolute error vs segment count"))
        .x_axis(
            Axis::new()
                .title(Title::with_text("Segments"))
                .type_(AxisType::Log),
        )
        .y_axis(
            Axis::new()
                .title(Title::with_text("Absolute error"))
                .type_(AxisType::Log),
        );
    plot.set_layout(layout);
    plot
}

fn timing_plot(sweeps: &[MethodSweep]) -> Plot {
    let mut plot = Plot::new();
    for method_sweep in sweeps {
        let timings = method_sweep.timings();
        let xs: Vec<f64> = timings.iter().map(|(n, _)| *n as f64).collect();
        let ys: Vec<f64> = timings.iter().map(|(_, t)| *t).collect();
        let trace = Scatter::new(xs, ys)
            .mode(Mode::LinesMarkers)
            .name(&method_sweep.method)
            .line(Line::new().dash(line_style(&method_sweep.method)));
        plot.add_trace(trace);
    }

    let layout = Layout::new()
        .title(Title::with_text("Mean execution time vs segment count"))
        .x_axis(
            Axis::new()
                .title(Title::with_text("Segments"))
                .type_(AxisType::Log),
        )
        .y_axis(
            Axis::new()
                .title(Title::with_text("Mean time (s)"))
                .type_(AxisType::Log),
        );
    plot.set_layout(layout);
    plot
}

fn error_bar_plot(sweeps: &[MethodSweep], bar_segments: &[usize]) -> Plot {
    let mut plot = Plot::new();
    for &count in bar_segments {
        let mut methods = Vec::new();
        let mut errors = Vec::new();
        for method_sweep in sweeps {
            let sweep_errors = method_sweep.errors();
            if let Some((_, e)) = sweep_errors.iter().find(|(n, _)| *n == count) {
                methods.push(method_sweep.method.clone());
                errors.push(e.max(ERROR_FLOOR));
            }
        }
        let trace = Bar::new(methods, errors).name(&format!("n = {}", count));
        plot.add_trace(trace);
    }

    let layout = Layout::new()
        .title(Title::with_text("Absolute error by method and segment count"))
        .bar_mode(BarMode::Group)
        .y_axis(
            Axis::new()
                .title(Title::with_text("Absolute error"))
                .type_(AxisType::Log),
        );
    plot.set_layout(layout);
    plot
}

fn main() {
    let args = Args::parse();

    let p = match CubicPolynomial::from_slice(&args.coefficients) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    };

    let output_dir = match get_output_dir(&args) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    };

    let registry = MethodRegistry::new();
    let counts = default_segment_counts();
    println!(
        "Sweeping {} methods over {} segment counts...",
        registry.len(),
        counts.len()
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
        if let Some((n, e)) = method_sweep.first_error() {
            eprintln!(
                "warning: {} failed at n = {} ({}); point omitted from charts",
                method_sweep.method, n, e
            );
        }
    }

    let charts = [
        ("convergence.html", convergence_plot(&sweeps)),
        ("timing.html", timing_plot(&sweeps)),
        ("errors_by_method.html", error_bar_plot(&sweeps, &args.bar_segments)),
    ];

    for (filename, plot) in charts {
        let path = output_dir.join(filename);
        plot.write_html(&path);
        println!("wrote {}", path.display());
    }
}
