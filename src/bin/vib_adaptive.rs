//! Adaptive vs. fixed-step study of the undamped harmonic oscillator.
//!
//! Integrates u'' + ω²u = 0 over [0, 100] with the adaptive DOPRI 5(4)
//! solver, re-runs the problem with a central-difference scheme whose
//! step count matches the adaptive substep count, and plots both against
//! the exact cosine. The chart is written as PNG and SVG.
//!
//! Run with:
//!   cargo run --bin vib_adaptive -- 1e-4

use anyhow::{bail, Context, Result};
use clap::{Arg, Command};
use dopri54::{
    centered_recurrence, exact_curve, exact_displacement, save_comparison, uniform_grid,
    ComparisonData, Dopri54, HarmonicOscillator, Tolerances,
};

/// Initial displacement
const I: f64 = 1.0;
/// Initial velocity
const V: f64 = 0.0;
/// Angular frequency
const W: f64 = 1.0;
/// Total simulated time
const T: f64 = 100.0;
/// Points in the dense reference grid
const FINE_POINTS: usize = 10_001;
/// Initial step size guess handed to the adaptive solver
const H0: f64 = 0.1;

fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("vib_adaptive")
        .about(
            "Compares adaptive Dormand-Prince integration of u'' + w^2 u = 0 \
             against a step-count-matched central-difference scheme and the \
             exact solution.",
        )
        .arg(
            Arg::new("tolerance")
                .help("Error tolerance for the adaptive solver (atol = tol, rtol = 0.1*tol)")
                .value_name("TOL")
                .value_parser(clap::value_parser!(f64))
                .required(true),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Stem of the image files to write")
                .value_name("STEM")
                .default_value("vib_adaptive"),
        )
        .get_matches();

    let tol = *matches
        .get_one::<f64>("tolerance")
        .context("tolerance argument missing")?;
    let stem = matches
        .get_one::<String>("output")
        .context("output stem missing")?;

    if !tol.is_finite() || tol <= 0.0 {
        bail!("tolerance must be a positive finite number, got {}", tol);
    }

    let sys = HarmonicOscillator::new(W);
    let mut solver = Dopri54::new(Tolerances::new(tol, 0.1 * tol));

    log::info!("integrating over [0, {}] with tol = {:e}", T, tol);
    let trace = solver
        .integrate_with_trace(&sys, 0.0, &[I, V], T, H0)
        .context("adaptive integration failed")?;
    log::info!(
        "adaptive solver: {} accepted steps, {} rejected, {} rhs evaluations",
        solver.stats.accepted_steps,
        solver.stats.rejected_steps,
        solver.stats.fn_evals
    );

    // Fixed-step companion on an equal number of steps
    let n_steps = trace.len();
    let t_simple = uniform_grid(0.0, T, n_steps);
    let dt = t_simple[1] - t_simple[0];
    let u_simple = centered_recurrence(I, V, W, dt, n_steps);

    // Exact reference on a dense grid
    let (t_fine, u_fine) = exact_curve(I, W, T, FINE_POINTS);

    // Accuracy summary against the exact solution
    let max_deviation = |times: &[f64], us: &[f64]| {
        times
            .iter()
            .zip(us)
            .fold(0.0_f64, |m, (&t, &u)| {
                m.max((u - exact_displacement(I, W, t)).abs())
            })
    };
    let u_adaptive = trace.component(0);
    let dev_adaptive = max_deviation(trace.times(), &u_adaptive);
    let dev_simple = max_deviation(&t_simple, &u_simple);

    println!("tol = {:.0E}", tol);
    println!("  adaptive substeps:        {}", trace.len() - 1);
    println!("  fixed steps:              {}", n_steps);
    println!("  max |u - exact| adaptive: {:.3e}", dev_adaptive);
    println!("  max |u - exact| simple:   {:.3e}", dev_simple);

    let data = ComparisonData {
        tol,
        adaptive: (trace.times().to_vec(), u_adaptive),
        fixed: (t_simple, u_simple),
        exact: (t_fine, u_fine),
    };

    let (png, svg) = save_comparison(&data, stem)
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to render comparison plot")?;
    println!("  wrote {} and {}", png.display(), svg.display());

    Ok(())
}
