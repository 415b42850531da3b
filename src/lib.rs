//! # DOPRI54: Dormand-Prince 5(4) Integrator
//!
//! An adaptive ODE integrator for vibration models, with a companion
//! fixed-step finite-difference scheme and plotting support for
//! adaptive-vs-fixed accuracy studies.
//!
//! ## Features
//!
//! - 7-stage embedded RK5(4) pair providing 5th-order accuracy
//! - Adaptive step-size control with 4th-order error estimation
//! - Full substep trace: every internally accepted `(t, y)` pair is
//!   available to the caller, not just the endpoint
//! - Second-order central-difference recurrence for step-count-matched
//!   fixed-step comparisons
//! - Comparison chart rendering (PNG + SVG) via `plotters`
//! - Based on Dormand & Prince (1980) / the DOPRI5 code of Hairer & Wanner
//!
//! ## Basic Usage
//!
//! ```rust
//! use dopri54::{Dopri54, OdeSystem, Tolerances};
//!
//! // Define your ODE system
//! struct HarmonicOscillator { omega: f64 }
//!
//! impl OdeSystem<2> for HarmonicOscillator {
//!     fn rhs(&self, _t: f64, y: &[f64; 2], dydt: &mut [f64; 2]) {
//!         dydt[0] = y[1];
//!         dydt[1] = -self.omega * self.omega * y[0];
//!     }
//! }
//!
//! // Set up and run the integrator
//! let sys = HarmonicOscillator { omega: 1.0 };
//! let tol = Tolerances::new(1e-10, 1e-10);
//! let mut solver = Dopri54::new(tol);
//!
//! let y0 = [1.0, 0.0];  // Initial conditions
//! let (tf, yf) = solver.integrate(&sys, 0.0, &y0, 10.0, 0.1).unwrap();
//! # let _ = (tf, yf);
//! ```
//!
//! ## Substep Traces
//!
//! Adaptive solvers choose their own internal time points. For accuracy
//! studies it is exactly this internal sequence that matters: request the
//! whole interval in one call and inspect every point the step controller
//! accepted.
//!
//! ```rust
//! use dopri54::{Dopri54, HarmonicOscillator, Tolerances};
//!
//! let sys = HarmonicOscillator::new(1.0);
//! let mut solver = Dopri54::new(Tolerances::new(1e-6, 1e-7));
//!
//! let trace = solver
//!     .integrate_with_trace(&sys, 0.0, &[1.0, 0.0], 100.0, 0.1)
//!     .unwrap();
//!
//! println!("{} substeps taken", trace.len() - 1);
//! let displacements = trace.component(0);
//! # let _ = displacements;
//! ```
//!
//! ## Tolerance Selection
//!
//! The error per step is controlled against `atol + rtol * |y|`. The
//! `vib_adaptive` binary uses `atol = tol`, `rtol = 0.1 * tol` with `tol`
//! supplied on the command line, so a single number controls both limits.
//!
//! ## References
//!
//! 1. Dormand, J.R. & Prince, P.J. (1980). "A family of embedded
//!    Runge-Kutta formulae". J. Comp. Appl. Math., 6(1), 19-26.
//!
//! 2. Hairer, E., Nørsett, S.P., & Wanner, G. (1993). "Solving
//!    Ordinary Differential Equations I: Nonstiff Problems".
//!    Springer.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod coefficients;
pub mod fdm;
pub mod oscillator;
pub mod plot;
pub mod solver;

pub use fdm::{centered_recurrence, uniform_grid};
pub use oscillator::{exact_curve, exact_displacement, HarmonicOscillator};
pub use plot::{save_comparison, ComparisonData};
pub use solver::{
    Dopri54, IntegrationError, OdeSystem, Stats, StepController, StepResult, Tolerances, Trace,
};
