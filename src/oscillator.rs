//! Undamped harmonic oscillator model
//!
//! The second-order equation u'' + ω²u = 0 in first-order vector form,
//! together with its closed-form solution for cosine initial data.

use crate::solver::OdeSystem;

/// Undamped harmonic oscillator: u'' + ω²u = 0
///
/// State vector: [u, u'] (displacement, velocity)
pub struct HarmonicOscillator {
    /// Angular frequency ω
    pub omega: f64,
}

impl HarmonicOscillator {
    /// Create an oscillator with angular frequency `omega`
    pub fn new(omega: f64) -> Self {
        Self { omega }
    }

    /// Oscillation period 2π/ω
    pub fn period(&self) -> f64 {
        2.0 * std::f64::consts::PI / self.omega
    }
}

impl OdeSystem<2> for HarmonicOscillator {
    fn rhs(&self, _t: f64, y: &[f64; 2], dydt: &mut [f64; 2]) {
        dydt[0] = y[1];
        dydt[1] = -self.omega * self.omega * y[0];
    }
}

/// Exact displacement u(t) = u0·cos(ωt) for initial data (u0, 0)
pub fn exact_displacement(u0: f64, omega: f64, t: f64) -> f64 {
    u0 * (omega * t).cos()
}

/// Sample the exact displacement on a dense uniform grid of
/// `n_points` points covering [0, tf].
///
/// Returns (times, displacements).
pub fn exact_curve(u0: f64, omega: f64, tf: f64, n_points: usize) -> (Vec<f64>, Vec<f64>) {
    let mut t = Vec::with_capacity(n_points);
    let mut u = Vec::with_capacity(n_points);
    for i in 0..n_points {
        let ti = tf * i as f64 / (n_points - 1) as f64;
        t.push(ti);
        u.push(exact_displacement(u0, omega, ti));
    }
    (t, u)
}
