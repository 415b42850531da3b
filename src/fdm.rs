//! Fixed-step finite-difference companion scheme
//!
//! A second-order explicit central-difference recurrence for
//! u'' + ω²u = 0 on a uniform grid:
//!
//! u[n+1] = 2u[n] − u[n−1] − dt²ω²u[n]
//!
//! seeded with the one-step Taylor start
//! u[1] = u[0] + dt·v0 − ½dt²ω²u[0].

/// Build a uniform grid of `n_steps + 1` points covering [t0, tf].
pub fn uniform_grid(t0: f64, tf: f64, n_steps: usize) -> Vec<f64> {
    let dt = (tf - t0) / n_steps as f64;
    (0..=n_steps).map(|n| t0 + dt * n as f64).collect()
}

/// Run the central-difference recurrence for `n_steps` steps of size `dt`.
///
/// Returns the `n_steps + 1` displacement values on the grid, starting
/// from u(0) = `u0`, u'(0) = `v0`.
pub fn centered_recurrence(u0: f64, v0: f64, omega: f64, dt: f64, n_steps: usize) -> Vec<f64> {
    let w2 = omega * omega;
    let mut u = Vec::with_capacity(n_steps + 1);

    u.push(u0);
    if n_steps == 0 {
        return u;
    }

    // One-step Taylor start
    u.push(u0 + dt * v0 - 0.5 * dt * dt * w2 * u0);

    for n in 1..n_steps {
        let next = 2.0 * u[n] - u[n - 1] - dt * dt * w2 * u[n];
        u.push(next);
    }

    u
}
