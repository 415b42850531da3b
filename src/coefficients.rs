//! Dormand-Prince 5(4) Coefficients
//!
//! Coefficients for the 7-stage embedded RK5(4) pair from:
//! Dormand, J.R. & Prince, P.J. (1980). "A family of embedded
//! Runge-Kutta formulae". J. Comp. Appl. Math., 6(1), 19-26.
//!
//! This method provides a 5th-order solution with a 4th-order
//! embedded method for error estimation and adaptive step control.
//! The constants below match the DOPRI5 code of Hairer & Wanner.

/// Number of stages in the DOPRI 5(4) method
pub const STAGES: usize = 7;

/// Order of the higher-order method (used for advancing the solution)
pub const ORDER: u8 = 5;

/// Order of the embedded method (used for error estimation)
pub const EMBEDDED_ORDER: u8 = 4;

/// Node coefficients (c_i) - the points at which f(t,y) is evaluated
/// c[i] represents t_n + c[i]*h
pub const C: [f64; STAGES] = [
    0.0,       // c[0]
    0.2,       // c[1] = 1/5
    0.3,       // c[2] = 3/10
    0.8,       // c[3] = 4/5
    8.0 / 9.0, // c[4] = 8/9
    1.0,       // c[5] = 1
    1.0,       // c[6] = 1 (FSAL stage, evaluated at the 5th-order result)
];

/// Runge-Kutta matrix (a_ij) coefficients
///
/// This is the lower-triangular matrix where:
/// k_i = f(t_n + c_i*h, y_n + h * sum_{j=0}^{i-1} a_{i,j} * k_j)
///
/// Stored as A[i][j] for row i, column j (j < i)
pub const A: [[f64; 6]; 7] = [
    // Row 0: k_0 = f(t_n, y_n)
    [0.0; 6],
    // Row 1: k_1 = f(t_n + (1/5)*h, y_n + h*(1/5)*k_0)
    [0.2, 0.0, 0.0, 0.0, 0.0, 0.0],
    // Row 2: k_2
    [3.0 / 40.0, 9.0 / 40.0, 0.0, 0.0, 0.0, 0.0],
    // Row 3: k_3
    [44.0 / 45.0, -56.0 / 15.0, 32.0 / 9.0, 0.0, 0.0, 0.0],
    // Row 4: k_4
    [
        19372.0 / 6561.0,
        -25360.0 / 2187.0,
        64448.0 / 6561.0,
        -212.0 / 729.0,
        0.0,
        0.0,
    ],
    // Row 5: k_5
    [
        9017.0 / 3168.0,
        -355.0 / 33.0,
        46732.0 / 5247.0,
        49.0 / 176.0,
        -5103.0 / 18656.0,
        0.0,
    ],
    // Row 6: k_6 (row equals the 5th-order weights; the FSAL stage)
    [
        35.0 / 384.0,
        0.0,
        500.0 / 1113.0,
        125.0 / 192.0,
        -2187.0 / 6784.0,
        11.0 / 84.0,
    ],
];

/// Weights for the 5th-order solution (b_i)
///
/// y_{n+1} = y_n + h * sum_{i=0}^{6} b[i] * k_i
///
/// Note: stage 6 carries zero weight in the 5th-order solution; it only
/// enters the 4th-order error estimate.
pub const B: [f64; STAGES] = [
    35.0 / 384.0,     // b[0]
    0.0,              // b[1]
    500.0 / 1113.0,   // b[2]
    125.0 / 192.0,    // b[3]
    -2187.0 / 6784.0, // b[4]
    11.0 / 84.0,      // b[5]
    0.0,              // b[6]
];

/// Weights for the 4th-order solution (b_hat_i)
///
/// y*_{n+1} = y_n + h * sum_{i=0}^{6} b_hat[i] * k_i
pub const B_HAT: [f64; STAGES] = [
    5179.0 / 57600.0,    // b_hat[0]
    0.0,                 // b_hat[1]
    7571.0 / 16695.0,    // b_hat[2]
    393.0 / 640.0,       // b_hat[3]
    -92097.0 / 339200.0, // b_hat[4]
    187.0 / 2100.0,      // b_hat[5]
    1.0 / 40.0,          // b_hat[6]
];

/// Error weights: B[i] - B_HAT[i]
///
/// The local truncation error estimate is:
/// err ≈ h * sum_{i=0}^{6} (b[i] - b_hat[i]) * k_i
pub const B_ERR: [f64; STAGES] = [
    71.0 / 57600.0, // b[0] - b_hat[0]
    0.0,
    -71.0 / 16695.0,     // b[2] - b_hat[2]
    71.0 / 1920.0,       // b[3] - b_hat[3]
    -17253.0 / 339200.0, // b[4] - b_hat[4]
    22.0 / 525.0,        // b[5] - b_hat[5]
    -1.0 / 40.0,         // b[6] - b_hat[6]
];
