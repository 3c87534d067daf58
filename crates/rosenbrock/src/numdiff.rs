//! Forward difference approximations of `∂f/∂t` and the Jacobian `∂f/∂y`.
//!
//! Both routines take the scratch vectors `f0` and `f1` from the caller so nothing is allocated
//! inside the step retry loop.

use nalgebra::{DMatrix, DVector};

use crate::Rhs;

/// `out = (f(t + eps, y) - f(t, y)) / eps`
pub fn time_derivative<F: Rhs + ?Sized>(
    rhs: &F,
    t: f64,
    y: &DVector<f64>,
    eps: f64,
    f0: &mut DVector<f64>,
    f1: &mut DVector<f64>,
    out: &mut DVector<f64>,
) {
    rhs.rhs(t, y, f0);
    rhs.rhs(t + eps, y, f1);

    for i in 0..out.len() {
        out[i] = (f1[i] - f0[i]) / eps;
    }
}

/// `out[(i, j)] = (f_i(t, y + eps·e_j) - f_i(t, y)) / eps`
///
/// Each component of `y` is perturbed in place and restored by subtracting `eps` again. The
/// restore is not guaranteed to be exact in floating point, and callers keep working with the
/// restored `y`.
pub fn jacobian<F: Rhs + ?Sized>(
    rhs: &F,
    t: f64,
    y: &mut DVector<f64>,
    eps: f64,
    f0: &mut DVector<f64>,
    f1: &mut DVector<f64>,
    out: &mut DMatrix<f64>,
) {
    let dim = y.len();
    rhs.rhs(t, y, f0);

    for j in 0..dim {
        y[j] += eps;
        rhs.rhs(t, y, f1);

        for i in 0..dim {
            out[(i, j)] = (f1[i] - f0[i]) / eps;
        }

        y[j] -= eps;
    }
}
