use linear::{Dense, LSolver};
use nalgebra::{DMatrix, DVector, Dyn};

use crate::{constants::EPS, numdiff, Rhs};

/// Buffers shared by all schemes, sized once per solve.
pub(crate) struct Workspace {
    /// finite difference scratch
    f0: DVector<f64>,
    f1: DVector<f64>,
    /// Jacobian, then the iteration matrix `I - h·γ·J`
    mat_w: DMatrix<f64>,
    solver: Dense<f64, Dyn>,
    /// right-hand side of the next linear solve
    pub b: DVector<f64>,
    /// candidate solution of the current attempt
    pub y_new: DVector<f64>,
    /// local error estimate of the current attempt
    pub y_err: DVector<f64>,
}

impl Workspace {
    pub fn new(dim: usize) -> Self {
        Self {
            f0: DVector::zeros(dim),
            f1: DVector::zeros(dim),
            mat_w: DMatrix::zeros(dim, dim),
            solver: Dense::new_dynamic(dim),
            b: DVector::zeros(dim),
            y_new: DVector::zeros(dim),
            y_err: DVector::zeros(dim),
        }
    }

    /// Stores `∂f/∂y` at `(t, y)` in the iteration matrix buffer.
    pub fn jacobian<F: Rhs + ?Sized>(&mut self, rhs: &F, t: f64, y: &mut DVector<f64>) {
        numdiff::jacobian(rhs, t, y, EPS, &mut self.f0, &mut self.f1, &mut self.mat_w);
    }

    pub fn time_derivative<F: Rhs + ?Sized>(
        &mut self,
        rhs: &F,
        t: f64,
        y: &DVector<f64>,
        out: &mut DVector<f64>,
    ) {
        numdiff::time_derivative(rhs, t, y, EPS, &mut self.f0, &mut self.f1, out);
    }

    /// Turns the Jacobian into `W = I - h_gamma·J` and factorizes it.
    pub fn setup(&mut self, h_gamma: f64) -> Result<(), linear::Error> {
        let dim = self.mat_w.nrows();
        for i in 0..dim {
            for j in 0..dim {
                let id = if i == j { 1.0 } else { 0.0 };
                self.mat_w[(i, j)] = id - h_gamma * self.mat_w[(i, j)];
            }
        }
        self.solver.setup(&self.mat_w)
    }

    /// `x = W⁻¹·b`
    pub fn solve(&self, x: &mut DVector<f64>) {
        self.solver.solve(&self.b, x);
    }
}
