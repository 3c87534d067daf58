//! Problems with closed form solutions, mostly from Chapra & Canale, "Numerical Methods for
//! Engineers".

use nalgebra::DVector;
use rosenbrock::{Argument, OdeProblem};

use crate::CorrProblem;

fn new_problem(
    name: &str,
    arg: Argument,
    initial: &[f64],
    rhs: rosenbrock::RhsFn,
    tolerance: f64,
    names: &[&str],
) -> OdeProblem<rosenbrock::RhsFn> {
    OdeProblem::new(name, arg, DVector::from_row_slice(initial), rhs)
        .with_tolerance(tolerance)
        .with_solution_names(names.iter().copied())
}

/// `y' = 4·exp(0.8t) - 0.5y`, `y(0) = 2`
pub fn non_stiff_1d() -> CorrProblem {
    fn rhs(t: f64, y: &DVector<f64>, out: &mut DVector<f64>) {
        out[0] = 4.0 * (0.8 * t).exp() - 0.5 * y[0];
    }

    fn exact(t: f64) -> DVector<f64> {
        DVector::from_element(
            1,
            ((0.8 * t).exp() - (-0.5 * t).exp()) * 4.0 / 1.3 + 2.0 * (-0.5 * t).exp(),
        )
    }

    CorrProblem {
        problem: new_problem(
            "non-stiff 1D",
            Argument::new("t", 0.0, 4.0, 0.01),
            &[2.0],
            rhs,
            1e-5,
            &["y"],
        ),
        exact,
    }
}

/// `x' = x + y`, `y' = y - x`
pub fn non_stiff_2d() -> CorrProblem {
    fn rhs(_t: f64, y: &DVector<f64>, out: &mut DVector<f64>) {
        out[0] = y[0] + y[1];
        out[1] = y[1] - y[0];
    }

    fn exact(t: f64) -> DVector<f64> {
        let (s, c) = t.sin_cos();
        DVector::from_vec(vec![t.exp() * (c + s), t.exp() * (c - s)])
    }

    CorrProblem {
        problem: new_problem(
            "non-stiff 2D",
            Argument::new("t", 0.0, 4.0, 0.01),
            &[1.0, 1.0],
            rhs,
            1e-9,
            &["x", "y"],
        ),
        exact,
    }
}

/// Linear 2D system with forcing plus an independent polynomial component.
pub fn non_stiff_3d() -> CorrProblem {
    fn rhs(t: f64, y: &DVector<f64>, out: &mut DVector<f64>) {
        out[0] = 5.0 * y[0] + 2.0 * y[1] + t.sin();
        out[1] = -4.0 * y[0] - y[1] + (2.0 * t).exp();
        out[2] = 5.0 * t.powi(4) - 3.0 * t.powi(2) + 2.0 * t;
    }

    fn exact(t: f64) -> DVector<f64> {
        let e1 = t.exp();
        let e2 = (2.0 * t).exp();
        let e3 = (3.0 * t).exp();
        let (s, c) = t.sin_cos();
        DVector::from_vec(vec![
            e1 + e3 + 0.1 * (3.0 * c - s) - 2.0 * e2,
            -2.0 * e1 - e3 - 0.2 * (2.0 * s + 4.0 * c) + 3.0 * e2,
            t.powi(5) - t.powi(3) + t.powi(2),
        ])
    }

    CorrProblem {
        problem: new_problem(
            "non-stiff 3D",
            Argument::new("t", 0.0, 2.0, 0.001),
            &[0.3, -0.8, 0.0],
            rhs,
            1e-8,
            &["x", "y", "z"],
        ),
        exact,
    }
}

/// `y' = -1000y + 3000 - 2000·exp(-t)`, `y(0) = 0`
pub fn stiff_1d() -> CorrProblem {
    fn rhs(t: f64, y: &DVector<f64>, out: &mut DVector<f64>) {
        out[0] = -1000.0 * y[0] + 3000.0 - 2000.0 * (-t).exp();
    }

    fn exact(t: f64) -> DVector<f64> {
        DVector::from_element(
            1,
            3.0 - 0.998 * (-1000.0 * t).exp() - 2.002 * (-t).exp(),
        )
    }

    CorrProblem {
        problem: new_problem(
            "stiff 1D",
            Argument::new("t", 0.0, 4.0, 0.01),
            &[0.0],
            rhs,
            5e-7,
            &["y"],
        ),
        exact,
    }
}

/// `x' = -5x + 3y`, `y' = 100x - 301y`, eigenvalues `-3.9899` and `-302.0101`
pub fn stiff_2d() -> CorrProblem {
    fn rhs(_t: f64, y: &DVector<f64>, out: &mut DVector<f64>) {
        out[0] = -5.0 * y[0] + 3.0 * y[1];
        out[1] = 100.0 * y[0] - 301.0 * y[1];
    }

    fn exact(t: f64) -> DVector<f64> {
        let slow = (-3.9899 * t).exp();
        let fast = (-302.0101 * t).exp();
        DVector::from_vec(vec![
            52.96 * slow - 0.67 * fast,
            17.83 * slow + 65.99 * fast,
        ])
    }

    CorrProblem {
        problem: new_problem(
            "stiff 2D",
            Argument::new("t", 0.0, 4.0, 0.01),
            &[52.29, 83.82],
            rhs,
            5e-7,
            &["x", "y"],
        ),
        exact,
    }
}

/// A fast mode `exp(-100t)` on top of a harmonic oscillator.
pub fn stiff_3d() -> CorrProblem {
    fn rhs(_t: f64, y: &DVector<f64>, out: &mut DVector<f64>) {
        out[0] = -100.0 * y[0] + 100.0 * y[1] + y[2];
        out[1] = y[2];
        out[2] = -y[1];
    }

    fn exact(t: f64) -> DVector<f64> {
        let (s, c) = t.sin_cos();
        DVector::from_vec(vec![(-100.0 * t).exp() + c, c, -s])
    }

    CorrProblem {
        problem: new_problem(
            "stiff 3D",
            Argument::new("t", 0.0, 4.0, 0.01),
            &[2.0, 1.0, 0.0],
            rhs,
            1e-8,
            &["x", "y", "z"],
        ),
        exact,
    }
}
