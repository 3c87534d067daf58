use nalgebra::DVector;
use rosenbrock::{Argument, OdeProblem, RhsFn};

/// Robertson's chemical kinetics problem, a stiff system of three reactions:
///
/// ```math
/// dy1/dt = -.04*y1 + 1.e4*y2*y3
/// dy2/dt = .04*y1 - 1.e4*y2*y3 - 3.e7*y2**2
/// dy3/dt = 3.e7*y2**2
/// ```
///
/// on the interval `t = 0.0..=1.e12`, with initial conditions `y1 = 1`, `y2 = y3 = 0`.
///
/// The right-hand side sums to zero, so `y1 + y2 + y3 = 1` holds for the exact solution and, up
/// to rounding, for the computed one.
pub fn robertson() -> OdeProblem<RhsFn> {
    fn rhs(_t: f64, y: &DVector<f64>, out: &mut DVector<f64>) {
        out[0] = -0.04 * y[0] + 1.0e4 * y[1] * y[2];
        out[1] = 0.04 * y[0] - 1.0e4 * y[1] * y[2] - 3.0e7 * y[1].powi(2);
        out[2] = 3.0e7 * y[1].powi(2);
    }

    OdeProblem::new(
        "Robertson",
        Argument::new("t", 0.0, 1.0e12, 2.5e7),
        DVector::from_vec(vec![1.0, 0.0, 0.0]),
        rhs as RhsFn,
    )
    .with_tolerance(1e-7)
    .with_solution_names(["A", "B", "C"])
}
