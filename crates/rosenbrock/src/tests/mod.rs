use nalgebra::DVector;

use crate::{Argument, OdeProblem, RhsFn};


/// `y1' = -y1`, `y2' = -10·(y2 - cos t)`
pub fn forced(t: f64, y: &DVector<f64>, out: &mut DVector<f64>) {
    out[0] = -y[0];
    out[1] = -10.0 * (y[1] - t.cos());
}

pub fn forced_problem() -> OdeProblem<RhsFn> {
    OdeProblem::new(
        "forced",
        Argument::new("t", 0.0, 2.0, 0.05),
        DVector::from_vec(vec![1.0, 0.0]),
        forced as RhsFn,
    )
    .with_tolerance(1e-6)
    .with_solution_names(["x", "z"])
}

/// `y' = y`, whose Jacobian difference quotient at `y = 0` is exactly 1
pub fn growth(_t: f64, y: &DVector<f64>, out: &mut DVector<f64>) {
    out[0] = y[0];
}
