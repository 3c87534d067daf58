use nalgebra::DVector;
use rosenbrock::{Argument, OdeProblem, RhsFn};

/// The Oregonator, Field & Noyes' model of the Belousov-Zhabotinskii reaction.
pub fn orego() -> OdeProblem<RhsFn> {
    fn rhs(_t: f64, y: &DVector<f64>, out: &mut DVector<f64>) {
        let (y1, y2, y3) = (y[0], y[1], y[2]);
        out[0] = 77.27 * (y2 - y1 * y2 + y1 - 8.375e-6 * y1 * y1);
        out[1] = 1.0 / 77.27 * (-y2 - y1 * y2 + y3);
        out[2] = 0.161 * (y1 - y3);
    }

    OdeProblem::new(
        "OREGO",
        Argument::new("t", 0.0, 360.0, 0.01),
        DVector::from_vec(vec![1.0, 2.0, 3.0]),
        rhs as RhsFn,
    )
    .with_tolerance(1e-8)
}
