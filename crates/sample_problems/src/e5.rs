use nalgebra::DVector;
use rosenbrock::{Argument, OdeProblem, RhsFn};

const K1: f64 = 7.89e-10;
const K2: f64 = 1.13e9;
const K3: f64 = 1.1e7;
const K4: f64 = 1.13e3;

/// E5, chemical pyrolysis with rate constants spanning 19 orders of magnitude.
pub fn e5() -> OdeProblem<RhsFn> {
    fn rhs(_t: f64, y: &DVector<f64>, out: &mut DVector<f64>) {
        let (y1, y2, y3, y4) = (y[0], y[1], y[2], y[3]);
        out[0] = -K1 * y1 - K3 * y1 * y3;
        out[1] = K1 * y1 - K2 * y2 * y3;
        out[2] = K1 * y1 - K2 * y2 * y3 - K3 * y1 * y3 + K4 * y4;
        out[3] = K3 * y1 * y3 - K4 * y4;
    }

    OdeProblem::new(
        "E5",
        Argument::new("t", 0.0, 1e13, 2.5e8),
        DVector::from_vec(vec![0.00176, 0.0, 0.0, 0.0]),
        rhs as RhsFn,
    )
    .with_tolerance(1e-6)
}
