use nalgebra::DVector;
use rosenbrock::{Argument, OdeProblem, RhsFn};

/// High Irradiance RESponse of photomorphogenesis, 8 components, from the IVP test set of
/// Mazzia & Magherini.
pub fn hires() -> OdeProblem<RhsFn> {
    fn rhs(_t: f64, y: &DVector<f64>, out: &mut DVector<f64>) {
        let (y1, y2, y3, y4) = (y[0], y[1], y[2], y[3]);
        let (y5, y6, y7, y8) = (y[4], y[5], y[6], y[7]);

        out[0] = -1.71 * y1 + 0.43 * y2 + 8.32 * y3 + 0.0007;
        out[1] = 1.71 * y1 - 8.75 * y2;
        out[2] = -10.03 * y3 + 0.43 * y4 + 0.035 * y5;
        out[3] = 8.32 * y2 + 1.71 * y3 - 1.12 * y4;
        out[4] = -1.745 * y5 + 0.43 * y6 + 0.43 * y7;
        out[5] = -280.0 * y6 * y8 + 0.69 * y4 + 1.71 * y5 - 0.43 * y6 + 0.69 * y7;
        out[6] = 280.0 * y6 * y8 - 1.81 * y7;
        out[7] = -280.0 * y6 * y8 + 1.81 * y7;
    }

    OdeProblem::new(
        "HIRES",
        Argument::new("t", 0.0, 321.8122, 0.01),
        DVector::from_vec(vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0057]),
        rhs as RhsFn,
    )
    .with_tolerance(1e-10)
}
