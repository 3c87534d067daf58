use nalgebra::DVector;
use rosenbrock::{Argument, OdeProblem, RhsFn};

/// Stiffness parameter
const MU: f64 = 1000.0;

/// Van der Pol oscillator with `μ = 1000`:
///
/// ```math
/// dx1/dt = x2
/// dx2/dt = -x1 + μ*(1 - x1**2)*x2
/// ```
pub fn vdpol() -> OdeProblem<RhsFn> {
    fn rhs(_t: f64, y: &DVector<f64>, out: &mut DVector<f64>) {
        out[0] = y[1];
        out[1] = -y[0] + MU * (1.0 - y[0] * y[0]) * y[1];
    }

    OdeProblem::new(
        "van der Pol",
        Argument::new("t", 0.0, 2000.0, 0.1),
        DVector::from_vec(vec![-1.0, 1.0]),
        rhs as RhsFn,
    )
    .with_tolerance(1e-12)
    .with_solution_names(["x1", "x2"])
}
