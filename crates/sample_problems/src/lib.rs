//! Example problems for testing, benchmarks and demonstration
//!
//! [`corr_problems`] have closed form solutions and check the accuracy of a method,
//! [`perf_problems`] are the classic stiff test set problems used to compare performance.

use nalgebra::DVector;
use rosenbrock::{OdeProblem, RhsFn, Solution};

mod corr;
mod e5;
mod hires;
mod orego;
mod pollution;
mod robertson;
mod vdpol;

pub use corr::{non_stiff_1d, non_stiff_2d, non_stiff_3d, stiff_1d, stiff_2d, stiff_3d};
pub use e5::e5;
pub use hires::hires;
pub use orego::orego;
pub use pollution::pollution;
pub use robertson::robertson;
pub use vdpol::vdpol;

/// Exact solution `y(t)`
pub type Exact = fn(f64) -> DVector<f64>;

/// A problem together with its exact solution.
#[derive(Clone, Debug)]
pub struct CorrProblem {
    pub problem: OdeProblem<RhsFn>,
    pub exact: Exact,
}

/// Problems with known exact solutions
pub fn corr_problems() -> Vec<CorrProblem> {
    vec![
        non_stiff_1d(),
        non_stiff_2d(),
        non_stiff_3d(),
        stiff_1d(),
        stiff_2d(),
        stiff_3d(),
    ]
}

/// Stiff benchmark problems
pub fn perf_problems() -> Vec<OdeProblem<RhsFn>> {
    vec![robertson(), hires(), vdpol(), orego(), e5(), pollution()]
}

/// Largest absolute difference between the tabulated solution and `exact` over all grid points
/// and components.
pub fn max_abs_deviation(solution: &Solution, exact: Exact) -> f64 {
    let mut max = 0.0f64;
    for (row, t) in solution.arg().iter().enumerate() {
        let y = exact(*t);
        for (i, y_i) in y.iter().enumerate() {
            max = max.max((solution.component(i)[row] - y_i).abs());
        }
    }
    max
}

/// [`max_abs_deviation`] relative to the largest magnitude of the exact solution on the grid.
pub fn max_rel_deviation(solution: &Solution, exact: Exact) -> f64 {
    let magnitude = solution
        .arg()
        .iter()
        .map(|t| exact(*t).amax())
        .fold(0.0f64, f64::max);
    max_abs_deviation(solution, exact) / magnitude
}
