//! Adaptive step size Rosenbrock solvers for initial value problems `dy/dt = f(t, y)`,
//! `y(start) = y0`.
//!
//! Three embedded schemes are provided: the modified Rosenbrock triple ([`mrt`]), ROS3PRw
//! ([`ros3prw`]) and ROS34PRw ([`ros34prw`], the default). All of them approximate the Jacobian
//! and `∂f/∂t` by forward differences, so only the right-hand side has to be supplied. The result
//! is tabulated on the uniform grid `start, start + step, …, finish` by linear interpolation
//! between the accepted steps.
//!
//! ```
//! use nalgebra::DVector;
//! use rosenbrock::{Argument, OdeProblem};
//!
//! let problem = OdeProblem::new(
//!     "decay",
//!     Argument::new("t", 0.0, 1.0, 0.1),
//!     DVector::from_element(1, 1.0),
//!     |_t: f64, y: &DVector<f64>, out: &mut DVector<f64>| out[0] = -y[0],
//! );
//! let solution = rosenbrock::solve(&problem).unwrap();
//! assert_eq!(solution.nrows(), 11);
//! assert!((solution.last_state()[0] - (-1.0f64).exp()).abs() < 1e-5);
//! ```

pub mod callback;
pub mod constants;
mod driver;
mod error;
mod method;
pub mod norm;
pub mod numdiff;
mod options;
mod problem;
mod schemes;
mod solution;
mod traits;
mod workspace;

pub use callback::{Callback, CallbackAction, IterationLimit, Limits, TimeLimit};
pub use error::Error;
pub use method::Method;
pub use options::SolverOptions;
pub use problem::{Argument, OdeProblem};
pub use solution::{Solution, Statistics};
pub use traits::{Rhs, RhsFn};

use schemes::{Mrt, Ros34prw, Ros3prw};

/// Solves `problem` with the default method, ROS34PRw.
pub fn solve<F: Rhs>(problem: &OdeProblem<F>) -> Result<Solution, Error> {
    ros34prw(problem, &mut ())
}

/// Solves `problem` with the method and limits of `options`.
pub fn solve_ivp<F: Rhs>(problem: &OdeProblem<F>, options: &SolverOptions) -> Result<Solution, Error> {
    let mut limits = options.limits();
    solve_with(problem, options.method, &mut limits)
}

/// Solves `problem` with `method`, reporting progress to `callback`.
pub fn solve_with<F, C>(problem: &OdeProblem<F>, method: Method, callback: &mut C) -> Result<Solution, Error>
where
    F: Rhs,
    C: Callback + ?Sized,
{
    match method {
        Method::Mrt => mrt(problem, callback),
        Method::Ros3prw => ros3prw(problem, callback),
        Method::Ros34prw => ros34prw(problem, callback),
    }
}

/// Modified Rosenbrock triple
pub fn mrt<F, C>(problem: &OdeProblem<F>, callback: &mut C) -> Result<Solution, Error>
where
    F: Rhs,
    C: Callback + ?Sized,
{
    driver::integrate::<Mrt, _, _>(problem, callback)
}

pub fn ros3prw<F, C>(problem: &OdeProblem<F>, callback: &mut C) -> Result<Solution, Error>
where
    F: Rhs,
    C: Callback + ?Sized,
{
    driver::integrate::<Ros3prw, _, _>(problem, callback)
}

pub fn ros34prw<F, C>(problem: &OdeProblem<F>, callback: &mut C) -> Result<Solution, Error>
where
    F: Rhs,
    C: Callback + ?Sized,
{
    driver::integrate::<Ros34prw, _, _>(problem, callback)
}

#[cfg(test)]
mod tests;
