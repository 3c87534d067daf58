//! Step size control constants shared by all Rosenbrock schemes.

/// Safety factor applied to every step size proposal
pub const SAFETY: f64 = 0.9;
/// Exponent of the error ratio when shrinking a rejected step
pub const PSHRNK: f64 = -0.25;
/// Exponent of the error ratio when growing after an accepted step
pub const PSGROW: f64 = -0.2;
/// A rejected step shrinks by at most this factor
pub const REDUCE_COEF: f64 = 0.25;
/// Growth factor used when the error ratio is below [`ERR_CONTR`]
pub const GROW_COEF: f64 = 4.0;
/// Error ratio below which the step grows by [`GROW_COEF`]
pub const ERR_CONTR: f64 = 1.89e-4;

/// Keeps the scale vector away from zero
pub const TINY: f64 = 1e-20;
/// Forward difference increment for the Jacobian and `∂f/∂t`
pub const EPS: f64 = 1.0e-10;

/// Default scaled error tolerance of a new problem
pub const TOLERANCE_DEFAULT: f64 = 1e-7;

/// Largest output grid accepted by [`OdeProblem::validate`](crate::OdeProblem::validate)
pub const MAX_ROWS: usize = 10_000_000;
