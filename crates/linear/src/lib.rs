//! Direct solvers for the small dense systems `W x = b` that appear in every stage of a
//! Rosenbrock step.
//!
//! Two factorizations are provided: [`Doolittle`], an LU decomposition without pivoting, and
//! [`ClosedForm`], a scalar divide / Cramer's rule shortcut for 1x1 and 2x2 systems. [`Dense`]
//! picks between them by the system size.

mod closed_form;
mod dense;
mod doolittle;
mod traits;

pub use closed_form::ClosedForm;
pub use dense::Dense;
pub use doolittle::Doolittle;
pub use traits::LSolver;

use thiserror::Error;

/// Largest system size handled by [`ClosedForm`].
pub const CLOSED_FORM_MAX_DIM: usize = 2;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("A singular matrix was encountered during a LU factorization (col {col})")]
    LUFactFail { col: usize },

    #[error("The {dim}x{dim} matrix is singular")]
    SingularMatrix { dim: usize },

    #[error("Expected a {expected}x{expected} system, got a {rows}x{cols} one")]
    DimensionMismatch {
        expected: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Closed-form solves support only 1x1 and 2x2 systems, got {dim}x{dim}")]
    UnsupportedDimension { dim: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LSolverType {
    /// Scalar divide or Cramer's rule
    ClosedForm,
    /// Doolittle LU factorization followed by forward/back substitution
    Lu,
}
