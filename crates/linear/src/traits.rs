use nalgebra::{Dim, Matrix, RealField, Scalar, Storage, StorageMut, U1};

use crate::{Error, LSolverType};

pub trait LSolver<T, D>
where
    T: Scalar + RealField + Copy,
    D: Dim,
{
    fn get_type(&self) -> LSolverType;

    /// The size `n` of the `n x n` systems this solver was created for.
    fn dim(&self) -> usize;

    /// Performs any linear solver setup needed for the system matrix `mat_a`. For the direct
    /// solvers in this crate this is the factorization; `mat_a` itself is left untouched.
    ///
    /// Returns an error if the matrix has the wrong shape or if the factorization meets an exact
    /// zero pivot.
    fn setup<S>(&mut self, mat_a: &Matrix<T, D, D, S>) -> Result<(), Error>
    where
        S: Storage<T, D, D>;

    /// Solves the linear system `A x = b` using the factors computed by the last `setup` call.
    ///
    /// ## Arguments
    /// * `b` the linear system right-hand side.
    /// * `x` the solution of the linear system upon return.
    fn solve<SB, SX>(&self, b: &Matrix<T, D, U1, SB>, x: &mut Matrix<T, D, U1, SX>)
    where
        SB: Storage<T, D>,
        SX: StorageMut<T, D>;
}

/// Checks that `mat_a` is `n x n`.
pub(crate) fn check_square<T, D, S>(mat_a: &Matrix<T, D, D, S>, n: usize) -> Result<(), Error>
where
    T: Scalar,
    D: Dim,
    S: Storage<T, D, D>,
{
    let (rows, cols) = mat_a.shape();
    if rows != n || cols != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            rows,
            cols,
        });
    }
    Ok(())
}
