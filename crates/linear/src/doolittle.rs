//! LU factorization without pivoting (Doolittle's scheme).
//!
use nalgebra::{
    allocator::Allocator, DefaultAllocator, Dim, DimName, Dyn, Matrix, OMatrix, RealField, Scalar,
    Storage, StorageMut, U1,
};
use num_traits::Zero;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::{traits::check_square, Error, LSolver, LSolverType};

/// Doolittle LU solver.
///
/// `A = L U` with `L` unit lower triangular and `U` upper triangular. No row exchanges are done,
/// which is adequate for iteration matrices `W = I - h γ J` at reasonable step sizes since they
/// stay close to the identity.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(bound(
        serialize = "OMatrix<T, D, D>: Serialize",
        deserialize = "OMatrix<T, D, D>: Deserialize<'de>"
    ))
)]
#[derive(Clone, Debug)]
pub struct Doolittle<T, D>
where
    T: Scalar,
    D: Dim,
    DefaultAllocator: Allocator<T, D, D>,
{
    mat_l: OMatrix<T, D, D>,
    mat_u: OMatrix<T, D, D>,
}

impl<T, D> Doolittle<T, D>
where
    T: Scalar + Zero,
    D: DimName,
    DefaultAllocator: Allocator<T, D, D>,
{
    /// Creates a new LU solver for statically sized systems.
    pub fn new() -> Self {
        Doolittle {
            mat_l: OMatrix::<T, D, D>::zeros(),
            mat_u: OMatrix::<T, D, D>::zeros(),
        }
    }
}

impl<T, D> Default for Doolittle<T, D>
where
    T: Scalar + Zero,
    D: DimName,
    DefaultAllocator: Allocator<T, D, D>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar + Zero> Doolittle<T, Dyn> {
    pub fn new_dynamic(dim: usize) -> Self {
        Doolittle {
            mat_l: OMatrix::<T, Dyn, Dyn>::zeros(dim, dim),
            mat_u: OMatrix::<T, Dyn, Dyn>::zeros(dim, dim),
        }
    }
}

impl<T, D> Doolittle<T, D>
where
    T: Scalar,
    D: Dim,
    DefaultAllocator: Allocator<T, D, D>,
{
    /// The unit lower triangular factor from the last `setup`.
    pub fn l(&self) -> &OMatrix<T, D, D> {
        &self.mat_l
    }

    /// The upper triangular factor from the last `setup`.
    pub fn u(&self) -> &OMatrix<T, D, D> {
        &self.mat_u
    }
}

impl<T, D> LSolver<T, D> for Doolittle<T, D>
where
    T: Scalar + RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<T, D, D>,
{
    fn get_type(&self) -> LSolverType {
        LSolverType::Lu
    }

    fn dim(&self) -> usize {
        self.mat_u.nrows()
    }

    /// Computes `L` and `U` row by row: for each `k` the k-th row of `U`, then the k-th column of
    /// `L`. The inner sums run over `p = 0..k` in increasing order.
    ///
    /// Fails with [`Error::LUFactFail`] (column numbered from one) on an exact zero pivot.
    fn setup<S>(&mut self, mat_a: &Matrix<T, D, D, S>) -> Result<(), Error>
    where
        S: Storage<T, D, D>,
    {
        let n = self.mat_u.nrows();
        check_square(mat_a, n)?;

        self.mat_l.fill(T::zero());
        self.mat_u.fill(T::zero());
        self.mat_l.fill_diagonal(T::one());

        for k in 0..n {
            for j in k..n {
                let mut sum_u = T::zero();
                for p in 0..k {
                    sum_u += self.mat_l[(k, p)] * self.mat_u[(p, j)];
                }
                self.mat_u[(k, j)] = mat_a[(k, j)] - sum_u;
            }

            let pivot = self.mat_u[(k, k)];
            if pivot == T::zero() {
                return Err(Error::LUFactFail { col: k + 1 });
            }

            for i in (k + 1)..n {
                let mut sum_l = T::zero();
                for p in 0..k {
                    sum_l += self.mat_l[(i, p)] * self.mat_u[(p, k)];
                }
                self.mat_l[(i, k)] = (mat_a[(i, k)] - sum_l) / pivot;
            }
        }

        Ok(())
    }

    /// Forward substitution `L y = b` followed by back substitution `U x = y`. `y` is kept in `x`,
    /// the back substitution overwrites it from the last component up.
    fn solve<SB, SX>(&self, b: &Matrix<T, D, U1, SB>, x: &mut Matrix<T, D, U1, SX>)
    where
        SB: Storage<T, D>,
        SX: StorageMut<T, D>,
    {
        let n = self.mat_u.nrows();

        for i in 0..n {
            let mut sum_ly = T::zero();
            for j in 0..i {
                sum_ly += self.mat_l[(i, j)] * x[j];
            }
            x[i] = (b[i] - sum_ly) / self.mat_l[(i, i)];
        }

        for i in (0..n).rev() {
            let mut sum_ux = T::zero();
            for j in (i + 1)..n {
                sum_ux += self.mat_u[(i, j)] * x[j];
            }
            x[i] = (x[i] - sum_ux) / self.mat_u[(i, i)];
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{matrix, vector, DMatrix, DVector, Matrix2, Vector4, U4};

    use super::*;

    #[test]
    fn test_factors_2x2() {
        let mat_a = matrix![
            4.0, 3.0;
            6.0, 3.0;
        ];
        let mut lu = Doolittle::<f64, nalgebra::U2>::new();
        lu.setup(&mat_a).unwrap();

        assert_eq!(lu.l(), &Matrix2::new(1.0, 0.0, 1.5, 1.0));
        assert_eq!(lu.u(), &Matrix2::new(4.0, 3.0, 0.0, -1.5));
        assert_eq!(lu.l() * lu.u(), mat_a);
    }

    #[test]
    fn test_solve_4x4() {
        let mat_a = matrix![
            10.0, 1.0, 2.0, 0.0;
            1.0, 12.0, -1.0, 3.0;
            2.0, -1.0, 9.0, 1.0;
            0.0, 3.0, 1.0, 8.0;
        ];
        let b = vector![18.0, 34.0, 31.0, 41.0];
        let expected = vector![1.0, 2.0, 3.0, 4.0];

        let mut lu = Doolittle::<f64, U4>::new();
        let mut x = Vector4::zeros();
        lu.setup(&mat_a).unwrap();
        lu.solve(&b, &mut x);
        assert_relative_eq!(x, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_setup_keeps_input() {
        let mat_a = DMatrix::from_row_slice(3, 3, &[2.0, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0]);
        let copy = mat_a.clone();
        let mut lu = Doolittle::new_dynamic(3);
        lu.setup(&mat_a).unwrap();
        assert_eq!(mat_a, copy);
        assert_relative_eq!(lu.l() * lu.u(), mat_a, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_pivot() {
        // Solvable with row exchanges, but the third pivot vanishes without them.
        let mat_a = matrix![
            5.0, 0.0, 0.0, 1.0;
            2.0, 2.0, 2.0, 1.0;
            4.0, 5.0, 5.0, 5.0;
            1.0, 6.0, 4.0, 5.0;
        ];
        let mut lu = Doolittle::<f64, U4>::new();
        assert_eq!(lu.setup(&mat_a), Err(Error::LUFactFail { col: 3 }));
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut lu = Doolittle::<f64, Dyn>::new_dynamic(3);
        let mat_a = DMatrix::<f64>::identity(2, 2);
        assert_eq!(
            lu.setup(&mat_a),
            Err(Error::DimensionMismatch {
                expected: 3,
                rows: 2,
                cols: 2
            })
        );
    }

    #[test]
    fn test_solve_reuses_factors() {
        let mat_a = DMatrix::from_row_slice(3, 3, &[3.0, 0.5, 0.1, 0.2, 4.0, 0.3, 0.1, 0.4, 5.0]);
        let mut lu = Doolittle::new_dynamic(3);
        lu.setup(&mat_a).unwrap();

        for b in [
            DVector::from_vec(vec![1.0, 0.0, 0.0]),
            DVector::from_vec(vec![0.0, -2.0, 7.5]),
        ] {
            let mut x = DVector::zeros(3);
            lu.solve(&b, &mut x);
            assert_relative_eq!(&mat_a * x, b, epsilon = 1e-14);
        }
    }
}
