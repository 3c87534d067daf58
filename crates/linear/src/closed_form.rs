use nalgebra::{Dim, Matrix, RealField, Scalar, Storage, StorageMut, U1};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::{traits::check_square, Error, LSolver, LSolverType, CLOSED_FORM_MAX_DIM};

/// Direct solution of 1x1 and 2x2 systems: `x = b / a` and Cramer's rule.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct ClosedForm<T> {
    dim: usize,
    /// row-major entries a00, a01, a10, a11
    a: [T; 4],
    det: T,
}

impl<T: RealField + Copy> ClosedForm<T> {
    /// # Panics
    /// If `dim` is not 1 or 2.
    pub fn new(dim: usize) -> Self {
        assert!(
            (1..=CLOSED_FORM_MAX_DIM).contains(&dim),
            "ClosedForm handles only 1x1 and 2x2 systems"
        );
        ClosedForm {
            dim,
            a: [T::zero(); 4],
            det: T::zero(),
        }
    }

    pub fn try_new(dim: usize) -> Result<Self, Error> {
        if (1..=CLOSED_FORM_MAX_DIM).contains(&dim) {
            Ok(Self::new(dim))
        } else {
            Err(Error::UnsupportedDimension { dim })
        }
    }
}

impl<T, D> LSolver<T, D> for ClosedForm<T>
where
    T: Scalar + RealField + Copy,
    D: Dim,
{
    fn get_type(&self) -> LSolverType {
        LSolverType::ClosedForm
    }

    fn dim(&self) -> usize {
        self.dim
    }

    fn setup<S>(&mut self, mat_a: &Matrix<T, D, D, S>) -> Result<(), Error>
    where
        S: Storage<T, D, D>,
    {
        check_square(mat_a, self.dim)?;

        if self.dim == 1 {
            self.a[0] = mat_a[(0, 0)];
            self.det = self.a[0];
        } else {
            self.a = [mat_a[(0, 0)], mat_a[(0, 1)], mat_a[(1, 0)], mat_a[(1, 1)]];
            self.det = self.a[0] * self.a[3] - self.a[1] * self.a[2];
        }

        if self.det == T::zero() {
            return Err(Error::SingularMatrix { dim: self.dim });
        }
        Ok(())
    }

    fn solve<SB, SX>(&self, b: &Matrix<T, D, U1, SB>, x: &mut Matrix<T, D, U1, SX>)
    where
        SB: Storage<T, D>,
        SX: StorageMut<T, D>,
    {
        let [a00, a01, a10, a11] = self.a;

        if self.dim == 1 {
            x[0] = b[0] / a00;
            return;
        }

        x[0] = (b[0] * a11 - b[1] * a01) / self.det;
        x[1] = (a00 * b[1] - a10 * b[0]) / self.det;
    }
}
