use nalgebra::{
    allocator::Allocator, DefaultAllocator, Dim, Dyn, Matrix, RealField, Scalar, Storage,
    StorageMut, U1,
};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::{ClosedForm, Doolittle, Error, LSolver, LSolverType, CLOSED_FORM_MAX_DIM};

/// Dense solver that uses the closed form for systems of size 1 and 2 and LU factorization for
/// anything larger.
///
/// The choice is made once, at construction, and is a plain tagged branch at each call.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(bound(
        serialize = "T: Serialize, Doolittle<T, D>: Serialize",
        deserialize = "T: Deserialize<'de>, Doolittle<T, D>: Deserialize<'de>"
    ))
)]
#[derive(Clone, Debug)]
pub enum Dense<T, D>
where
    T: Scalar,
    D: Dim,
    DefaultAllocator: Allocator<T, D, D>,
{
    ClosedForm(ClosedForm<T>),
    Lu(Doolittle<T, D>),
}

impl<T> Dense<T, Dyn>
where
    T: Scalar + RealField + Copy,
{
    pub fn new_dynamic(dim: usize) -> Self {
        if dim <= CLOSED_FORM_MAX_DIM {
            Dense::ClosedForm(ClosedForm::new(dim))
        } else {
            Dense::Lu(Doolittle::new_dynamic(dim))
        }
    }
}

impl<T, D> LSolver<T, D> for Dense<T, D>
where
    T: Scalar + RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<T, D, D>,
{
    fn get_type(&self) -> LSolverType {
        match self {
            Dense::ClosedForm(_) => LSolverType::ClosedForm,
            Dense::Lu(_) => LSolverType::Lu,
        }
    }

    fn dim(&self) -> usize {
        match self {
            Dense::ClosedForm(cf) => LSolver::<T, D>::dim(cf),
            Dense::Lu(lu) => lu.dim(),
        }
    }

    fn setup<S>(&mut self, mat_a: &Matrix<T, D, D, S>) -> Result<(), Error>
    where
        S: Storage<T, D, D>,
    {
        match self {
            Dense::ClosedForm(cf) => cf.setup(mat_a),
            Dense::Lu(lu) => lu.setup(mat_a),
        }
    }

    fn solve<SB, SX>(&self, b: &Matrix<T, D, U1, SB>, x: &mut Matrix<T, D, U1, SX>)
    where
        SB: Storage<T, D>,
        SX: StorageMut<T, D>,
    {
        match self {
            Dense::ClosedForm(cf) => cf.solve(b, x),
            Dense::Lu(lu) => lu.solve(b, x),
        }
    }
}
