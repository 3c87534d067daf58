use nalgebra::{Dim, Matrix, Scalar, Storage, U1};
use num_traits::Float;

/// Scaled max-norm `max_i |x_i / s_i|` used by the step size controller.
pub trait NormScaledMax<T, R: Dim, SA> {
    /// Returns NaN as soon as one ratio is NaN, so a poisoned error estimate can never pass as
    /// small.
    fn norm_scaled_max<SB>(&self, scale: &Matrix<T, R, U1, SB>) -> T
    where
        SB: Storage<T, R, U1>;
}

impl<T, R: Dim, SA> NormScaledMax<T, R, SA> for Matrix<T, R, U1, SA>
where
    T: Scalar + Float,
    SA: Storage<T, R, U1>,
{
    fn norm_scaled_max<SB>(&self, scale: &Matrix<T, R, U1, SB>) -> T
    where
        SB: Storage<T, R, U1>,
    {
        assert_eq!(self.nrows(), scale.nrows());

        let mut max = T::zero();
        for (x, s) in self.iter().zip(scale.iter()) {
            let ratio = (*x / *s).abs();
            if ratio.is_nan() {
                return ratio;
            }
            if ratio > max {
                max = ratio;
            }
        }
        max
    }
}
