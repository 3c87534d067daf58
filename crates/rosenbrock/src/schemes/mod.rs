//! Single step attempts of the embedded Rosenbrock schemes.
//!
//! A scheme only advances `(t, y)` by a given `h` and reports a local error estimate; step size
//! control and output live in the driver.

use nalgebra::DVector;

use crate::{workspace::Workspace, Method, Rhs};

mod mrt;
mod ros34prw;
mod ros3prw;

pub(crate) use mrt::Mrt;
pub(crate) use ros34prw::Ros34prw;
pub(crate) use ros3prw::Ros3prw;

pub(crate) trait Scheme {
    const METHOD: Method;

    /// Allocates the stage buffers for a system of size `dim`.
    fn new(dim: usize) -> Self;

    /// Attempts a step of size `h` from `(t, y)`, leaving the candidate in `ws.y_new` and the
    /// error estimate in `ws.y_err`.
    ///
    /// The Jacobian is evaluated by perturbing `y` in place, so `y` may differ from its input in
    /// the last bits afterwards.
    fn attempt<F: Rhs + ?Sized>(
        &mut self,
        rhs: &F,
        t: f64,
        h: f64,
        y: &mut DVector<f64>,
        ws: &mut Workspace,
    ) -> Result<(), linear::Error>;
}

#[cfg(test)]
pub(crate) mod tests {
    use nalgebra::DVector;

    use super::*;
    use crate::norm::NormScaledMax;

    /// `y' = -2·y`
    pub fn decay(_t: f64, y: &DVector<f64>, out: &mut DVector<f64>) {
        out[0] = -2.0 * y[0];
    }

    /// Runs one step and returns `(y_new, y_err)`.
    pub fn one_step<S: Scheme>(h: f64, y0: f64) -> (f64, f64) {
        let mut scheme = S::new(1);
        let mut ws = Workspace::new(1);
        let mut y = DVector::from_element(1, y0);
        scheme.attempt(&decay, 0.0, h, &mut y, &mut ws).unwrap();
        (ws.y_new[0], ws.y_err[0])
    }

    /// Local error of a step of size `h` against the exact `exp(-2h)` step.
    pub fn local_error<S: Scheme>(h: f64) -> f64 {
        let (y_new, _) = one_step::<S>(h, 1.0);
        (y_new - (-2.0 * h).exp()).abs()
    }

    /// Halving `h` shrinks the local error by at least `2^(order + 1)` up to `slack`.
    pub fn check_local_order<S: Scheme>(order: i32, slack: f64) {
        let e1 = local_error::<S>(0.02);
        let e2 = local_error::<S>(0.01);
        let rate = e1 / e2;
        assert!(
            rate > 2f64.powi(order + 1) * slack,
            "{}: local error ratio {rate} too small for order {order}",
            S::METHOD
        );
    }

    /// The embedded estimate is nonzero and shrinks with the step size.
    pub fn check_error_estimate<S: Scheme>() {
        let scale = DVector::from_element(1, 1.0);
        let estimates: Vec<f64> = [0.1, 0.05, 0.01]
            .into_iter()
            .map(|h| DVector::from_element(1, one_step::<S>(h, 1.0).1).norm_scaled_max(&scale))
            .collect();
        assert!(estimates[2] > 0.0, "{}: zero error estimate", S::METHOD);
        assert!(
            estimates.windows(2).all(|w| w[0] > w[1]),
            "{}: estimates {estimates:?} do not shrink with h",
            S::METHOD
        );
    }

    /// A system without any dynamics stays put exactly.
    pub fn check_zero_rhs<S: Scheme>(dim: usize) {
        let zero = |_t: f64, _y: &DVector<f64>, out: &mut DVector<f64>| out.fill(0.0);
        let mut scheme = S::new(dim);
        let mut ws = Workspace::new(dim);
        let y0 = DVector::from_fn(dim, |i, _| i as f64 - 1.5);
        let mut y = y0.clone();
        scheme.attempt(&zero, 0.0, 0.1, &mut y, &mut ws).unwrap();
        assert_eq!(ws.y_new, y0);
        assert!(ws.y_err.iter().all(|e| *e == 0.0));
    }
}
