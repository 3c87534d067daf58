use std::f64::consts::SQRT_2;

use nalgebra::DVector;

use super::Scheme;
use crate::{workspace::Workspace, Method, Rhs};

const D: f64 = 1.0 - SQRT_2 / 2.0;
const E32: f64 = 6.0 + SQRT_2;

/// Modified Rosenbrock triple: a 2nd order W-method with a 3rd order error estimate, both built
/// from one factorization of `W = I - h·d·J`.
pub(crate) struct Mrt {
    f0: DVector<f64>,
    f1: DVector<f64>,
    f2: DVector<f64>,
    k1: DVector<f64>,
    k2: DVector<f64>,
    k3: DVector<f64>,
    y_der: DVector<f64>,
    /// `h·d·∂f/∂t`
    hdt: DVector<f64>,
}

impl Scheme for Mrt {
    const METHOD: Method = Method::Mrt;

    fn new(dim: usize) -> Self {
        Self {
            f0: DVector::zeros(dim),
            f1: DVector::zeros(dim),
            f2: DVector::zeros(dim),
            k1: DVector::zeros(dim),
            k2: DVector::zeros(dim),
            k3: DVector::zeros(dim),
            y_der: DVector::zeros(dim),
            hdt: DVector::zeros(dim),
        }
    }

    fn attempt<F: Rhs + ?Sized>(
        &mut self,
        rhs: &F,
        t: f64,
        h: f64,
        y: &mut DVector<f64>,
        ws: &mut Workspace,
    ) -> Result<(), linear::Error> {
        let dim = y.len();

        ws.time_derivative(rhs, t, y, &mut self.hdt);
        let hd = h * D;
        self.hdt *= hd;

        rhs.rhs(t, y, &mut self.f0);

        ws.jacobian(rhs, t, y);
        ws.setup(hd)?;

        // W·k1 = f0 + hdT
        for i in 0..dim {
            ws.b[i] = self.f0[i] + self.hdt[i];
        }
        ws.solve(&mut self.k1);

        let h_half = 0.5 * h;
        for i in 0..dim {
            self.y_der[i] = y[i] + h_half * self.k1[i];
        }
        rhs.rhs(t + h_half, &self.y_der, &mut self.f1);

        // W·(k2 - k1) = f1 - k1
        for i in 0..dim {
            ws.b[i] = self.f1[i] - self.k1[i];
        }
        ws.solve(&mut self.k2);
        for i in 0..dim {
            self.k2[i] += self.k1[i];
        }

        for i in 0..dim {
            ws.y_new[i] = y[i] + h * self.k2[i];
        }
        rhs.rhs(t + h, &ws.y_new, &mut self.f2);

        // W·k3 = f2 - e32·(k2 - f1) - 2·(k1 - f0) + hdT
        for i in 0..dim {
            ws.b[i] = self.f2[i]
                - E32 * (self.k2[i] - self.f1[i])
                - 2.0 * (self.k1[i] - self.f0[i])
                + self.hdt[i];
        }
        ws.solve(&mut self.k3);

        let h_6 = h / 6.0;
        for i in 0..dim {
            ws.y_err[i] = (self.k1[i] - 2.0 * self.k2[i] + self.k3[i]) * h_6;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::super::tests::*;
    use super::*;

    #[test]
    fn test_constants() {
        assert_relative_eq!(D, 0.29289321881345254, max_relative = 1e-15);
        assert_relative_eq!(E32, 7.414213562373095, max_relative = 1e-15);
    }

    #[test]
    fn test_order() {
        check_local_order::<Mrt>(2, 0.75);
        check_error_estimate::<Mrt>();
    }

    #[test]
    fn test_zero_rhs() {
        for dim in 1..=3 {
            check_zero_rhs::<Mrt>(dim);
        }
    }

    #[test]
    fn test_first_stage() {
        // For y' = -2y the first stage solves (1 + 2hd)·k1 = -2·y0
        let h = 0.1;
        let mut scheme = Mrt::new(1);
        let mut ws = Workspace::new(1);
        let mut y = DVector::from_element(1, 1.0);
        scheme.attempt(&decay, 0.0, h, &mut y, &mut ws).unwrap();
        assert_relative_eq!(scheme.k1[0], -2.0 / (1.0 + 2.0 * h * D), max_relative = 1e-6);
        assert_relative_eq!(ws.y_new[0], (-2.0 * h).exp(), epsilon = 1e-2);
    }
}
