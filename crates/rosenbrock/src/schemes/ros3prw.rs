use nalgebra::DVector;

use super::Scheme;
use crate::{workspace::Workspace, Method, Rhs};

// Tableau of ROS3PRw, Rang (2015), Table 2
const GAMMA: f64 = 0.78867513459481287;
const GAMMA_21: f64 = -2.3660254037844388;
const GAMMA_21_SCALED: f64 = GAMMA_21 / GAMMA;
const GAMMA_2: f64 = GAMMA_21 + GAMMA;
const GAMMA_31: f64 = -0.86791218280355165;
const GAMMA_31_SCALED: f64 = GAMMA_31 / GAMMA;
const GAMMA_32: f64 = -0.87306695894642317;
const GAMMA_32_SCALED: f64 = GAMMA_32 / GAMMA;
const GAMMA_3: f64 = GAMMA_31 + GAMMA_32 + GAMMA;

const ALPHA_21: f64 = 2.3660254037844388;
const ALPHA_2: f64 = ALPHA_21;
const ALPHA_31: f64 = 0.5;
const ALPHA_32: f64 = 0.76794919243112270;
const ALPHA_3: f64 = ALPHA_31 + ALPHA_32;

const B_1: f64 = 0.50544867840851759;
const B_2: f64 = -0.11571687603637559;
const B_3: f64 = 0.610268197627858;
const B_HAT_1: f64 = 0.28973180237214197;
const B_HAT_2: f64 = 0.10000000000000001;
const B_HAT_3: f64 = 0.610268197627858;
const R_1: f64 = B_1 - B_HAT_1;
const R_2: f64 = B_2 - B_HAT_2;
const R_3: f64 = B_3 - B_HAT_3;

/// 3 stage Rosenbrock-W method of order 3 with an embedded 2nd order solution.
pub(crate) struct Ros3prw {
    k1: DVector<f64>,
    k2: DVector<f64>,
    k3: DVector<f64>,
    /// `h·∂f/∂t`
    ht: DVector<f64>,
    f_buf: DVector<f64>,
    k_buf: DVector<f64>,
}

impl Scheme for Ros3prw {
    const METHOD: Method = Method::Ros3prw;

    fn new(dim: usize) -> Self {
        Self {
            k1: DVector::zeros(dim),
            k2: DVector::zeros(dim),
            k3: DVector::zeros(dim),
            ht: DVector::zeros(dim),
            f_buf: DVector::zeros(dim),
            k_buf: DVector::zeros(dim),
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

        ws.jacobian(rhs, t, y);
        ws.time_derivative(rhs, t, y, &mut self.ht);
        ws.setup(h * GAMMA)?;
        self.ht *= h;

        // k1 = W⁻¹·(F1 + γ·HT)
        rhs.rhs(t, y, &mut self.f_buf);
        for i in 0..dim {
            ws.b[i] = self.f_buf[i] + GAMMA * self.ht[i];
        }
        ws.solve(&mut self.k1);

        // F2 = f(t + α2·h, y + α21·h·k1)
        for i in 0..dim {
            self.k_buf[i] = y[i] + ALPHA_21 * h * self.k1[i];
        }
        rhs.rhs(t + ALPHA_2 * h, &self.k_buf, &mut self.f_buf);

        // k2 = W⁻¹·(F2 + kBuf + γ2·HT) - kBuf
        for i in 0..dim {
            self.k_buf[i] = GAMMA_21_SCALED * self.k1[i];
        }
        for i in 0..dim {
            ws.b[i] = self.f_buf[i] + self.k_buf[i] + GAMMA_2 * self.ht[i];
        }
        ws.solve(&mut self.k2);
        self.k2 -= &self.k_buf;

        // F3 = f(t + α3·h, y + h·(α31·k1 + α32·k2))
        for i in 0..dim {
            self.k_buf[i] = y[i] + h * (ALPHA_31 * self.k1[i] + ALPHA_32 * self.k2[i]);
        }
        rhs.rhs(t + ALPHA_3 * h, &self.k_buf, &mut self.f_buf);

        // k3 = W⁻¹·(F3 + kBuf + γ3·HT) - kBuf
        for i in 0..dim {
            self.k_buf[i] = GAMMA_31_SCALED * self.k1[i] + GAMMA_32_SCALED * self.k2[i];
        }
        for i in 0..dim {
            ws.b[i] = self.f_buf[i] + self.k_buf[i] + GAMMA_3 * self.ht[i];
        }
        ws.solve(&mut self.k3);
        self.k3 -= &self.k_buf;

        for i in 0..dim {
            ws.y_new[i] = y[i] + h * (B_1 * self.k1[i] + B_2 * self.k2[i] + B_3 * self.k3[i]);
            ws.y_err[i] = h * (R_1 * self.k1[i] + R_2 * self.k2[i] + R_3 * self.k3[i]);
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
    fn test_tableau() {
        // both solutions are consistent
        assert_relative_eq!(B_1 + B_2 + B_3, 1.0, epsilon = 1e-15);
        assert_relative_eq!(B_HAT_1 + B_HAT_2 + B_HAT_3, 1.0, epsilon = 1e-15);
        assert_relative_eq!(R_1 + R_2 + R_3, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_order() {
        check_local_order::<Ros3prw>(3, 0.75);
        check_error_estimate::<Ros3prw>();
    }

    #[test]
    fn test_zero_rhs() {
        for dim in 1..=3 {
            check_zero_rhs::<Ros3prw>(dim);
        }
    }
}
