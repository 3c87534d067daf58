use nalgebra::DVector;

use super::Scheme;
use crate::{workspace::Workspace, Method, Rhs};

// Tableau of ROS34PRw, Rang (2015), Table 3
const GAMMA: f64 = 0.435866521508459;
const GAMMA_21: f64 = -1.3075995645253771;
const GAMMA_21_SCALED: f64 = GAMMA_21 / GAMMA;
const GAMMA_2: f64 = GAMMA_21 + GAMMA;
const GAMMA_31: f64 = -0.7098857586097217;
const GAMMA_31_SCALED: f64 = GAMMA_31 / GAMMA;
const GAMMA_32: f64 = -0.55996735960277766;
const GAMMA_32_SCALED: f64 = GAMMA_32 / GAMMA;
const GAMMA_3: f64 = GAMMA_31 + GAMMA_32 + GAMMA;
const GAMMA_41: f64 = -0.15550856807552085;
const GAMMA_41_SCALED: f64 = GAMMA_41 / GAMMA;
const GAMMA_42: f64 = -0.95388516575112225;
const GAMMA_42_SCALED: f64 = GAMMA_42 / GAMMA;
const GAMMA_43: f64 = 0.67352721231818413;
const GAMMA_43_SCALED: f64 = GAMMA_43 / GAMMA;
const GAMMA_4: f64 = GAMMA_41 + GAMMA_42 + GAMMA_43 + GAMMA;

const ALPHA_21: f64 = 1.3075995645253771;
const ALPHA_2: f64 = ALPHA_21;
// α31 = α32 = α41 = α42 = 1/2, α43 = 0: stages 3 and 4 share the point
// `(t + h, y + h/2·(k1 + k2))`.

const B_1: f64 = 0.34449143192447917;
const B_2: f64 = -0.45388516575112231;
const B_3: f64 = 0.67352721231818413;
const B_4: f64 = 0.435866521508459;
const B_HAT_1: f64 = 0.5;
const B_HAT_2: f64 = -0.25738812086522078;
const B_HAT_3: f64 = 0.43542008724775044;
const B_HAT_4: f64 = 0.32196803361747034;
const R_1: f64 = B_1 - B_HAT_1;
const R_2: f64 = B_2 - B_HAT_2;
const R_3: f64 = B_3 - B_HAT_3;
const R_4: f64 = B_4 - B_HAT_4;

/// 4 stage Rosenbrock-W method with an embedded solution of one order less.
pub(crate) struct Ros34prw {
    k1: DVector<f64>,
    k2: DVector<f64>,
    k3: DVector<f64>,
    k4: DVector<f64>,
    /// `h·∂f/∂t`
    ht: DVector<f64>,
    f_buf: DVector<f64>,
    k_buf: DVector<f64>,
}

impl Scheme for Ros34prw {
    const METHOD: Method = Method::Ros34prw;

    fn new(dim: usize) -> Self {
        Self {
            k1: DVector::zeros(dim),
            k2: DVector::zeros(dim),
            k3: DVector::zeros(dim),
            k4: DVector::zeros(dim),
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

        // F3 = F4 = f(t + h, y + h/2·(k1 + k2)), kept in f_buf for stage 4
        for i in 0..dim {
            self.k_buf[i] = y[i] + h * 0.5 * (self.k1[i] + self.k2[i]);
        }
        rhs.rhs(t + h, &self.k_buf, &mut self.f_buf);

        // k3 = W⁻¹·(F3 + kBuf + γ3·HT) - kBuf
        for i in 0..dim {
            self.k_buf[i] = GAMMA_31_SCALED * self.k1[i] + GAMMA_32_SCALED * self.k2[i];
        }
        for i in 0..dim {
            ws.b[i] = self.f_buf[i] + self.k_buf[i] + GAMMA_3 * self.ht[i];
        }
        ws.solve(&mut self.k3);
        self.k3 -= &self.k_buf;

        // k4 = W⁻¹·(F4 + kBuf + γ4·HT) - kBuf
        for i in 0..dim {
            self.k_buf[i] = GAMMA_41_SCALED * self.k1[i]
                + GAMMA_42_SCALED * self.k2[i]
                + GAMMA_43_SCALED * self.k3[i];
        }
        for i in 0..dim {
            ws.b[i] = self.f_buf[i] + self.k_buf[i] + GAMMA_4 * self.ht[i];
        }
        ws.solve(&mut self.k4);
        self.k4 -= &self.k_buf;

        for i in 0..dim {
            ws.y_new[i] = y[i]
                + h * (B_1 * self.k1[i] + B_2 * self.k2[i] + B_3 * self.k3[i] + B_4 * self.k4[i]);
            ws.y_err[i] =
                h * (R_1 * self.k1[i] + R_2 * self.k2[i] + R_3 * self.k3[i] + R_4 * self.k4[i]);
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
        assert_relative_eq!(B_1 + B_2 + B_3 + B_4, 1.0, epsilon = 1e-15);
        assert_relative_eq!(B_HAT_1 + B_HAT_2 + B_HAT_3 + B_HAT_4, 1.0, epsilon = 1e-15);
        assert_relative_eq!(R_1 + R_2 + R_3 + R_4, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_order() {
        check_local_order::<Ros34prw>(3, 0.75);
        check_error_estimate::<Ros34prw>();
    }

    #[test]
    fn test_zero_rhs() {
        for dim in 1..=3 {
            check_zero_rhs::<Ros34prw>(dim);
        }
    }

    #[test]
    fn test_stage_reuse() {
        // Jacobian and ∂f/∂t take two calls each for a scalar problem, then one call per
        // distinct stage point since stages 3 and 4 share theirs
        use std::cell::Cell;
        let calls = Cell::new(0);
        let rhs = |_t: f64, y: &DVector<f64>, out: &mut DVector<f64>| {
            calls.set(calls.get() + 1);
            out[0] = -y[0];
        };
        let mut scheme = Ros34prw::new(1);
        let mut ws = Workspace::new(1);
        let mut y = DVector::from_element(1, 1.0);
        scheme.attempt(&rhs, 0.0, 0.1, &mut y, &mut ws).unwrap();
        assert_eq!(calls.get(), 2 + 2 + 3);
        assert_relative_eq!(ws.y_new[0], (-0.1f64).exp(), epsilon = 1e-4);
    }
}
