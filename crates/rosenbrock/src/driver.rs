//! Adaptive step size loop shared by all schemes.

use log::{debug, trace, warn};
use nalgebra::DVector;

use crate::{
    constants::*,
    norm::NormScaledMax,
    schemes::Scheme,
    solution::{DenseOutput, Statistics},
    traits::Counted,
    workspace::Workspace,
    Callback, Error, OdeProblem, Rhs, Solution,
};

/// Integrates `problem` over its whole range with scheme `S` and tabulates the solution on the
/// output grid.
pub(crate) fn integrate<S, F, C>(problem: &OdeProblem<F>, callback: &mut C) -> Result<Solution, Error>
where
    S: Scheme,
    F: Rhs,
    C: Callback + ?Sized,
{
    problem.validate()?;

    let method = S::METHOD;
    let rhs = Counted::new(&problem.rhs);
    let dim = problem.dim();
    let t1 = problem.arg.finish;
    let tolerance = problem.tolerance;

    let mut output = DenseOutput::new(&problem.arg, &problem.initial);
    let mut ws = Workspace::new(dim);
    let mut scheme = S::new(dim);
    let mut stats = Statistics::default();

    debug!(
        "{method} solving '{}': dim={dim}, t=[{}, {}], rows={}, tolerance={:.1e}",
        problem.name,
        problem.arg.start,
        t1,
        output.nrows(),
        tolerance
    );

    let mut t = problem.arg.start;
    let mut t_prev = t;
    let mut h = problem.arg.step;
    let mut y = problem.initial.clone();
    let mut y_prev = y.clone();
    let mut dydt = DVector::zeros(dim);
    let mut scale = DVector::zeros(dim);

    let mut last = false;
    while !last {
        rhs.rhs(t, &y, &mut dydt);
        stats.n_iterations += 1;
        callback.on_iteration_start(t)?;

        for i in 0..dim {
            scale[i] = y[i].abs() + h * dydt[i].abs() + TINY;
        }

        if t + h > t1 {
            h = t1 - t;
            last = true;
        }

        let h_next = loop {
            scheme
                .attempt(&rhs, t, h, &mut y, &mut ws)
                .map_err(|source| {
                    warn!("{method}: iteration matrix factorization failed at t={t:.5e}, h={h:.5e}");
                    Error::SingularIterationMatrix { t, source }
                })?;
            stats.n_factorizations += 1;

            let errmax = ws.y_err.norm_scaled_max(&scale) / tolerance;

            if errmax.is_nan() {
                warn!("{method}: error estimate is NaN at t={t:.5e}, h={h:.5e}");
                return Err(Error::NotFinite { method, t });
            }

            if errmax > 1.0 {
                stats.n_rejected += 1;
                let h_temp = SAFETY * h * errmax.powf(PSHRNK);
                h = h_temp.max(REDUCE_COEF * h);
                // the shorter step no longer reaches the end of the range
                last = false;
                trace!("    reject t={t:.5e} errmax={errmax:.3e} next h={h:.5e}");

                if t + h == t {
                    warn!("{method}: step size underflow at t={t:.5e}");
                    return Err(Error::MethodFails { method, t });
                }
            } else {
                let h_next = if errmax > ERR_CONTR {
                    SAFETY * h * errmax.powf(PSGROW)
                } else {
                    GROW_COEF * h
                };
                t += h;
                std::mem::swap(&mut y, &mut ws.y_new);

                stats.n_accepted += 1;
                stats.max_error_ratio = stats.max_error_ratio.max(errmax);
                trace!("    accept t={t:.5e} h={h:.5e} errmax={errmax:.3e} next h={h_next:.5e}");
                break h_next;
            }
        };

        output.interpolate(t_prev, &y_prev, t, &y);

        h = h_next;
        t_prev = t;
        y_prev.copy_from(&y);
    }

    callback.on_computations_completed()?;

    stats.n_rhs_evals = rhs.count();
    debug!("{method} solved '{}': {stats:?}", problem.name);

    let names = std::iter::once(problem.arg.name.clone())
        .chain(problem.solution_names.iter().cloned())
        .collect();
    Ok(Solution::new(names, output.finish(t1, &y), stats))
}
