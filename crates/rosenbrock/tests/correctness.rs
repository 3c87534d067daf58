//! Accuracy of every method on the problems with closed form solutions.
//!
//! Bounds are on the deviation relative to the largest magnitude of the exact solution and leave
//! roughly an order of magnitude of headroom over what each method actually achieves.

use rosenbrock::{solve_with, Method};
use sample_problems::{max_abs_deviation, max_rel_deviation, CorrProblem};

/// Relative bounds for MRT, ROS3PRw and ROS34PRw
fn check(corr: CorrProblem, bounds: [f64; 3]) {
    for (method, bound) in Method::ALL.into_iter().zip(bounds) {
        let solution = solve_with(&corr.problem, method, &mut ()).unwrap();
        let rel = max_rel_deviation(&solution, corr.exact);
        assert!(
            rel < bound,
            "{method} on {}: relative deviation {rel:.3e} exceeds {bound:.1e}",
            corr.problem.name
        );
        assert!(solution.statistics().max_error_ratio <= 1.0);
    }
}

#[test]
fn test_non_stiff_1d() {
    check(sample_problems::non_stiff_1d(), [1.5e-3, 5e-4, 5e-3]);
}

#[test]
fn test_non_stiff_1d_tight_tolerance() {
    // the absolute deviation follows the tolerance down below 1e-4
    let corr = sample_problems::non_stiff_1d();
    let problem = corr.problem.clone().with_tolerance(1e-10);
    for method in Method::ALL {
        let solution = solve_with(&problem, method, &mut ()).unwrap();
        let dev = max_abs_deviation(&solution, corr.exact);
        assert!(dev < 1e-4, "{method}: absolute deviation {dev:.3e}");
    }
}

#[test]
fn test_non_stiff_2d() {
    check(sample_problems::non_stiff_2d(), [1e-4, 1e-3, 1e-4]);
}

#[test]
fn test_non_stiff_3d() {
    check(sample_problems::non_stiff_3d(), [1e-4, 1e-4, 1e-4]);
}

#[test]
fn test_stiff_1d() {
    check(sample_problems::stiff_1d(), [1e-4, 1e-4, 1e-4]);

    let corr = sample_problems::stiff_1d();
    for method in Method::ALL {
        let solution = solve_with(&corr.problem, method, &mut ()).unwrap();
        let dev = max_abs_deviation(&solution, corr.exact);
        assert!(dev < 5e-4, "{method}: {dev:.3e}");
    }
}

#[test]
fn test_stiff_2d() {
    check(sample_problems::stiff_2d(), [5e-4, 5e-3, 5e-4]);
}

#[test]
fn test_stiff_3d() {
    check(sample_problems::stiff_3d(), [1e-4, 0.12, 1e-4]);
}

#[test]
fn test_endpoint() {
    // the last row is the final state at `finish`, not an interpolated value
    for corr in sample_problems::corr_problems() {
        let solution = rosenbrock::solve(&corr.problem).unwrap();
        let finish = corr.problem.arg.finish;
        assert_eq!(*solution.arg().last().unwrap(), finish);
        let exact = (corr.exact)(finish);
        let y = solution.last_state();
        let scale = exact.amax().max(corr.problem.initial.amax());
        assert!(
            (y - &exact).amax() / scale < 5e-3,
            "{}: {exact} vs {}",
            corr.problem.name,
            solution.last_state()
        );
    }
}
