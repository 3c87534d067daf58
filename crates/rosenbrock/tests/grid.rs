//! Shape of the tabulated output.

use rosenbrock::{solve_with, Method};

#[test]
fn test_grid_coverage() {
    for corr in sample_problems::corr_problems() {
        let problem = &corr.problem;
        let expected_rows = ((problem.arg.finish - problem.arg.start) / problem.arg.step).trunc()
            as usize
            + 1;

        for method in Method::ALL {
            let solution = solve_with(problem, method, &mut ()).unwrap();
            let arg = solution.arg();

            assert_eq!(solution.nrows(), expected_rows, "{method} on {}", problem.name);
            assert_eq!(solution.dim(), problem.dim());
            assert_eq!(arg[0], problem.arg.start);
            assert_eq!(arg[arg.len() - 1], problem.arg.finish);
            assert!(
                arg.windows(2).all(|w| w[0] < w[1]),
                "{method} on {}: argument not increasing",
                problem.name
            );
            for (i, t) in arg.iter().enumerate().take(arg.len() - 1) {
                let t_grid = problem.arg.start + i as f64 * problem.arg.step;
                assert!((t - t_grid).abs() < 1e-9, "{t} vs {t_grid}");
            }
            for i in 0..problem.dim() {
                assert_eq!(solution.component(i)[0], problem.initial[i]);
                assert!(solution.component(i).iter().all(|y| y.is_finite()));
            }

            let mut names = vec![problem.arg.name.clone()];
            names.extend(problem.solution_names.iter().cloned());
            assert_eq!(solution.names(), names.as_slice());
        }
    }
}

#[test]
fn test_row_counts() {
    assert_eq!(sample_problems::non_stiff_1d().problem.arg.row_count(), 401);
    assert_eq!(sample_problems::non_stiff_3d().problem.arg.row_count(), 2001);
    assert_eq!(sample_problems::robertson().arg.row_count(), 40001);
}

#[test]
fn test_into_columns() {
    let corr = sample_problems::stiff_2d();
    let solution = rosenbrock::solve(&corr.problem).unwrap();
    let copy = solution.clone();
    let columns = solution.into_columns();

    assert_eq!(columns.len(), 3);
    assert_eq!(columns[0], copy.arg());
    assert_eq!(columns[1], copy.column("x").unwrap());
    assert_eq!(columns[2], copy.column("y").unwrap());
}

#[test]
fn test_determinism() {
    for corr in sample_problems::corr_problems() {
        for method in Method::ALL {
            let a = solve_with(&corr.problem, method, &mut ()).unwrap();
            let b = solve_with(&corr.problem, method, &mut ()).unwrap();
            assert!(
                a.data()
                    .iter()
                    .zip(b.data().iter())
                    .all(|(x, y)| x.to_bits() == y.to_bits()),
                "{method} on {} is not reproducible",
                corr.problem.name
            );
        }
    }
}
