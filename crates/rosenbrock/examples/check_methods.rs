use std::time::Instant;

use prettytable::{row, table, Table};
use rosenbrock::{Method, Solution};
use sample_problems::{corr_problems, max_rel_deviation, perf_problems};

fn stats_cells(solution: &Solution) -> (usize, usize, usize) {
    let stats = solution.statistics();
    (stats.n_accepted, stats.n_rejected, stats.n_rhs_evals)
}

fn main() {
    tracing_subscriber::fmt::init();

    let th = table!(["Rosenbrock methods: accuracy on problems with exact solutions, timing on stiff test problems"]);
    th.printstd();

    let mut corr_table = Table::new();
    corr_table.set_titles(row!["problem", "method", "rel. deviation", "accepted", "rejected", "f evals"]);
    for corr in corr_problems() {
        for method in Method::ALL {
            match rosenbrock::solve_with(&corr.problem, method, &mut ()) {
                Ok(solution) => {
                    let (accepted, rejected, evals) = stats_cells(&solution);
                    corr_table.add_row(row![
                        corr.problem.name,
                        method,
                        r->format!("{:.3e}", max_rel_deviation(&solution, corr.exact)),
                        r->accepted,
                        r->rejected,
                        r->evals
                    ]);
                }
                Err(err) => {
                    corr_table.add_row(row![corr.problem.name, method, H4->err]);
                }
            }
        }
    }
    corr_table.printstd();

    let mut perf_table = Table::new();
    perf_table.set_titles(row!["problem", "method", "time [ms]", "last state", "accepted", "rejected", "f evals"]);
    for problem in perf_problems() {
        for method in Method::ALL {
            let started = Instant::now();
            let result = rosenbrock::solve_with(&problem, method, &mut ());
            let elapsed = started.elapsed().as_secs_f64() * 1e3;
            match result {
                Ok(solution) => {
                    let (accepted, rejected, evals) = stats_cells(&solution);
                    let last = solution
                        .last_state()
                        .iter()
                        .map(|y| format!("{y:.4e}"))
                        .collect::<Vec<_>>()
                        .join(" ");
                    perf_table.add_row(row![
                        problem.name,
                        method,
                        r->format!("{elapsed:.1}"),
                        last,
                        r->accepted,
                        r->rejected,
                        r->evals
                    ]);
                }
                Err(err) => {
                    perf_table.add_row(row![problem.name, method, r->format!("{elapsed:.1}"), H4->err]);
                }
            }
        }
    }
    perf_table.printstd();
}
