use nalgebra::{DMatrix, DVector};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::Argument;

/// Counters
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Statistics {
    /// number of outer iterations, one per accepted step
    pub n_iterations: usize,
    /// number of accepted steps
    pub n_accepted: usize,
    /// number of rejected step attempts
    pub n_rejected: usize,
    /// number of right-hand side evaluations
    pub n_rhs_evals: usize,
    /// number of iteration matrix factorizations
    pub n_factorizations: usize,
    /// largest `errmax / tolerance` of an accepted step
    pub max_error_ratio: f64,
}

/// Tabulated solution on the uniform output grid.
///
/// Column 0 holds the argument, column `i + 1` holds component `i`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Solution {
    names: Vec<String>,
    data: DMatrix<f64>,
    statistics: Statistics,
}

impl Solution {
    pub(crate) fn new(names: Vec<String>, data: DMatrix<f64>, statistics: Statistics) -> Self {
        debug_assert_eq!(names.len(), data.ncols());
        Self {
            names,
            data,
            statistics,
        }
    }

    /// Column names, the argument name first
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of solution components
    pub fn dim(&self) -> usize {
        self.data.ncols() - 1
    }

    pub fn arg(&self) -> &[f64] {
        self.col(0)
    }

    /// Values of component `i` on the output grid.
    ///
    /// # Panics
    /// If `i >= self.dim()`.
    pub fn component(&self, i: usize) -> &[f64] {
        assert!(i < self.dim(), "component {i} out of range");
        self.col(i + 1)
    }

    /// Looks a column up by name, the argument included.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|j| self.col(j))
    }

    pub fn data(&self) -> &DMatrix<f64> {
        &self.data
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// State at the end of the range
    pub fn last_state(&self) -> DVector<f64> {
        let last = self.nrows() - 1;
        DVector::from_iterator(self.dim(), self.data.row(last).iter().skip(1).copied())
    }

    /// One buffer per column, the argument first.
    pub fn into_columns(self) -> Vec<Vec<f64>> {
        self.data
            .column_iter()
            .map(|col| col.iter().copied().collect())
            .collect()
    }

    fn col(&self, j: usize) -> &[f64] {
        let rows = self.nrows();
        &self.data.as_slice()[j * rows..(j + 1) * rows]
    }
}

/// Fills the output grid by linear interpolation between accepted steps.
#[derive(Debug)]
pub(crate) struct DenseOutput {
    data: DMatrix<f64>,
    /// next row to fill
    index: usize,
    /// argument of the next row
    t_out: f64,
    step: f64,
}

impl DenseOutput {
    /// Sets row 0 to `(start, initial)`.
    pub fn new(arg: &Argument, initial: &DVector<f64>) -> Self {
        let mut data = DMatrix::zeros(arg.row_count(), initial.len() + 1);
        data[(0, 0)] = arg.start;
        for (j, y0) in initial.iter().enumerate() {
            data[(0, j + 1)] = *y0;
        }

        Self {
            data,
            index: 1,
            t_out: arg.start + arg.step,
            step: arg.step,
        }
    }

    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    /// Fills every pending row with `t_out < t` from the accepted step `(t_prev, y_prev) -> (t, y)`.
    ///
    /// The last row is reserved for [`DenseOutput::finish`].
    pub fn interpolate(&mut self, t_prev: f64, y_prev: &DVector<f64>, t: f64, y: &DVector<f64>) {
        let last = self.data.nrows() - 1;

        while self.t_out < t && self.index < last {
            let c_left = (t - self.t_out) / (t - t_prev);
            let c_right = 1.0 - c_left;

            self.data[(self.index, 0)] = self.t_out;
            for j in 0..y.len() {
                self.data[(self.index, j + 1)] = c_right * y[j] + c_left * y_prev[j];
            }

            self.t_out += self.step;
            self.index += 1;
        }
    }

    /// Sets the last row to `(finish, y)` and hands the table over.
    pub fn finish(mut self, finish: f64, y: &DVector<f64>) -> DMatrix<f64> {
        let last = self.data.nrows() - 1;
        self.data[(last, 0)] = finish;
        for (j, yj) in y.iter().enumerate() {
            self.data[(last, j + 1)] = *yj;
        }
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution() -> Solution {
        let data = DMatrix::from_row_slice(3, 3, &[0.0, 1.0, 10.0, 0.5, 2.0, 20.0, 1.0, 3.0, 30.0]);
        Solution::new(
            vec!["t".into(), "x".into(), "y".into()],
            data,
            Statistics::default(),
        )
    }

    #[test]
    fn test_accessors() {
        let s = solution();
        assert_eq!(s.nrows(), 3);
        assert_eq!(s.dim(), 2);
        assert_eq!(s.arg(), &[0.0, 0.5, 1.0]);
        assert_eq!(s.component(1), &[10.0, 20.0, 30.0]);
        assert_eq!(s.column("x"), Some(&[1.0, 2.0, 3.0][..]));
        assert_eq!(s.column("t"), Some(s.arg()));
        assert_eq!(s.column("z"), None);
        assert_eq!(s.last_state().as_slice(), &[3.0, 30.0]);
        assert_eq!(
            s.into_columns(),
            vec![vec![0.0, 0.5, 1.0], vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0]]
        );
    }

    #[test]
    fn test_dense_output() {
        let arg = Argument::new("t", 0.0, 1.0, 0.25);
        let mut out = DenseOutput::new(&arg, &DVector::from_vec(vec![0.0, 1.0]));
        assert_eq!(out.nrows(), 5);

        // One accepted step from 0 to 0.6 covers the rows at 0.25 and 0.5
        let y_prev = DVector::from_vec(vec![0.0, 1.0]);
        let y = DVector::from_vec(vec![6.0, 1.0]);
        out.interpolate(0.0, &y_prev, 0.6, &y);

        // A step that overshoots the grid never touches the reserved last row
        let y_prev = y;
        let y = DVector::from_vec(vec![12.0, -1.0]);
        out.interpolate(0.6, &y_prev, 1.2, &y);

        let data = out.finish(1.0, &DVector::from_vec(vec![10.0, 0.0]));
        let expected = DMatrix::from_row_slice(
            5,
            3,
            &[
                0.0, 0.0, 1.0, //
                0.25, 2.5, 1.0, //
                0.5, 5.0, 1.0, //
                0.75, 7.5, 0.5, //
                1.0, 10.0, 0.0,
            ],
        );
        approx::assert_relative_eq!(data, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_dense_output_bounded() {
        let arg = Argument::new("t", 0.0, 2.0, 0.1);
        let mut out = DenseOutput::new(&arg, &DVector::from_vec(vec![1.0]));

        // uneven steps of a decaying component
        let steps = [0.0, 0.13, 0.31, 0.37, 0.9, 1.55, 2.0];
        let values: Vec<f64> = steps.iter().map(|t: &f64| (-t).exp()).collect();
        for k in 1..steps.len() {
            out.interpolate(
                steps[k - 1],
                &DVector::from_element(1, values[k - 1]),
                steps[k],
                &DVector::from_element(1, values[k]),
            );
        }
        let data = out.finish(2.0, &DVector::from_element(1, values[steps.len() - 1]));
        assert_eq!(data.nrows(), 21);

        for row in 1..data.nrows() - 1 {
            let t = data[(row, 0)];
            let k = steps.iter().position(|s| *s > t).unwrap();
            let v = data[(row, 1)];
            assert!(v <= values[k - 1] && v >= values[k], "row {row} at t={t}: {v}");
        }
    }
}
