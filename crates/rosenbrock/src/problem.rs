use std::fmt;

use nalgebra::DVector;

use crate::{
    constants::{MAX_ROWS, TOLERANCE_DEFAULT},
    Error, Rhs,
};

/// The independent variable: its name, the integration range and the output sampling step.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: String,
    pub start: f64,
    pub finish: f64,
    /// Output grid spacing, also the first integration step.
    pub step: f64,
}

impl Argument {
    pub fn new(name: impl Into<String>, start: f64, finish: f64, step: f64) -> Self {
        Self {
            name: name.into(),
            start,
            finish,
            step,
        }
    }

    /// Number of rows of the output grid, `⌊(finish - start) / step⌋ + 1`.
    ///
    /// Saturates at `usize::MAX` for grids too fine to count; [`OdeProblem::validate`] rejects
    /// anything above [`MAX_ROWS`].
    pub fn row_count(&self) -> usize {
        (((self.finish - self.start) / self.step).trunc() as usize).saturating_add(1)
    }
}

/// An initial value problem `dy/dt = f(t, y)`, `y(start) = initial`.
#[derive(Clone)]
pub struct OdeProblem<F> {
    pub name: String,
    pub arg: Argument,
    pub initial: DVector<f64>,
    pub rhs: F,
    /// Scaled error tolerance every accepted step has to meet.
    pub tolerance: f64,
    pub solution_names: Vec<String>,
}

impl<F: Rhs> OdeProblem<F> {
    pub fn new(name: impl Into<String>, arg: Argument, initial: DVector<f64>, rhs: F) -> Self {
        let solution_names = (1..=initial.len()).map(|i| format!("y{i}")).collect();
        Self {
            name: name.into(),
            arg,
            initial,
            rhs,
            tolerance: TOLERANCE_DEFAULT,
            solution_names,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_solution_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.solution_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Number of state components
    pub fn dim(&self) -> usize {
        self.initial.len()
    }

    /// Checks the problem definition before anything is allocated or evaluated.
    pub fn validate(&self) -> Result<(), Error> {
        let illegal = |msg: String| Err(Error::IllegalInput { msg });
        let arg = &self.arg;

        if self.dim() == 0 {
            return illegal(format!("problem '{}' has no state components", self.name));
        }
        for (what, value) in [
            ("start", arg.start),
            ("finish", arg.finish),
            ("step", arg.step),
            ("tolerance", self.tolerance),
        ] {
            if !value.is_finite() {
                return illegal(format!("{what} must be finite, got {value}"));
            }
        }
        if arg.finish <= arg.start {
            return illegal(format!(
                "finish ({}) must be greater than start ({})",
                arg.finish, arg.start
            ));
        }
        if arg.step <= 0.0 {
            return illegal(format!("step must be positive, got {}", arg.step));
        }
        if arg.step > arg.finish - arg.start {
            return illegal(format!(
                "step ({}) exceeds the range [{}, {}]",
                arg.step, arg.start, arg.finish
            ));
        }
        if arg.row_count() > MAX_ROWS {
            return illegal(format!(
                "step ({}) gives more than {MAX_ROWS} output rows over [{}, {}]",
                arg.step, arg.start, arg.finish
            ));
        }
        if self.tolerance <= 0.0 {
            return illegal(format!("tolerance must be positive, got {}", self.tolerance));
        }
        if let Some(i) = self.initial.iter().position(|y| !y.is_finite()) {
            return illegal(format!(
                "initial value of '{}' is not finite",
                self.solution_names.get(i).map_or("?", String::as_str)
            ));
        }
        if self.solution_names.len() != self.dim() {
            return illegal(format!(
                "{} solution names given for {} components",
                self.solution_names.len(),
                self.dim()
            ));
        }
        Ok(())
    }
}

impl<F> fmt::Debug for OdeProblem<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OdeProblem")
            .field("name", &self.name)
            .field("arg", &self.arg)
            .field("initial", &self.initial.as_slice())
            .field("tolerance", &self.tolerance)
            .field("solution_names", &self.solution_names)
            .finish_non_exhaustive()
    }
}
