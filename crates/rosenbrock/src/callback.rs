//! Progress and cancellation hooks invoked by the driver.

use std::time::{Duration, Instant};

use thiserror::Error;

/// Returned by a [`Callback`] to stop the computation. The message ends up in
/// [`Error::Aborted`](crate::Error::Aborted).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{msg}")]
pub struct CallbackAction {
    msg: String,
}

impl CallbackAction {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }

    pub fn message(&self) -> &str {
        &self.msg
    }
}

/// Hook called by the solver loop.
pub trait Callback {
    /// Called once per outer iteration, after `f(t, y)` was evaluated at the current point.
    fn on_iteration_start(&mut self, t: f64) -> Result<(), CallbackAction>;

    /// Called once after the last step, before the solution is assembled.
    fn on_computations_completed(&mut self) -> Result<(), CallbackAction> {
        Ok(())
    }
}

impl Callback for () {
    fn on_iteration_start(&mut self, _t: f64) -> Result<(), CallbackAction> {
        Ok(())
    }
}

impl<F> Callback for F
where
    F: FnMut(f64) -> Result<(), CallbackAction>,
{
    fn on_iteration_start(&mut self, t: f64) -> Result<(), CallbackAction> {
        self(t)
    }
}

/// Aborts once the wall clock time since construction exceeds a limit.
#[derive(Clone, Debug)]
pub struct TimeLimit {
    max: Duration,
    started: Instant,
}

impl TimeLimit {
    pub fn new(max: Duration) -> Self {
        Self {
            max,
            started: Instant::now(),
        }
    }

    pub fn from_millis(max_ms: u64) -> Self {
        Self::new(Duration::from_millis(max_ms))
    }
}

impl Callback for TimeLimit {
    fn on_iteration_start(&mut self, _t: f64) -> Result<(), CallbackAction> {
        if self.started.elapsed() > self.max {
            Err(CallbackAction::new(format!(
                "Solving takes too long: the time limit of {} ms is exceeded",
                self.max.as_millis()
            )))
        } else {
            Ok(())
        }
    }
}

/// Aborts on the first outer iteration beyond `max`.
#[derive(Clone, Debug)]
pub struct IterationLimit {
    max: usize,
    count: usize,
}

impl IterationLimit {
    pub fn new(max: usize) -> Self {
        Self { max, count: 0 }
    }

    /// Iterations seen so far
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Callback for IterationLimit {
    fn on_iteration_start(&mut self, _t: f64) -> Result<(), CallbackAction> {
        self.count += 1;
        if self.count > self.max {
            Err(CallbackAction::new(format!(
                "Max iterations count ({}) is exceeded",
                self.max
            )))
        } else {
            Ok(())
        }
    }
}

/// Combination of the optional limits of [`SolverOptions`](crate::SolverOptions).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub time: Option<TimeLimit>,
    pub iterations: Option<IterationLimit>,
}

impl Callback for Limits {
    fn on_iteration_start(&mut self, t: f64) -> Result<(), CallbackAction> {
        if let Some(time) = self.time.as_mut() {
            time.on_iteration_start(t)?;
        }
        if let Some(iterations) = self.iterations.as_mut() {
            iterations.on_iteration_start(t)?;
        }
        Ok(())
    }
}
