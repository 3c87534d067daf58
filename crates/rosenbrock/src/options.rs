#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::{IterationLimit, Limits, Method, TimeLimit};

/// Solver settings accepted by [`solve_ivp`](crate::solve_ivp).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(rename_all = "camelCase", default))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolverOptions {
    pub method: Method,
    /// Wall clock limit for a single solve
    pub max_time_ms: Option<u64>,
    /// Limit on the number of outer iterations
    pub max_iterations: Option<usize>,
}

impl SolverOptions {
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_max_time_ms(mut self, max_time_ms: u64) -> Self {
        self.max_time_ms = Some(max_time_ms);
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Builds the callback enforcing the configured limits. The time limit starts now.
    pub fn limits(&self) -> Limits {
        Limits {
            time: self.max_time_ms.map(TimeLimit::from_millis),
            iterations: self.max_iterations.map(IterationLimit::new),
        }
    }
}
