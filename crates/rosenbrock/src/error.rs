use thiserror::Error;

use crate::{CallbackAction, Method};

#[derive(Debug, Error)]
pub enum Error {
    /// The problem definition was rejected before any step was taken.
    #[error("Illegal problem definition: {msg}")]
    IllegalInput { msg: String },

    /// The step size became so small that `t + h == t`.
    #[error("The {} method fails at t = {t}: the step size underflows", .method.title())]
    MethodFails { method: Method, t: f64 },

    /// The scaled error estimate was NaN, so no step size proposal can be derived from it.
    #[error("The {} method produced a non-finite error estimate at t = {t}", .method.title())]
    NotFinite { method: Method, t: f64 },

    /// `I - h·γ·J` could not be factorized.
    #[error("Singular iteration matrix at t = {t}")]
    SingularIterationMatrix {
        t: f64,
        #[source]
        source: linear::Error,
    },

    /// The progress callback asked the solver to stop.
    #[error(transparent)]
    Aborted(#[from] CallbackAction),

    #[error("Unknown method '{0}', expected one of MRT, ROS3PRw, ROS34PRw")]
    UnknownMethod(String),
}
