use std::cell::Cell;

use nalgebra::DVector;

/// The right-hand side `f(t, y)` of an explicit system `dy/dt = f(t, y)`.
///
/// Any `Fn(f64, &DVector<f64>, &mut DVector<f64>)` closure or function pointer is a right-hand
/// side already; implement the trait directly for parameterized models.
pub trait Rhs {
    /// Writes `f(t, y)` into `out`. `out` has the same length as `y` and may hold stale values.
    fn rhs(&self, t: f64, y: &DVector<f64>, out: &mut DVector<f64>);
}

impl<F> Rhs for F
where
    F: Fn(f64, &DVector<f64>, &mut DVector<f64>),
{
    fn rhs(&self, t: f64, y: &DVector<f64>, out: &mut DVector<f64>) {
        self(t, y, out)
    }
}

/// Plain function pointer right-hand side, handy for collections of problems.
pub type RhsFn = fn(f64, &DVector<f64>, &mut DVector<f64>);

/// Counts evaluations of the wrapped right-hand side.
pub(crate) struct Counted<'a, F: ?Sized> {
    inner: &'a F,
    count: Cell<usize>,
}

impl<'a, F: Rhs + ?Sized> Counted<'a, F> {
    pub fn new(inner: &'a F) -> Self {
        Self {
            inner,
            count: Cell::new(0),
        }
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }
}

impl<'a, F: Rhs + ?Sized> Rhs for Counted<'a, F> {
    fn rhs(&self, t: f64, y: &DVector<f64>, out: &mut DVector<f64>) {
        self.count.set(self.count.get() + 1);
        self.inner.rhs(t, y, out)
    }
}
