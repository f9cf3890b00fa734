/// The right-hand side of a first-order ODE system in state-space form.
///
/// A derivative maps the current time, the current state vector, and a
/// parameter vector to the instantaneous rate of change of every state
/// component:
///
/// ```text
/// dy/dt = f(t, y, params)
/// ```
///
/// Implementations must return exactly one slope per state component.
/// Solvers treat any other length as a dimension mismatch.
///
/// Closures of the form `Fn(f64, &[f64], &[f64]) -> Vec<f64>` implement this
/// trait, so a one-off system rarely needs a named type:
///
/// ```
/// use odestep_core::Derivative;
///
/// let decay = |_t: f64, y: &[f64], p: &[f64]| vec![-p[0] * y[0]];
/// assert_eq!(decay.calculate(0.0, &[2.0], &[0.5]), vec![-1.0]);
/// ```
pub trait Derivative {
    /// Computes the slopes at `time` for `state` under `params`.
    fn calculate(&self, time: f64, state: &[f64], params: &[f64]) -> Vec<f64>;
}

impl<F> Derivative for F
where
    F: Fn(f64, &[f64], &[f64]) -> Vec<f64>,
{
    fn calculate(&self, time: f64, state: &[f64], params: &[f64]) -> Vec<f64> {
        self(time, state, params)
    }
}
