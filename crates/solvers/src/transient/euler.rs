//! Forward Euler solver for ODE systems.
//!
//! This module provides a fixed-step explicit Euler integrator. It advances a
//! state vector across a caller-supplied time grid:
//!
//! ```text
//! h_n       = t_{n+1} - t_n
//! y_{n+1}   = y_n + h_n * f(t_n, y_n, params)
//! ```
//!
//! The method is first-order accurate and not A-stable: large steps or stiff
//! systems diverge.
//!
//! # Example
//!
//! ```
//! use odestep_core::grid;
//! use odestep_solvers::transient::euler;
//!
//! let decay = |_t: f64, y: &[f64], _p: &[f64]| vec![-y[0]];
//! let times = grid::linspace(0.0, 2.0, 0.5)?;
//!
//! let trajectory = euler::solve(&decay, &[1.0], &times, &[])?;
//!
//! assert_eq!(trajectory.into_states(), vec![vec![1.0], vec![0.5], vec![0.25], vec![0.125]]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod event;
mod solution;
mod trajectory;


pub use error::{EmptyInput, Error};
pub use event::{Action, Event};
pub use solution::{Solution, Status};
pub use trajectory::Trajectory;

use log::{debug, trace};
use odestep_core::{Derivative, Observer};

/// Integrates an ODE system across `time_grid` using forward Euler.
///
/// Returns one state per grid point. The first row is a copy of
/// `initial_state`; a single-point grid returns just that copy.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `time_grid` or `initial_state` is empty,
/// and [`Error::DimensionMismatch`] if the derivative returns a slope vector
/// whose length differs from the state's.
pub fn solve<D>(
    derivative: &D,
    initial_state: &[f64],
    time_grid: &[f64],
    params: &[f64],
) -> Result<Trajectory, Error>
where
    D: Derivative,
{
    solve_observed(derivative, initial_state, time_grid, params, ()).map(|s| s.trajectory)
}

/// Integrates an ODE system using forward Euler, reporting each step.
///
/// # Algorithm
///
/// 1. Copy the initial state into the first trajectory row.
/// 2. For each consecutive pair of grid points `(t_n, t_{n+1})`:
///    - Compute the local step `h = t_{n+1} - t_n`. Its sign is not checked.
///    - Evaluate the derivative once at `(t_n, y_n, params)`.
///    - Write `y_{n+1} = y_n + h * slope`.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full trajectory.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial state (step 0) and after
/// each integration step, and may return [`Action::StopEarly`] to end the run
/// with the rows computed so far.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `time_grid` or `initial_state` is empty,
/// and [`Error::DimensionMismatch`] if the derivative returns a slope vector
/// whose length differs from the state's. No partial trajectory is returned
/// on error.
pub fn solve_observed<D, Obs>(
    derivative: &D,
    initial_state: &[f64],
    time_grid: &[f64],
    params: &[f64],
    mut observer: Obs,
) -> Result<Solution, Error>
where
    D: Derivative,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let Some(&start) = time_grid.first() else {
        return Err(EmptyInput::TimeGrid.into());
    };
    if initial_state.is_empty() {
        return Err(EmptyInput::InitialState.into());
    }

    let dimension = initial_state.len();
    debug!(
        "euler: integrating {dimension} equation(s) over {} grid point(s)",
        time_grid.len()
    );

    let mut trajectory = Trajectory::start(initial_state, time_grid.len());

    let event = Event {
        step: 0,
        time: start,
        state: trajectory.first(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(stopped(trajectory, 0));
    }

    for (n, pair) in time_grid.windows(2).enumerate() {
        let step = n + 1;
        let (t, t_next) = (pair[0], pair[1]);
        let h = t_next - t;

        let current = trajectory.last();
        let slopes = derivative.calculate(t, current, params);
        if slopes.len() != dimension {
            return Err(Error::DimensionMismatch {
                step: n,
                expected: dimension,
                actual: slopes.len(),
            });
        }

        let next: Vec<f64> = current
            .iter()
            .zip(&slopes)
            .map(|(y, slope)| y + h * slope)
            .collect();
        trace!("euler: step {step} t={t_next} h={h} state={next:?}");
        trajectory.push(next);

        let event = Event {
            step,
            time: t_next,
            state: trajectory.last(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(stopped(trajectory, step));
        }
    }

    let steps = trajectory.len() - 1;
    debug!("euler: completed {steps} step(s)");

    Ok(Solution {
        status: Status::Complete,
        trajectory,
        steps,
    })
}

fn stopped(trajectory: Trajectory, steps: usize) -> Solution {
    debug!("euler: stopped by observer after {steps} step(s)");
    Solution {
        status: Status::StoppedByObserver,
        trajectory,
        steps,
    }
}
