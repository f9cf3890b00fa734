//! Solvers for transient problems — advancing a state vector through time.
//!
//! A [`Derivative`] maps `(t, state, params)` to the rate of change of each
//! state component. Solvers in this module integrate that derivative across a
//! time grid and return the state at every grid point.
//!
//! # Solvers
//!
//! - [`euler`] — explicit first-order stepping on a fixed grid
//!
//! [`Derivative`]: odestep_core::Derivative

pub mod euler;
