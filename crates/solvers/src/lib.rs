//! Fixed-step explicit ODE solvers for odestep.
//!
//! # Modules
//!
//! - [`transient`] — time integration over a caller-supplied grid
//!   ([`transient::euler`])

pub mod transient;
