//! Core traits and types for odestep.
//!
//! This crate defines the shared abstractions that the solvers build on:
//!
//! - [`Derivative`] — the right-hand side of an ODE system in state-space form
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`grid`] — evenly spaced time grids for fixed-step integration

mod derivative;
pub mod grid;
mod observer;

pub use derivative::Derivative;
pub use observer::Observer;
