use thiserror::Error;

/// Errors that can occur during Euler integration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("empty input: {0}")]
    EmptyInput(#[from] EmptyInput),

    #[error("derivative at step {step} returned {actual} slopes for a state of dimension {expected}")]
    DimensionMismatch {
        /// Grid index at which the derivative was evaluated.
        step: usize,
        /// Length of the state vector.
        expected: usize,
        /// Length of the returned slope vector.
        actual: usize,
    },
}

/// The input that was empty.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EmptyInput {
    #[error("time grid has no points")]
    TimeGrid,

    #[error("initial state has no components")]
    InitialState,
}
