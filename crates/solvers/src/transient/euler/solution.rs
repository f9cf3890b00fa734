use super::Trajectory;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Reached the last grid point.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an observed Euler integration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// States at each grid point reached (including the initial state).
    pub trajectory: Trajectory,

    /// Number of integration steps completed.
    pub steps: usize,
}
