/// Event emitted by the Euler solver for each grid point it reaches.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The grid index (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// The grid time at this step.
    pub time: f64,

    /// The state at this step, borrowed from the trajectory being built.
    pub state: &'a [f64],
}

/// Control actions an observer may return from an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// End the run, keeping every row computed up to this event.
    StopEarly,
}
