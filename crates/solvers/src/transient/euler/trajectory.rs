use std::ops::Index;

/// The states computed across a time grid, one row per grid point.
///
/// Row 0 is a copy of the initial state. Every row has [`dimension`] entries,
/// and a trajectory is never empty.
///
/// [`dimension`]: Trajectory::dimension
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trajectory {
    dimension: usize,
    states: Vec<Vec<f64>>,
}

impl Trajectory {
    /// Starts a trajectory from a copy of `initial`, reserving room for
    /// `capacity` rows.
    pub(super) fn start(initial: &[f64], capacity: usize) -> Self {
        let mut states = Vec::with_capacity(capacity);
        states.push(initial.to_vec());
        Self {
            dimension: initial.len(),
            states,
        }
    }

    /// Appends the next row.
    ///
    /// Callers check the row length before pushing.
    pub(super) fn push(&mut self, state: Vec<f64>) {
        debug_assert_eq!(state.len(), self.dimension);
        self.states.push(state);
    }

    /// Returns the number of rows.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns the number of components in each row.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the row at grid index `n`, if it was computed.
    #[must_use]
    pub fn get(&self, n: usize) -> Option<&[f64]> {
        self.states.get(n).map(Vec::as_slice)
    }

    /// Returns the initial state.
    #[must_use]
    pub fn first(&self) -> &[f64] {
        &self[0]
    }

    /// Returns the most recently computed state.
    #[must_use]
    pub fn last(&self) -> &[f64] {
        &self[self.len() - 1]
    }

    /// Iterates over the rows in time order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[f64]> {
        self.states.iter().map(Vec::as_slice)
    }

    /// Returns component `k` of every row in time order, or `None` if `k` is
    /// out of range.
    #[must_use]
    pub fn component(&self, k: usize) -> Option<Vec<f64>> {
        (k < self.dimension).then(|| self.states.iter().map(|row| row[k]).collect())
    }

    /// Consumes the trajectory and returns its rows.
    #[must_use]
    pub fn into_states(self) -> Vec<Vec<f64>> {
        self.states
    }
}

impl Index<usize> for Trajectory {
    type Output = [f64];

    fn index(&self, n: usize) -> &[f64] {
        &self.states[n]
    }
}
