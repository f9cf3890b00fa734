/// A hook that sees each solver event and may answer with an action.
///
/// Solvers call `observe` once per event. Events usually borrow the state
/// row the solver just produced (see `odestep_solvers::transient::euler::Event`),
/// so an observer that wants to keep a row must copy it. Returning
/// `Some(action)` asks the solver for one of its own control actions, such as
/// stopping early; returning `None` leaves the run untouched.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. `()` never acts and is
/// what the unobserved solver entry points pass.
pub trait Observer<E, A> {
    /// Handles one event.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
