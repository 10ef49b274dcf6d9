/// Receives solver events and optionally answers with a control action.
///
/// Observers let callers monitor a run without changing the solver's API,
/// for example to log progress or to collect intermediate states.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
/// Solvers that must always run to completion use an uninhabited action type
/// such as [`std::convert::Infallible`], so their observers can only return
/// `None`.
///
/// Closures automatically implement `Observer`, a built-in impl for `()`
/// provides a no-op observer, and `&mut Vec<E>` records a copy of every event.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

/// Records every event and never requests an action.
impl<E: Clone, A> Observer<E, A> for &mut Vec<E> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.push(event.clone());
        None
    }
}
