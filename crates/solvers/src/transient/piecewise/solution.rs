/// The result of a piecewise-forced integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<const N: usize> {
    /// States at grid points `1..N`, one per sub-interval.
    ///
    /// The initial state is not included.
    pub trajectory: Vec<[f64; N]>,

    /// Number of sub-intervals integrated.
    pub intervals: usize,
}

impl<const N: usize> Solution<N> {
    /// Returns the final state, or `None` for an empty trajectory.
    #[must_use]
    pub fn last(&self) -> Option<&[f64; N]> {
        self.trajectory.last()
    }
}
