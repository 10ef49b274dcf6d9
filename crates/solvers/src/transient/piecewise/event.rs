/// Event emitted by the piecewise integrator after each sub-interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Event<F, const N: usize> {
    /// Index of the sub-interval, which is also the index of its start point.
    pub interval: usize,

    /// The sub-interval `[t_i, t_{i+1}]`.
    pub span: [f64; 2],

    /// The forcing held over the sub-interval.
    pub forcing: F,

    /// The state at the end of the sub-interval.
    pub state: [f64; N],
}
