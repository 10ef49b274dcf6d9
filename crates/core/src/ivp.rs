/// Solves an initial value problem over a single time span.
///
/// Given a right-hand side `f(t, y)`, an initial state at `span[0]`, and the
/// span `[t0, t1]`, a solver returns an approximation of the state at `t1`.
/// How it steps internally is up to the implementation.
///
/// Implementations should fail rather than return a non-finite state.
pub trait IvpSolver<const N: usize> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Integrates `rhs` from `initial` at `span[0]` to `span[1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the solver cannot produce a finite state at
    /// the end of the span.
    fn solve<F>(&self, rhs: F, initial: [f64; N], span: [f64; 2]) -> Result<[f64; N], Self::Error>
    where
        F: Fn(f64, &[f64; N]) -> [f64; N];
}

impl<S, const N: usize> IvpSolver<N> for &S
where
    S: IvpSolver<N> + ?Sized,
{
    type Error = S::Error;

    fn solve<F>(&self, rhs: F, initial: [f64; N], span: [f64; 2]) -> Result<[f64; N], Self::Error>
    where
        F: Fn(f64, &[f64; N]) -> [f64; N],
    {
        (**self).solve(rhs, initial, span)
    }
}
