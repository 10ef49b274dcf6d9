//! Piecewise-forced integration of a [`ForcedSystem`].
//!
//! The forcing is held constant over each sub-interval of the time grid at the
//! value scheduled for the sub-interval's start point, and each sub-interval is
//! handed to an [`IvpSolver`] as a separate initial value problem:
//!
//! ```text
//! y_{i+1} = solve(f(·, forcing_i), y_i, [t_i, t_{i+1}])
//! ```
//!
//! Solving interval by interval keeps the right-hand side smooth within every
//! solve, even where the forcing jumps.
//!
//! # Example
//!
//! ```ignore
//! use lamprey_solvers::{ivp::OdeSolver, transient::piecewise};
//!
//! let solution = piecewise::solve_unobserved(&system, &OdeSolver::default(), &times, &forcing, y0)?;
//!
//! for (t, y) in times[1..].iter().zip(&solution.trajectory) {
//!     println!("t={t}: {y:?}");
//! }
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::{Error, ShapeError};
pub use event::Event;
pub use solution::Solution;

use std::fmt::Debug;

use lamprey_core::{ForcedSystem, IvpSolver, Observer, TimeGrid};
use log::{debug, info, trace, warn};

/// Integrates a forced system across a time grid.
///
/// # Algorithm
///
/// 1. Check that `times` is a valid grid and that `forcing` has one value per
///    grid point. Nothing is integrated if either check fails.
/// 2. For each sub-interval `[t_i, t_{i+1}]`:
///    - Freeze the forcing at `forcing[i]`.
///    - Solve the initial value problem from the current state.
///    - Append the end state to the trajectory and carry it forward.
///    - Emit an [`Event`] to the observer.
/// 3. Return the trajectory, one state per grid point after the first.
///
/// The forcing value at the last grid point starts no sub-interval and is
/// never used.
///
/// # Observer
///
/// The observer receives an [`Event`] after each sub-interval. [`Action`] has
/// no variants, so observers cannot interrupt the run.
///
/// # Errors
///
/// Returns [`Error::InvalidInputShape`] if the inputs do not fit together, or
/// [`Error::SolverFailure`] if any sub-interval cannot be solved.
pub fn solve<S, V, Obs, const N: usize>(
    system: &S,
    solver: &V,
    times: &[f64],
    forcing: &[S::Forcing],
    initial: [f64; N],
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    S: ForcedSystem<N>,
    S::Forcing: PartialEq + Debug,
    V: IvpSolver<N>,
    Obs: Observer<Event<S::Forcing, N>, Action>,
{
    check_shape(times, forcing)?;

    let intervals = times.len() - 1;
    let mut trajectory = Vec::with_capacity(intervals);
    let mut state = initial;
    let mut held: Option<S::Forcing> = None;

    for (interval, pair) in times.windows(2).enumerate() {
        let span = [pair[0], pair[1]];
        let value = forcing[interval];

        if held != Some(value) {
            debug!("interval {interval} at t = {}: forcing {value:?}", span[0]);
            held = Some(value);
        }

        state = advance(system, solver, state, value, span).map_err(|err| {
            warn!("solver failed on interval {interval} {span:?}: {err}");
            Error::solver(interval, span, err)
        })?;
        trace!("interval {interval} {span:?}: {state:?}");
        trajectory.push(state);

        let event = Event {
            interval,
            span,
            forcing: value,
            state,
        };
        if let Some(action) = observer.observe(&event) {
            match action {}
        }
    }

    info!(
        "integrated {intervals} intervals over [{}, {}]",
        times[0], times[intervals]
    );

    Ok(Solution {
        trajectory,
        intervals,
    })
}

/// Integrates a forced system across a time grid without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<S, V, const N: usize>(
    system: &S,
    solver: &V,
    times: &[f64],
    forcing: &[S::Forcing],
    initial: [f64; N],
) -> Result<Solution<N>, Error>
where
    S: ForcedSystem<N>,
    S::Forcing: PartialEq + Debug,
    V: IvpSolver<N>,
{
    solve(system, solver, times, forcing, initial, ())
}

/// Checks that the grid is valid and the forcing is aligned with it.
fn check_shape<F>(times: &[f64], forcing: &[F]) -> Result<(), ShapeError> {
    TimeGrid::validate(times)?;
    if forcing.len() != times.len() {
        return Err(ShapeError::ForcingLength {
            expected: times.len(),
            actual: forcing.len(),
        });
    }
    Ok(())
}

/// Solves a single sub-interval with the forcing frozen at `forcing`.
fn advance<S, V, const N: usize>(
    system: &S,
    solver: &V,
    state: [f64; N],
    forcing: S::Forcing,
    span: [f64; 2],
) -> Result<[f64; N], V::Error>
where
    S: ForcedSystem<N>,
    V: IvpSolver<N>,
{
    solver.solve(|_t, y: &[f64; N]| system.rates(y, forcing), state, span)
}
