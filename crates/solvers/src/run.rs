use lamprey_core::{Ecosystem, IvpSolver, Observer, Populations, Regime, series};

use crate::transient::piecewise::{self, Action, Error, Event, ShapeError};

/// A completed ecosystem simulation.
///
/// Holds the inputs alongside the trajectory so derived series stay aligned
/// with the grid. The trajectory has one state per grid point after the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    times: Vec<f64>,
    schedule: Vec<Regime>,
    initial: Populations,
    trajectory: Vec<Populations>,
}

/// One output point of a [`Run`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub time: f64,
    /// Numeric resource level scheduled at `time`.
    pub level: f64,
    pub regime: Regime,
    pub populations: Populations,
    /// Total parasites.
    pub total: f64,
    /// Share of males, or `None` when there are no parasites.
    pub male_fraction: Option<f64>,
}

/// Simulates `ecosystem` across `times` under `schedule`.
///
/// `schedule` must have one regime per time point, and `initial` must hold
/// `[males, females, host, predator]`.
///
/// # Errors
///
/// Returns [`Error::InvalidInputShape`] if `initial` does not have four
/// components or the grid and schedule do not fit together, and
/// [`Error::SolverFailure`] if any interval cannot be solved.
pub fn simulate<V, Obs>(
    ecosystem: &Ecosystem,
    solver: &V,
    times: &[f64],
    schedule: &[Regime],
    initial: &[f64],
    observer: Obs,
) -> Result<Run, Error>
where
    V: IvpSolver<4>,
    Obs: Observer<Event<Regime, 4>, Action>,
{
    let initial = Populations::try_from(initial).map_err(|err| ShapeError::StateLength {
        expected: Populations::COMPONENTS,
        actual: err.len,
    })?;

    let solution = piecewise::solve(
        ecosystem,
        solver,
        times,
        schedule,
        initial.to_array(),
        observer,
    )?;

    Ok(Run {
        times: times.to_vec(),
        schedule: schedule.to_vec(),
        initial,
        trajectory: solution
            .trajectory
            .into_iter()
            .map(Populations::from)
            .collect(),
    })
}

/// Simulates without observation.
///
/// # Errors
///
/// Returns the same errors as [`simulate`].
pub fn simulate_unobserved<V: IvpSolver<4>>(
    ecosystem: &Ecosystem,
    solver: &V,
    times: &[f64],
    schedule: &[Regime],
    initial: &[f64],
) -> Result<Run, Error> {
    simulate(ecosystem, solver, times, schedule, initial, ())
}

impl Run {
    /// The full time grid, including the initial point.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// The regime at every grid point.
    #[must_use]
    pub fn schedule(&self) -> &[Regime] {
        &self.schedule
    }

    #[must_use]
    pub fn initial(&self) -> Populations {
        self.initial
    }

    /// States at `output_times()`.
    #[must_use]
    pub fn trajectory(&self) -> &[Populations] {
        &self.trajectory
    }

    /// The grid without its first point, aligned with the trajectory.
    #[must_use]
    pub fn output_times(&self) -> &[f64] {
        &self.times[1..]
    }

    #[must_use]
    pub fn totals(&self) -> Vec<f64> {
        series::totals(&self.trajectory)
    }

    #[must_use]
    pub fn male_fractions(&self) -> Vec<Option<f64>> {
        series::male_fractions(&self.trajectory)
    }

    /// The largest total parasite, host or predator population in the trajectory.
    #[must_use]
    pub fn peak_population(&self) -> Option<f64> {
        series::peak(&self.trajectory)
    }

    /// Iterates over the output points in time order.
    pub fn records(&self) -> impl ExactSizeIterator<Item = Record> + '_ {
        self.trajectory
            .iter()
            .zip(&self.times[1..])
            .zip(&self.schedule[1..])
            .map(|((&populations, &time), &regime)| Record {
                time,
                level: regime.level(),
                regime,
                populations,
                total: populations.parasites(),
                male_fraction: populations.male_fraction(),
            })
    }
}
