use anyhow::{Context, Result, bail};
use lamprey_core::{Ecosystem, Params, Populations, Regime, Schedule, TimeGrid};
use lamprey_solvers::ivp::{Method, OdeSolver, Tolerances};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// A simulation scenario.
///
/// Loaded from a TOML file and validated before use.
/// See [`Scenario::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Initial populations.
    pub initial: Populations,
    /// Uniform time grid.
    pub grid: GridConfig,
    /// Resource regime schedule.
    pub forcing: ForcingConfig,
    /// Integrator settings.
    #[serde(default)]
    pub solver: SolverConfig,
    /// Model coefficients. Missing entries take their default values.
    #[serde(default)]
    pub params: Params,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    pub start: f64,
    pub end: f64,
    /// Number of time points, including both ends.
    pub points: usize,
}

/// A single switch between two regimes.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForcingConfig {
    /// Time points strictly before this time use `before`, the rest `after`.
    pub switch_time: f64,
    pub before: Regime,
    pub after: Regime,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub method: SolverMethod,
    pub abs_tol: f64,
    pub rel_tol: f64,
    pub max_steps: u32,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverMethod {
    #[default]
    Dopri5,
    Dop853,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            initial: Populations::new(78.0, 22.0, 1000.0, 50.0),
            grid: GridConfig {
                start: 0.0,
                end: 50.0,
                points: 200,
            },
            forcing: ForcingConfig {
                switch_time: 25.0,
                before: Regime::Scarce,
                after: Regime::Abundant,
            },
            solver: SolverConfig::default(),
            params: Params::default(),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        let tolerances = Tolerances::default();
        Self {
            method: SolverMethod::default(),
            abs_tol: tolerances.abs_tol(),
            rel_tol: tolerances.rel_tol(),
            max_steps: OdeSolver::DEFAULT_MAX_STEPS,
        }
    }
}

impl From<SolverMethod> for Method {
    fn from(method: SolverMethod) -> Self {
        match method {
            SolverMethod::Dopri5 => Method::Dopri5,
            SolverMethod::Dop853 => Method::Dop853,
        }
    }
}

impl Scenario {
    /// Load a [`Scenario`] from a TOML file.
    ///
    /// Performs validation on all values before returning.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed,
    /// or if the scenario values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        Self::from_toml(&contents)
    }

    /// Parse and validate a [`Scenario`] from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let scenario: Scenario =
            toml::from_str(contents).context("failed to deserialize scenario")?;

        scenario.validate().context("failed to validate scenario")?;

        Ok(scenario)
    }

    /// Serialize the scenario as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize scenario")
    }

    fn validate(&self) -> Result<()> {
        let initial = self.initial.to_array();
        if let Some(value) = initial.iter().find(|value| !value.is_finite()) {
            bail!("initial populations must be finite, but contain {value}");
        }

        check_num(self.grid.points, 2..=1_000_000).context("invalid number of time points")?;
        self.time_grid().context("invalid time grid")?;
        if !self.forcing.switch_time.is_finite() {
            bail!("switch time must be finite");
        }

        self.params.validate().context("invalid model parameters")?;

        self.tolerances().context("invalid solver tolerances")?;
        check_num(self.solver.max_steps, 1..).context("invalid solver step budget")?;

        Ok(())
    }

    /// The uniform time grid of this scenario.
    pub fn time_grid(&self) -> Result<TimeGrid> {
        let GridConfig { start, end, points } = self.grid;
        Ok(TimeGrid::linspace(start, end, points)?)
    }

    /// The regime at each point of `grid`.
    #[must_use]
    pub fn schedule(&self, grid: &TimeGrid) -> Schedule {
        let ForcingConfig {
            switch_time,
            before,
            after,
        } = self.forcing;
        Schedule::sample(grid.as_slice(), |t| {
            if t < switch_time { before } else { after }
        })
    }

    pub fn ecosystem(&self) -> Result<Ecosystem> {
        Ok(Ecosystem::new(self.params)?)
    }

    pub fn solver(&self) -> Result<OdeSolver> {
        let solver = OdeSolver::new(self.solver.method.into(), self.tolerances()?)
            .with_max_steps(self.solver.max_steps);
        Ok(solver)
    }

    fn tolerances(&self) -> Result<Tolerances> {
        Ok(Tolerances::new(self.solver.abs_tol, self.solver.rel_tol)?)
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}
