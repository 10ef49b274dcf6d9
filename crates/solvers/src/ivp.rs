//! Adaptive Runge–Kutta solvers backed by the `ode_solvers` crate.
//!
//! [`OdeSolver`] implements [`IvpSolver`] for any state dimension using the
//! Dormand–Prince 5(4) or 8(5,3) embedded methods. Only the state at the end
//! of the span is returned; intermediate steps are discarded.

use lamprey_core::IvpSolver;
use ode_solvers::{
    SVector, System,
    dop_shared::{IntegrationError, OutputType},
};
use thiserror::Error;

/// Supported integration methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Adaptive Dormand–Prince 5(4) Runge–Kutta method.
    ///
    /// A general-purpose embedded method that adjusts its step size to keep
    /// the local error estimate within the configured tolerances.
    #[default]
    Dopri5,

    /// Adaptive Dormand–Prince 8(5,3) Runge–Kutta method.
    ///
    /// Higher order and more expensive per step than `Dopri5`, but often
    /// needs far fewer steps when tight tolerances are requested.
    Dop853,
}

/// Error tolerances for adaptive step size control.
///
/// The local error of component `i` is kept below
/// `abs_tol + rel_tol * |y_i|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    abs_tol: f64,
    rel_tol: f64,
}

/// Errors returned by [`Tolerances::new`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ToleranceError {
    #[error("absolute tolerance must be finite and non-negative, got {0}")]
    Abs(f64),

    #[error("relative tolerance must be finite and non-negative, got {0}")]
    Rel(f64),

    #[error("absolute and relative tolerances cannot both be zero")]
    BothZero,
}

impl Tolerances {
    /// Creates validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns a [`ToleranceError`] if either tolerance is negative or not
    /// finite, or if both are zero.
    pub fn new(abs_tol: f64, rel_tol: f64) -> Result<Self, ToleranceError> {
        if !abs_tol.is_finite() || abs_tol < 0.0 {
            return Err(ToleranceError::Abs(abs_tol));
        }
        if !rel_tol.is_finite() || rel_tol < 0.0 {
            return Err(ToleranceError::Rel(rel_tol));
        }
        if abs_tol == 0.0 && rel_tol == 0.0 {
            return Err(ToleranceError::BothZero);
        }
        Ok(Self { abs_tol, rel_tol })
    }

    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs_tol: 1e-9,
            rel_tol: 1e-9,
        }
    }
}

/// Errors from a single [`OdeSolver`] solve.
#[derive(Debug, Error)]
pub enum IvpError {
    #[error(transparent)]
    Integration(#[from] IntegrationError),

    #[error("integrator produced no output")]
    NoOutput,

    #[error("integrator produced a non-finite state at t = {t}")]
    NonFinite { t: f64 },
}

/// An adaptive initial value problem solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OdeSolver {
    method: Method,
    tolerances: Tolerances,
    max_steps: u32,
}

impl OdeSolver {
    /// Default limit on integration steps per solve.
    pub const DEFAULT_MAX_STEPS: u32 = 100_000;

    #[must_use]
    pub fn new(method: Method, tolerances: Tolerances) -> Self {
        Self {
            method,
            tolerances,
            max_steps: Self::DEFAULT_MAX_STEPS,
        }
    }

    /// Sets the maximum number of steps allowed in a single solve.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    #[must_use]
    pub fn tolerances(&self) -> Tolerances {
        self.tolerances
    }

    #[must_use]
    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }
}

impl Default for OdeSolver {
    fn default() -> Self {
        Self::new(Method::default(), Tolerances::default())
    }
}

impl<const N: usize> IvpSolver<N> for OdeSolver {
    type Error = IvpError;

    fn solve<F>(&self, rhs: F, initial: [f64; N], span: [f64; 2]) -> Result<[f64; N], IvpError>
    where
        F: Fn(f64, &[f64; N]) -> [f64; N],
    {
        let [x, x_end] = span;
        let length = x_end - x;
        let y = SVector::from(initial);
        let system = Rhs(rhs);
        let Tolerances { abs_tol, rel_tol } = self.tolerances;

        // Sparse output records every accepted step, ending exactly at `x_end`.
        let end = match self.method {
            Method::Dopri5 => {
                let mut stepper = ode_solvers::Dopri5::from_param(
                    system,
                    x,
                    x_end,
                    length,
                    y,
                    rel_tol,
                    abs_tol,
                    0.9,
                    0.04,
                    0.2,
                    10.0,
                    length,
                    0.0,
                    self.max_steps,
                    1000,
                    OutputType::Sparse,
                );
                stepper.integrate()?;
                stepper.y_out().last().copied()
            }
            Method::Dop853 => {
                let mut stepper = ode_solvers::Dop853::from_param(
                    system,
                    x,
                    x_end,
                    length,
                    y,
                    rel_tol,
                    abs_tol,
                    0.9,
                    0.0,
                    0.333,
                    6.0,
                    length,
                    0.0,
                    self.max_steps,
                    1000,
                    OutputType::Sparse,
                );
                stepper.integrate()?;
                stepper.y_out().last().copied()
            }
        };

        let end: [f64; N] = end.ok_or(IvpError::NoOutput)?.into();
        if end.iter().all(|value| value.is_finite()) {
            Ok(end)
        } else {
            Err(IvpError::NonFinite { t: x_end })
        }
    }
}

/// Adapts a right-hand side closure to the `ode_solvers` system interface.
struct Rhs<F>(F);

impl<F, const N: usize> System<f64, SVector<f64, N>> for Rhs<F>
where
    F: Fn(f64, &[f64; N]) -> [f64; N],
{
    fn system(&self, x: f64, y: &SVector<f64, N>, dy: &mut SVector<f64, N>) {
        let state: [f64; N] = (*y).into();
        *dy = SVector::from((self.0)(x, &state));
    }
}
