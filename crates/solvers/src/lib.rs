//! Solvers for the lamprey ecosystem model.
//!
//! - [`ivp`]: adaptive Runge–Kutta [`IvpSolver`] implementations
//! - [`transient::piecewise`]: integration of a forced system whose forcing is
//!   piecewise constant on a time grid
//! - [`simulate`]: runs an [`Ecosystem`] over a grid and a regime schedule
//!
//! [`IvpSolver`]: lamprey_core::IvpSolver
//! [`Ecosystem`]: lamprey_core::Ecosystem

pub mod ivp;
pub mod transient;

mod run;

pub use run::{Record, Run, simulate, simulate_unobserved};
