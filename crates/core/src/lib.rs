//! Core traits and types for the lamprey ecosystem model.
//!
//! The model couples a sex-structured parasite population (males and females)
//! with its host and with a predator of the parasite. A discrete resource
//! [`Regime`] decides how new parasite births are split between the sexes.
//!
//! This crate defines the data model and the seams that solvers build on:
//!
//! - [`Populations`]: the four-component state vector
//! - [`Regime`] and [`Schedule`]: the resource forcing and its per-point schedule
//! - [`TimeGrid`]: a validated, strictly increasing time grid
//! - [`Ecosystem`]: the dynamics function, parameterized by [`Params`]
//! - [`ForcedSystem`]: right-hand sides driven by an exogenous forcing value
//! - [`IvpSolver`]: the initial value problem capability solvers provide
//! - [`Observer`]: receives solver events
//! - [`series`]: derived quantities computed from a trajectory

mod ecosystem;
mod grid;
mod ivp;
mod observer;
mod params;
mod populations;
mod problems;
mod regime;
mod schedule;
pub mod series;

pub use ecosystem::Ecosystem;
pub use grid::{GridError, TimeGrid};
pub use ivp::IvpSolver;
pub use observer::Observer;
pub use params::{Params, ParamsError, SexAllocation};
pub use populations::{Populations, StateLengthError};
pub use problems::ForcedSystem;
pub use regime::Regime;
pub use schedule::Schedule;
