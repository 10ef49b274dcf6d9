//! Solvers for transient problems, advancing a state across a time grid.
//!
//! # Solvers
//!
//! - [`piecewise`]: holds an exogenous forcing constant over each grid
//!   interval and delegates every interval to an [`IvpSolver`]
//!
//! [`IvpSolver`]: lamprey_core::IvpSolver

pub mod piecewise;
