use std::error::Error as StdError;

use lamprey_core::GridError;
use thiserror::Error;

/// Errors that can occur during piecewise-forced integration.
///
/// Either error aborts the whole run. No partial trajectory is returned.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input shape: {0}")]
    InvalidInputShape(#[from] ShapeError),

    #[error("solver failed on interval {interval} [{start}, {end}]: {source}")]
    SolverFailure {
        interval: usize,
        start: f64,
        end: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

/// Inputs that do not fit together, detected before integration starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("forcing schedule has {actual} values but the time grid has {expected} points")]
    ForcingLength { expected: usize, actual: usize },

    #[error("initial state has {actual} components, expected {expected}")]
    StateLength { expected: usize, actual: usize },
}

impl Error {
    pub(crate) fn solver<E: StdError + Send + Sync + 'static>(
        interval: usize,
        [start, end]: [f64; 2],
        err: E,
    ) -> Self {
        Self::SolverFailure {
            interval,
            start,
            end,
            source: Box::new(err),
        }
    }
}
