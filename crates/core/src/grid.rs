use thiserror::Error;

/// A strictly increasing sequence of at least two finite time points.
///
/// Points need not be uniformly spaced.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    times: Vec<f64>,
}

/// Reasons a sequence of time points is not a valid grid.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    #[error("time grid needs at least 2 points, got {len}")]
    TooShort { len: usize },

    #[error("time point {index} is not finite")]
    NonFinite { index: usize },

    #[error("time point {index} ({value}) does not exceed the previous point ({previous})")]
    NotIncreasing {
        index: usize,
        previous: f64,
        value: f64,
    },
}

impl TimeGrid {
    /// Creates a grid after validating `times`.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if `times` has fewer than two points, contains a
    /// non-finite value, or is not strictly increasing.
    pub fn new(times: Vec<f64>) -> Result<Self, GridError> {
        Self::validate(&times)?;
        Ok(Self { times })
    }

    /// Checks `times` without taking ownership.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`TimeGrid::new`].
    pub fn validate(times: &[f64]) -> Result<(), GridError> {
        if times.len() < 2 {
            return Err(GridError::TooShort { len: times.len() });
        }
        if let Some(index) = times.iter().position(|t| !t.is_finite()) {
            return Err(GridError::NonFinite { index });
        }
        for (index, pair) in times.windows(2).enumerate() {
            let [previous, value] = [pair[0], pair[1]];
            if value <= previous {
                return Err(GridError::NotIncreasing {
                    index: index + 1,
                    previous,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Creates `points` evenly spaced times from `start` to `end`, inclusive.
    ///
    /// The last point is exactly `end`.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if `points < 2`, an endpoint is not finite, or
    /// `end <= start`.
    pub fn linspace(start: f64, end: f64, points: usize) -> Result<Self, GridError> {
        if points < 2 {
            return Err(GridError::TooShort { len: points });
        }
        let last = points - 1;

        #[allow(clippy::cast_precision_loss)]
        let step = (end - start) / last as f64;

        #[allow(clippy::cast_precision_loss)]
        let times = (0..points)
            .map(|i| if i == last { end } else { start + i as f64 * step })
            .collect();

        Self::new(times)
    }

    /// Returns the time points.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.times
    }

    /// Returns the number of time points.
    #[must_use]
    pub fn points(&self) -> usize {
        self.times.len()
    }

    /// Returns the first time point.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.times[0]
    }

    /// Returns the last time point.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Iterates over `(index, [t_i, t_{i+1}])` for each sub-interval.
    pub fn intervals(&self) -> impl ExactSizeIterator<Item = (usize, [f64; 2])> + '_ {
        self.times
            .windows(2)
            .enumerate()
            .map(|(index, pair)| (index, [pair[0], pair[1]]))
    }
}

impl AsRef<[f64]> for TimeGrid {
    fn as_ref(&self) -> &[f64] {
        &self.times
    }
}

impl TryFrom<Vec<f64>> for TimeGrid {
    type Error = GridError;

    fn try_from(times: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(times)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn accepts_non_uniform_grid() {
        let grid = TimeGrid::new(vec![0.0, 0.1, 1.0, 5.0]).unwrap();
        assert_eq!(grid.points(), 4);
        assert_eq!(grid.start(), 0.0);
        assert_eq!(grid.end(), 5.0);
    }

    #[test]
    fn rejects_short_grids() {
        assert_eq!(TimeGrid::new(vec![]), Err(GridError::TooShort { len: 0 }));
        assert_eq!(TimeGrid::new(vec![1.0]), Err(GridError::TooShort { len: 1 }));
    }

    #[test]
    fn rejects_non_finite_points() {
        assert_eq!(
            TimeGrid::new(vec![0.0, f64::NAN, 2.0]),
            Err(GridError::NonFinite { index: 1 })
        );
        assert_eq!(
            TimeGrid::new(vec![0.0, 1.0, f64::INFINITY]),
            Err(GridError::NonFinite { index: 2 })
        );
    }

    #[test]
    fn rejects_repeated_or_decreasing_points() {
        assert_eq!(
            TimeGrid::new(vec![0.0, 1.0, 1.0]),
            Err(GridError::NotIncreasing {
                index: 2,
                previous: 1.0,
                value: 1.0
            })
        );
        assert!(matches!(
            TimeGrid::new(vec![0.0, 2.0, 1.0, 3.0]),
            Err(GridError::NotIncreasing { index: 2, .. })
        ));
    }

    #[test]
    fn linspace_reference_grid() {
        let grid = TimeGrid::linspace(0.0, 50.0, 200).unwrap();
        let times = grid.as_slice();

        assert_eq!(times.len(), 200);
        assert_eq!(times[0], 0.0);
        assert_eq!(times[199], 50.0);
        assert_relative_eq!(times[1], 50.0 / 199.0);
        assert!(times[99] < 25.0 && times[100] > 25.0);
    }

    #[test]
    fn linspace_rejects_bad_ranges() {
        assert_eq!(
            TimeGrid::linspace(0.0, 1.0, 1),
            Err(GridError::TooShort { len: 1 })
        );
        assert!(matches!(
            TimeGrid::linspace(1.0, 1.0, 3),
            Err(GridError::NotIncreasing { .. })
        ));
        assert!(matches!(
            TimeGrid::linspace(0.0, f64::NAN, 3),
            Err(GridError::NonFinite { .. })
        ));
    }

    #[test]
    fn intervals_pair_consecutive_points() {
        let grid = TimeGrid::new(vec![0.0, 0.5, 2.0]).unwrap();
        let intervals: Vec<_> = grid.intervals().collect();
        assert_eq!(intervals, vec![(0, [0.0, 0.5]), (1, [0.5, 2.0])]);
    }
}
