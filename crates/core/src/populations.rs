use thiserror::Error;

/// Population counts of the four interacting groups.
///
/// The components are conceptually non-negative, but nothing in this crate
/// clamps them. Negative values can appear under some parameter regimes and
/// must be read as a modeling artifact rather than a valid state.
///
/// The array form used by solvers is `[males, females, host, predator]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Populations {
    /// Male parasites.
    pub males: f64,
    /// Female parasites.
    pub females: f64,
    /// Hosts of the parasite.
    pub host: f64,
    /// Predators of the parasite.
    pub predator: f64,
}

/// Error returned when a slice does not hold exactly four components.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("state vector must have {expected} components, but has {len}", expected = Populations::COMPONENTS)]
pub struct StateLengthError {
    /// The length of the rejected slice.
    pub len: usize,
}

impl Populations {
    /// Number of components in the state vector.
    pub const COMPONENTS: usize = 4;

    /// Creates a state from its four components.
    #[must_use]
    pub const fn new(males: f64, females: f64, host: f64, predator: f64) -> Self {
        Self {
            males,
            females,
            host,
            predator,
        }
    }

    /// Returns the total parasite population, `males + females`.
    #[must_use]
    pub fn parasites(&self) -> f64 {
        self.males + self.females
    }

    /// Returns the share of males in the parasite population.
    ///
    /// Returns `None` when the total parasite population is exactly zero,
    /// where the fraction is undefined. Negative totals still yield a value.
    #[must_use]
    pub fn male_fraction(&self) -> Option<f64> {
        let total = self.parasites();
        if total == 0.0 {
            None
        } else {
            Some(self.males / total)
        }
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|value| value.is_finite())
    }

    /// Returns the components as `[males, females, host, predator]`.
    #[must_use]
    pub const fn to_array(self) -> [f64; 4] {
        [self.males, self.females, self.host, self.predator]
    }
}

impl From<[f64; 4]> for Populations {
    fn from([males, females, host, predator]: [f64; 4]) -> Self {
        Self::new(males, females, host, predator)
    }
}

impl From<Populations> for [f64; 4] {
    fn from(populations: Populations) -> Self {
        populations.to_array()
    }
}

impl TryFrom<&[f64]> for Populations {
    type Error = StateLengthError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let array: [f64; 4] = values
            .try_into()
            .map_err(|_| StateLengthError { len: values.len() })?;
        Ok(array.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn array_order_matches_fields() {
        let state = Populations::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(state.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Populations::from([1.0, 2.0, 3.0, 4.0]), state);
    }

    #[test]
    fn try_from_slice_requires_four_components() {
        let state = Populations::try_from([78.0, 22.0, 1000.0, 50.0].as_slice()).unwrap();
        assert_eq!(state, Populations::new(78.0, 22.0, 1000.0, 50.0));

        let err = Populations::try_from([1.0, 2.0, 3.0].as_slice()).unwrap_err();
        assert_eq!(err, StateLengthError { len: 3 });

        let err = Populations::try_from([0.0; 5].as_slice()).unwrap_err();
        assert_eq!(err.len, 5);
    }

    #[test]
    fn male_fraction_of_reference_state() {
        let state = Populations::new(78.0, 22.0, 1000.0, 50.0);
        assert_relative_eq!(state.parasites(), 100.0);
        assert_relative_eq!(state.male_fraction().unwrap(), 0.78);
    }

    #[test]
    fn male_fraction_is_undefined_without_parasites() {
        let state = Populations::new(0.0, 0.0, 500.0, 10.0);
        assert_eq!(state.parasites(), 0.0);
        assert_eq!(state.male_fraction(), None);
    }

    #[test]
    fn negative_totals_are_not_masked() {
        let state = Populations::new(3.0, -5.0, 1.0, 1.0);
        assert_relative_eq!(state.parasites(), -2.0);
        assert_relative_eq!(state.male_fraction().unwrap(), -1.5);
    }

    #[test]
    fn is_finite_checks_every_component() {
        assert!(Populations::new(1.0, 2.0, 3.0, 4.0).is_finite());
        assert!(!Populations::new(1.0, 2.0, f64::INFINITY, 4.0).is_finite());
        assert!(!Populations::new(1.0, 2.0, 3.0, f64::NAN).is_finite());
    }
}
