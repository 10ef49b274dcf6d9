use crate::{ForcedSystem, Params, ParamsError, Populations, Regime};

/// The coupled parasite, host and predator dynamics.
///
/// Births are proportional to females only and are split between the sexes
/// according to the resource [`Regime`]. Both sexes lose the same combined
/// mortality term, so males receive only their allocation share of births but
/// suffer the full death flux. This asymmetry can drive either sex negative;
/// the rates are returned unclamped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ecosystem {
    params: Params,
}

impl Ecosystem {
    /// Creates an ecosystem with validated coefficients.
    ///
    /// # Errors
    ///
    /// Returns a [`ParamsError`] if any coefficient is invalid.
    pub fn new(params: Params) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Returns the model coefficients.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Returns the instantaneous rate of change of `state` under `regime`.
    #[must_use]
    pub fn derivative(&self, state: &Populations, regime: Regime) -> Populations {
        let Params {
            birth_rate,
            baseline_mortality,
            predation_mortality,
            host_birth_rate,
            host_mortality,
            parasitism_mortality,
            predator_growth,
            predator_mortality,
            ..
        } = self.params;
        let Populations {
            males: _,
            females,
            host,
            predator,
        } = *state;

        let allocation = self.params.allocation(regime);
        let parasites = state.parasites();

        let births = birth_rate * females;
        let deaths = baseline_mortality * parasites + predation_mortality * predator * parasites;

        let host_births = host_birth_rate * host;
        let host_deaths = host_mortality * host + parasitism_mortality * parasites * host;

        let predator_births = predator_growth * predator * parasites;
        let predator_deaths = predator_mortality * predator;

        Populations {
            males: allocation.male * births - deaths,
            females: allocation.female * births - deaths,
            host: host_births - host_deaths,
            predator: predator_births - predator_deaths,
        }
    }
}

impl ForcedSystem<4> for Ecosystem {
    type Forcing = Regime;

    fn rates(&self, y: &[f64; 4], forcing: Regime) -> [f64; 4] {
        self.derivative(&Populations::from(*y), forcing).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn test_state() -> Populations {
        Populations::new(10.0, 10.0, 100.0, 5.0)
    }

    #[test]
    fn scarce_rates_of_test_state() {
        let rates = Ecosystem::default().derivative(&test_state(), Regime::Scarce);

        // 0.78 * 0.8 * 10 - (0.1 * 20 + 0.02 * 5 * 20)
        assert_relative_eq!(rates.males, 2.24, epsilon = 1e-12);
        // 0.22 * 0.8 * 10 - 4
        assert_relative_eq!(rates.females, -2.24, epsilon = 1e-12);
        // 0.5 * 100 - (0.05 * 100 + 0.03 * 20 * 100)
        assert_relative_eq!(rates.host, -15.0, epsilon = 1e-12);
        // 0.04 * 5 * 20 - 0.2 * 5
        assert_relative_eq!(rates.predator, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn abundant_changes_only_parasite_rates() {
        let ecosystem = Ecosystem::default();
        let scarce = ecosystem.derivative(&test_state(), Regime::Scarce);
        let abundant = ecosystem.derivative(&test_state(), Regime::Abundant);

        assert_relative_eq!(abundant.males, 0.48, epsilon = 1e-12);
        assert_relative_eq!(abundant.females, -0.48, epsilon = 1e-12);
        assert_eq!(abundant.host, scarce.host);
        assert_eq!(abundant.predator, scarce.predator);
    }

    #[test]
    fn sexes_share_the_death_term() {
        // With no females there are no births, so both sexes decline equally.
        let state = Populations::new(40.0, 0.0, 10.0, 2.0);
        let rates = Ecosystem::default().derivative(&state, Regime::Scarce);
        assert_relative_eq!(rates.males, rates.females);
        assert_relative_eq!(rates.males, -(0.1 * 40.0 + 0.02 * 2.0 * 40.0));
    }

    #[test]
    fn negative_inputs_are_accepted() {
        let state = Populations::new(-5.0, 2.0, 100.0, 1.0);
        let rates = Ecosystem::default().derivative(&state, Regime::Abundant);
        assert!(rates.is_finite());
    }

    #[test]
    fn forced_system_matches_derivative() {
        let ecosystem = Ecosystem::default();
        let state = Populations::new(78.0, 22.0, 1000.0, 50.0);
        for regime in [Regime::Scarce, Regime::Abundant] {
            let rates = ecosystem.rates(&state.to_array(), regime);
            assert_eq!(rates, ecosystem.derivative(&state, regime).to_array());
        }
    }

    #[test]
    fn custom_params_flow_through() {
        let params = Params {
            birth_rate: 0.0,
            baseline_mortality: 0.0,
            predation_mortality: 0.0,
            ..Params::default()
        };
        let ecosystem = Ecosystem::new(params).unwrap();
        let rates = ecosystem.derivative(&test_state(), Regime::Scarce);
        assert_eq!(rates.males, 0.0);
        assert_eq!(rates.females, 0.0);
    }

    #[test]
    fn rejects_invalid_params() {
        let params = Params {
            male_share_scarce: -0.1,
            ..Params::default()
        };
        assert!(Ecosystem::new(params).is_err());
    }
}
