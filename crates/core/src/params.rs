use thiserror::Error;

use crate::Regime;

/// Coefficients of the ecosystem dynamics.
///
/// All rates are per unit time. The default values form the reference model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Params {
    /// Per-capita parasite birth rate, applied to females only.
    pub birth_rate: f64,
    /// Baseline parasite mortality, applied to the total parasite count.
    pub baseline_mortality: f64,
    /// Predation mortality, applied to `predator * parasites`.
    pub predation_mortality: f64,
    /// Per-capita host birth rate.
    pub host_birth_rate: f64,
    /// Per-capita baseline host mortality.
    pub host_mortality: f64,
    /// Host mortality caused by parasitism, applied to `parasites * host`.
    pub parasitism_mortality: f64,
    /// Predator growth from feeding, applied to `predator * parasites`.
    pub predator_growth: f64,
    /// Per-capita predator mortality.
    pub predator_mortality: f64,
    /// Share of births allocated to males when resources are scarce.
    pub male_share_scarce: f64,
    /// Share of births allocated to males when resources are abundant.
    pub male_share_abundant: f64,
}

/// Split of new births between the sexes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SexAllocation {
    pub male: f64,
    pub female: f64,
}

/// Errors returned by [`Params::validate`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("{name} must be finite and non-negative, got {value}")]
    Rate { name: &'static str, value: f64 },

    #[error("{name} must lie in [0, 1], got {value}")]
    Share { name: &'static str, value: f64 },
}

impl Default for Params {
    fn default() -> Self {
        Self {
            birth_rate: 0.8,
            baseline_mortality: 0.1,
            predation_mortality: 0.02,
            host_birth_rate: 0.5,
            host_mortality: 0.05,
            parasitism_mortality: 0.03,
            predator_growth: 0.04,
            predator_mortality: 0.2,
            male_share_scarce: 0.78,
            male_share_abundant: 0.56,
        }
    }
}

impl Params {
    /// Checks that every rate is finite and non-negative and that both male
    /// shares are proportions.
    ///
    /// # Errors
    ///
    /// Returns the first offending coefficient as a [`ParamsError`].
    pub fn validate(&self) -> Result<(), ParamsError> {
        let rates = [
            ("birth_rate", self.birth_rate),
            ("baseline_mortality", self.baseline_mortality),
            ("predation_mortality", self.predation_mortality),
            ("host_birth_rate", self.host_birth_rate),
            ("host_mortality", self.host_mortality),
            ("parasitism_mortality", self.parasitism_mortality),
            ("predator_growth", self.predator_growth),
            ("predator_mortality", self.predator_mortality),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(ParamsError::Rate { name, value });
            }
        }

        let shares = [
            ("male_share_scarce", self.male_share_scarce),
            ("male_share_abundant", self.male_share_abundant),
        ];
        for (name, value) in shares {
            // Also rejects NaN.
            if !(0.0..=1.0).contains(&value) {
                return Err(ParamsError::Share { name, value });
            }
        }

        Ok(())
    }

    /// Returns the sex allocation of births under `regime`.
    #[must_use]
    pub fn allocation(&self, regime: Regime) -> SexAllocation {
        let male = match regime {
            Regime::Scarce => self.male_share_scarce,
            Regime::Abundant => self.male_share_abundant,
        };
        SexAllocation {
            male,
            female: 1.0 - male,
        }
    }
}
