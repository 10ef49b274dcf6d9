use std::fmt;

/// Discrete resource regime that drives sex allocation of new parasite births.
///
/// Numerically, `Scarce` is level `0` and `Abundant` is level `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Regime {
    #[default]
    Scarce,
    Abundant,
}

impl Regime {
    /// Classifies a numeric resource level.
    ///
    /// Levels below `0.5` are scarce and everything else is abundant,
    /// so `0` and `1` map to their own regimes.
    #[must_use]
    pub fn from_level(level: f64) -> Self {
        if level < 0.5 {
            Self::Scarce
        } else {
            Self::Abundant
        }
    }

    /// Returns the numeric level of this regime.
    #[must_use]
    pub const fn level(self) -> f64 {
        match self {
            Self::Scarce => 0.0,
            Self::Abundant => 1.0,
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scarce => f.write_str("scarce"),
            Self::Abundant => f.write_str("abundant"),
        }
    }
}
