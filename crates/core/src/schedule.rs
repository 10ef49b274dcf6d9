use crate::Regime;

/// A resource regime for every point of a time grid.
///
/// The regime at index `i` governs the sub-interval that starts at grid point
/// `i`. The value at the final grid point starts no interval, so it never
/// affects integration, but it is kept so the schedule stays aligned with the
/// grid for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schedule {
    regimes: Vec<Regime>,
}

impl Schedule {
    #[must_use]
    pub fn new(regimes: Vec<Regime>) -> Self {
        Self { regimes }
    }

    /// Creates a schedule holding `regime` at all `len` points.
    #[must_use]
    pub fn constant(regime: Regime, len: usize) -> Self {
        Self::new(vec![regime; len])
    }

    /// Creates a schedule with a single transition.
    ///
    /// Points with index below `index` get `before`, the rest get `after`.
    /// An `index` beyond `len` yields a constant `before` schedule.
    #[must_use]
    pub fn switch_at(len: usize, index: usize, before: Regime, after: Regime) -> Self {
        (0..len)
            .map(|i| if i < index { before } else { after })
            .collect()
    }

    /// Classifies numeric resource levels with [`Regime::from_level`].
    #[must_use]
    pub fn from_levels(levels: &[f64]) -> Self {
        levels.iter().copied().map(Regime::from_level).collect()
    }

    /// Evaluates `regime_at` at each time point.
    #[must_use]
    pub fn sample(times: &[f64], regime_at: impl Fn(f64) -> Regime) -> Self {
        times.iter().copied().map(regime_at).collect()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Regime] {
        &self.regimes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regimes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regimes.is_empty()
    }

    /// Returns the numeric resource level at each point.
    #[must_use]
    pub fn levels(&self) -> Vec<f64> {
        self.regimes.iter().map(|regime| regime.level()).collect()
    }

    /// Returns the indices at which the regime differs from the previous point.
    #[must_use]
    pub fn transitions(&self) -> Vec<usize> {
        self.regimes
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| pair[0] != pair[1])
            .map(|(index, _)| index + 1)
            .collect()
    }
}

impl From<Vec<Regime>> for Schedule {
    fn from(regimes: Vec<Regime>) -> Self {
        Self::new(regimes)
    }
}

impl FromIterator<Regime> for Schedule {
    fn from_iter<I: IntoIterator<Item = Regime>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl AsRef<[Regime]> for Schedule {
    fn as_ref(&self) -> &[Regime] {
        &self.regimes
    }
}
