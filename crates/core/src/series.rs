//! Series derived from a trajectory of [`Populations`].
//!
//! Every series has one entry per trajectory state, in the same order.

use crate::Populations;

/// Total parasite population at each point.
#[must_use]
pub fn totals(trajectory: &[Populations]) -> Vec<f64> {
    trajectory.iter().map(Populations::parasites).collect()
}

/// Male share of the parasite population at each point.
///
/// Entries are `None` where the total parasite population is zero.
#[must_use]
pub fn male_fractions(trajectory: &[Populations]) -> Vec<Option<f64>> {
    trajectory.iter().map(Populations::male_fraction).collect()
}

/// Largest value among total parasites, hosts and predators.
///
/// Returns `None` for an empty trajectory.
#[must_use]
pub fn peak(trajectory: &[Populations]) -> Option<f64> {
    trajectory
        .iter()
        .flat_map(|state| [state.parasites(), state.host, state.predator])
        .reduce(f64::max)
}
