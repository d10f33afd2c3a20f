//! cogame Indices - Solution concepts over cooperative games
//!
//! Value concepts ([`PowerValue`]) work on any [`CooperativeGame`]; power
//! indices ([`PowerIndex`]) need the winning/losing structure of a
//! [`SimpleGame`]. Every calculator is a small stateless struct, so the same
//! instance can be reused across games and threads.
//!
//! Degenerate ratios follow one rule everywhere: a vanishing denominator
//! yields 0 (see [`ratio`]), so no calculator ever returns NaN or infinity.
//! A one-player game always yields `[v({1})]`.

use cogame_engine::{Coalition, CooperativeGame, SimpleGame};

pub mod minimal;
pub mod swing;
pub mod values;
pub mod winning;

pub use minimal::{DeeganPackelIndex, HollerIndex, PublicGoodIndex, ShiftIndex};
pub use swing::{BanzhafIndex, JohnstonIndex, ShapleyShubikIndex, SolidarityValue};
pub use values::{BanzhafValue, GatelyPoint, ShapleyValue, TauValue};
pub use winning::{
    EgalitarianIndex, GnMinusIndex, KoenigBraeuningerIndex, NevisonIndex, PublicHelpIndex,
    RaeIndex,
};

/// A payoff allocation rule for TU games.
pub trait PowerValue {
    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// One payoff per player, in player order.
    fn compute<G: CooperativeGame + ?Sized>(&self, game: &G) -> Vec<f64>;
}

/// A power measure for simple games.
pub trait PowerIndex {
    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// One entry per player, in player order.
    fn compute<G: SimpleGame + ?Sized>(&self, game: &G) -> Vec<f64>;
}

/// Whether a calculator rescales its raw scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Rescale so the entries sum to the calculator's target (1 or v(N)).
    #[default]
    Normalized,
    /// Report the raw (absolute) scores.
    Absolute,
}

/// `num / den`, or 0 when `den` is 0.
pub fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

/// Scale `raw` to sum to 1; the zero vector stays zero.
pub fn normalize(raw: Vec<f64>) -> Vec<f64> {
    let total: f64 = raw.iter().sum();
    raw.into_iter().map(|x| ratio(x, total)).collect()
}

/// `[v({1})]` for one-player games.
pub(crate) fn single_player<G: CooperativeGame + ?Sized>(game: &G) -> Option<Vec<f64>> {
    (game.player_count() == 1).then(|| vec![game.grand_value()])
}

/// How many of `coalitions` each player belongs to.
pub(crate) fn membership_counts(coalitions: &[Coalition], players: usize) -> Vec<f64> {
    let mut counts = vec![0.0; players];
    for coalition in coalitions {
        for p in coalition.players() {
            counts[p - 1] += 1.0;
        }
    }
    counts
}

/// Every value concept with default settings, as `(name, payoffs)`.
pub fn power_values<G: CooperativeGame + ?Sized>(game: &G) -> Vec<(&'static str, Vec<f64>)> {
    fn entry<V: PowerValue, G: CooperativeGame + ?Sized>(
        value: V,
        game: &G,
    ) -> (&'static str, Vec<f64>) {
        (value.name(), value.compute(game))
    }
    vec![
        entry(ShapleyValue, game),
        entry(BanzhafValue::default(), game),
        entry(GatelyPoint, game),
        entry(TauValue, game),
    ]
}

/// Every power index with default settings, as `(name, scores)`.
pub fn power_indices<G: SimpleGame + ?Sized>(game: &G) -> Vec<(&'static str, Vec<f64>)> {
    fn entry<I: PowerIndex, G: SimpleGame + ?Sized>(
        index: I,
        game: &G,
    ) -> (&'static str, Vec<f64>) {
        (index.name(), index.compute(game))
    }
    vec![
        entry(ShapleyShubikIndex, game),
        entry(BanzhafIndex, game),
        entry(JohnstonIndex, game),
        entry(PublicGoodIndex, game),
        entry(PublicHelpIndex, game),
        entry(ShiftIndex, game),
        entry(EgalitarianIndex, game),
        entry(GnMinusIndex, game),
        entry(NevisonIndex, game),
        entry(KoenigBraeuningerIndex, game),
        entry(RaeIndex::default(), game),
        entry(SolidarityValue, game),
        entry(HollerIndex::default(), game),
        entry(DeeganPackelIndex::default(), game),
    ]
}

#[cfg(test)]
pub(crate) fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-5, "{actual:?} vs {expected:?}");
    }
}
