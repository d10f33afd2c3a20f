//! Indices that count winning coalitions: Public Help, Egalitarian, Gn-minus,
//! Nevison, Koenig-Braeuninger and Rae

use cogame_engine::SimpleGame;

use crate::{membership_counts, normalize, ratio, single_player, Normalization, PowerIndex};

/// |W_i| / Σ_j |W_j|.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicHelpIndex;

impl PowerIndex for PublicHelpIndex {
    fn name(&self) -> &'static str {
        "Public-Help Index"
    }

    fn compute<G: SimpleGame + ?Sized>(&self, game: &G) -> Vec<f64> {
        if let Some(v) = single_player(game) {
            return v;
        }
        normalize(membership_counts(&game.winning_coalitions(), game.player_count()))
    }
}

/// 1/n for everyone if anything wins, else 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct EgalitarianIndex;

impl PowerIndex for EgalitarianIndex {
    fn name(&self) -> &'static str {
        "Egalitarian Index"
    }

    fn compute<G: SimpleGame + ?Sized>(&self, game: &G) -> Vec<f64> {
        if let Some(v) = single_player(game) {
            return v;
        }
        let n = game.player_count();
        let share = if game.winning_coalitions().is_empty() {
            0.0
        } else {
            1.0 / n as f64
        };
        vec![share; n]
    }
}

/// Public Help restricted to winning coalitions without null players.
#[derive(Debug, Clone, Copy, Default)]
pub struct GnMinusIndex;

impl PowerIndex for GnMinusIndex {
    fn name(&self) -> &'static str {
        "GnMinus Index"
    }

    fn compute<G: SimpleGame + ?Sized>(&self, game: &G) -> Vec<f64> {
        if let Some(v) = single_player(game) {
            return v;
        }
        normalize(membership_counts(
            &game.winning_coalitions_without_null_players(),
            game.player_count(),
        ))
    }
}

/// |W_i| / 2^(n-1): the probability that a random coalition containing i wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct NevisonIndex;

impl PowerIndex for NevisonIndex {
    fn name(&self) -> &'static str {
        "Nevison Index"
    }

    fn compute<G: SimpleGame + ?Sized>(&self, game: &G) -> Vec<f64> {
        if let Some(v) = single_player(game) {
            return v;
        }
        let n = game.player_count();
        let denominator = (1u64 << (n - 1)) as f64;
        membership_counts(&game.winning_coalitions(), n)
            .into_iter()
            .map(|w| w / denominator)
            .collect()
    }
}

/// |W_i| / |W|.
#[derive(Debug, Clone, Copy, Default)]
pub struct KoenigBraeuningerIndex;

impl PowerIndex for KoenigBraeuningerIndex {
    fn name(&self) -> &'static str {
        "Koenig-and-Braeuninger Index"
    }

    fn compute<G: SimpleGame + ?Sized>(&self, game: &G) -> Vec<f64> {
        if let Some(v) = single_player(game) {
            return v;
        }
        let winning = game.winning_coalitions();
        let total = winning.len() as f64;
        membership_counts(&winning, game.player_count())
            .into_iter()
            .map(|w| ratio(w, total))
            .collect()
    }
}

/// 1/2 + (2|W_i| - |W|) / 2^n: the probability that i agrees with the outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct RaeIndex {
    pub normalization: Normalization,
}

impl RaeIndex {
    pub fn new(normalization: Normalization) -> Self {
        RaeIndex { normalization }
    }
}

impl PowerIndex for RaeIndex {
    fn name(&self) -> &'static str {
        "Rae Index"
    }

    fn compute<G: SimpleGame + ?Sized>(&self, game: &G) -> Vec<f64> {
        if let Some(v) = single_player(game) {
            return v;
        }
        let n = game.player_count();
        let winning = game.winning_coalitions();
        let total = winning.len() as f64;
        let denominator = (1u64 << n) as f64;
        let raw: Vec<f64> = membership_counts(&winning, n)
            .into_iter()
            .map(|w| 0.5 + (2.0 * w - total) / denominator)
            .collect();
        match self.normalization {
            Normalization::Normalized => normalize(raw),
            Normalization::Absolute => raw,
        }
    }
}
