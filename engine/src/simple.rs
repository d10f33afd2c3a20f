//! Simple games: every coalition either wins (value 1) or loses (value 0)
//!
//! The derived coalition families here (winning, minimal winning,
//! shift-minimal winning, pivot sets) are what the power indices count.

use crate::coalition::{Coalition, Player};
use crate::error::{GameError, Result};
use crate::game::CooperativeGame;

/// Knobs for the desirability relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceOptions {
    /// Break ties between equally desirable players by their weight.
    pub prefer_by_weight: bool,
}

impl Default for PreferenceOptions {
    fn default() -> Self {
        PreferenceOptions { prefer_by_weight: true }
    }
}

/// A cooperative game with binary coalition values.
pub trait SimpleGame: CooperativeGame {
    /// Weight used to break desirability ties, if the game has weights.
    fn player_weight(&self, _player: Player) -> Option<i64> {
        None
    }

    /// Whether `coalition` wins. The empty coalition always loses.
    fn is_winning(&self, coalition: Coalition) -> bool {
        self.value(coalition) >= 1.0
    }

    /// Winning coalitions in canonical order.
    fn winning_coalitions(&self) -> Vec<Coalition> {
        self.coalitions()
            .iter()
            .copied()
            .filter(|&s| self.is_winning(s))
            .collect()
    }

    /// Whether `coalition` still wins once `player` leaves it.
    fn is_winning_after_leaving(&self, coalition: Coalition, player: Player) -> bool {
        self.is_winning(coalition.without(player))
    }

    /// Players whose departure turns the coalition into a losing one.
    ///
    /// With `all_coalitions` every coalition is listed and losing ones carry
    /// no pivots; otherwise only winning coalitions are listed.
    fn pivot_players(&self, all_coalitions: bool) -> Vec<(Coalition, Vec<Player>)> {
        self.coalitions()
            .iter()
            .filter_map(|&s| {
                let winning = self.is_winning(s);
                if !winning && !all_coalitions {
                    return None;
                }
                let pivots = if winning {
                    s.players().filter(|&p| !self.is_winning_after_leaving(s, p)).collect()
                } else {
                    Vec::new()
                };
                Some((s, pivots))
            })
            .collect()
    }

    /// Winning coalitions in which every member is pivotal.
    fn minimal_winning_coalitions(&self) -> Vec<Coalition> {
        self.pivot_players(false)
            .into_iter()
            .filter(|(s, pivots)| pivots.len() == s.len())
            .map(|(s, _)| s)
            .collect()
    }

    /// Players that never turn a losing coalition (the empty one included)
    /// into a winning one.
    fn null_players(&self) -> Vec<Player> {
        let grand = self.grand_coalition();
        self.players()
            .filter(|&i| {
                grand
                    .without(i)
                    .subsets()
                    .all(|s| self.value(s.with(i)) - self.value(s) != 1.0)
            })
            .collect()
    }

    /// Winning coalitions without any null player.
    fn winning_coalitions_without_null_players(&self) -> Vec<Coalition> {
        let nulls = Coalition::from_iter(self.null_players());
        self.winning_coalitions()
            .into_iter()
            .filter(|s| s.is_disjoint(nulls))
            .collect()
    }

    /// The more desirable of players `i` and `j`, if any.
    ///
    /// Over every S avoiding both players (the empty one included):
    /// (1) S ∪ {j} winning implies S ∪ {i} winning, and
    /// (2) some S has S ∪ {i} winning while S ∪ {j} loses.
    /// Both give `i`. Only (1) defers to the weights when enabled, higher
    /// weight wins and a tie has no preference. Neither gives `j`.
    fn preferred_player(
        &self,
        i: Player,
        j: Player,
        options: PreferenceOptions,
    ) -> Result<Option<Player>> {
        for player in [i, j] {
            if player == 0 || player > self.player_count() {
                return Err(GameError::InvalidPlayer { player });
            }
        }

        Ok(preference(self, i, j, options))
    }

    /// Preference for every pair `i < j` under default options.
    fn player_ranking(&self) -> Vec<((Player, Player), Option<Player>)> {
        let n = self.player_count();
        let mut ranking = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 1..=n {
            for j in (i + 1)..=n {
                ranking.push(((i, j), preference(self, i, j, PreferenceOptions::default())));
            }
        }
        ranking
    }

    /// Minimal winning coalitions where no member can be swapped for a less
    /// desirable outsider while staying minimal winning.
    fn shift_winning_coalitions(&self) -> Vec<Coalition> {
        let minimal = self.minimal_winning_coalitions();
        let candidates = minimal
            .iter()
            .fold(Coalition::EMPTY, |acc, &s| acc.union(s));

        minimal
            .iter()
            .copied()
            .filter(|&s| {
                s.players().all(|i| {
                    candidates
                        .players()
                        .filter(|&j| !s.contains(j))
                        .filter(|&j| {
                            preference(self, i, j, PreferenceOptions::default()) == Some(i)
                        })
                        .all(|j| !minimal.contains(&s.without(i).with(j)))
                })
            })
            .collect()
    }
}

/// Desirability relation for two valid player ids.
fn preference<G: SimpleGame + ?Sized>(
    game: &G,
    i: Player,
    j: Player,
    options: PreferenceOptions,
) -> Option<Player> {
    let rest = game.grand_coalition().without(i).without(j);
    let mut j_implies_i = true;
    let mut i_beats_j = false;
    for s in rest.subsets() {
        let with_i = game.is_winning(s.with(i));
        let with_j = game.is_winning(s.with(j));
        if with_j && !with_i {
            j_implies_i = false;
        }
        if with_i && !with_j {
            i_beats_j = true;
        }
    }

    match (j_implies_i, i_beats_j) {
        (true, true) => Some(i),
        (true, false) if options.prefer_by_weight => {
            match (game.player_weight(i), game.player_weight(j)) {
                (Some(wi), Some(wj)) if wi > wj => Some(i),
                (Some(wi), Some(wj)) if wj > wi => Some(j),
                _ => None,
            }
        }
        (false, false) => Some(j),
        _ => None,
    }
}
