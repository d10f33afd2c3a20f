//! Weighted voting games

use std::fmt;

use crate::characteristic::CharacteristicFunction;
use crate::coalition::{Coalition, CoalitionUniverse, Player};
use crate::error::{GameError, Result};
use crate::game::{write_header, write_list, CooperativeGame};
use crate::simple::SimpleGame;

/// A simple game where a coalition wins iff its total weight meets the quorum.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedVotingGame {
    weights: Vec<i64>,
    quorum: i64,
    characteristic: CharacteristicFunction,
}

impl WeightedVotingGame {
    /// Build a game of `players` players.
    ///
    /// Checked in order: one weight per player, no negative weight, a
    /// non-negative quorum.
    pub fn new(players: usize, weights: Vec<i64>, quorum: i64) -> Result<Self> {
        if weights.len() != players {
            return Err(GameError::LengthMismatch { expected: players, got: weights.len() });
        }
        if let Some((index, &weight)) = weights.iter().enumerate().find(|&(_, &w)| w < 0) {
            return Err(GameError::NegativeWeight { player: index + 1, weight });
        }
        if quorum < 0 {
            return Err(GameError::NegativeQuorum { quorum });
        }

        let universe = CoalitionUniverse::new(players)?;
        let characteristic = CharacteristicFunction::from_fn(universe, |s| {
            if coalition_weight(&weights, s) >= quorum {
                1.0
            } else {
                0.0
            }
        });
        Ok(WeightedVotingGame { weights, quorum, characteristic })
    }

    /// One player per weight.
    pub fn from_weights(weights: Vec<i64>, quorum: i64) -> Result<Self> {
        Self::new(weights.len(), weights, quorum)
    }

    pub fn weights(&self) -> &[i64] {
        &self.weights
    }

    pub fn quorum(&self) -> i64 {
        self.quorum
    }

    /// Total weight of the members of `coalition`.
    pub fn weight_of(&self, coalition: Coalition) -> i64 {
        coalition_weight(&self.weights, coalition)
    }
}

fn coalition_weight(weights: &[i64], coalition: Coalition) -> i64 {
    coalition.players().map(|p| weights[p - 1]).sum()
}

impl CooperativeGame for WeightedVotingGame {
    fn characteristic_function(&self) -> &CharacteristicFunction {
        &self.characteristic
    }
}

impl SimpleGame for WeightedVotingGame {
    fn player_weight(&self, player: Player) -> Option<i64> {
        player.checked_sub(1).and_then(|i| self.weights.get(i)).copied()
    }

    /// Σw(C) - w(p) ≥ quorum, so with a zero quorum nobody is ever pivotal.
    fn is_winning_after_leaving(&self, coalition: Coalition, player: Player) -> bool {
        let leaving = if coalition.contains(player) { self.weights[player - 1] } else { 0 };
        self.weight_of(coalition) - leaving >= self.quorum
    }
}

impl fmt::Display for WeightedVotingGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, self.player_count())?;
        writeln!(f, "quorum = {}", self.quorum)?;
        write_list(f, "weights", &self.weights)
    }
}
