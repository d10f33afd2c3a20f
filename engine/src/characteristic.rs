//! Characteristic function storage
//!
//! Values live in a flat table indexed by coalition bitset, so a lookup is a
//! single array access. Slot 0 belongs to the empty coalition and is never
//! read through the public API; [`CooperativeGame::value`] maps the empty
//! coalition to 0 instead.
//!
//! [`CooperativeGame::value`]: crate::game::CooperativeGame::value

use std::ops::Index;

use crate::coalition::{Coalition, CoalitionUniverse};
use crate::error::{GameError, Result};

/// Total mapping from the non-empty coalitions of a universe to payoffs.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacteristicFunction {
    universe: CoalitionUniverse,
    values: Vec<f64>,
}

impl CharacteristicFunction {
    /// Build a TU characteristic function from payoffs in canonical coalition order.
    ///
    /// Validation runs in this order: empty input, negative payoffs, length of
    /// the form 2^n - 1, monotone growth of the per-size maximum payoff.
    pub fn from_payoffs(payoffs: &[f64]) -> Result<Self> {
        if payoffs.is_empty() {
            return Err(GameError::EmptyContributions);
        }
        if let Some((index, &value)) = payoffs.iter().enumerate().find(|(_, v)| !(**v >= 0.0)) {
            return Err(GameError::NegativePayoff { index, value });
        }

        let len = payoffs.len();
        if !(len + 1).is_power_of_two() {
            return Err(GameError::InvalidLength { len });
        }
        let players = (len + 1).trailing_zeros() as usize;
        let universe = CoalitionUniverse::new(players)?;

        let mut previous_max = f64::NEG_INFINITY;
        for size in 1..=players {
            let max = payoffs[universe.size_class_range(size)]
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max);
            if max < previous_max {
                return Err(GameError::NonMonotoneContribution { size, max, previous_max });
            }
            previous_max = max;
        }

        let mut values = vec![0.0; len + 1];
        for (coalition, &payoff) in universe.iter().zip(payoffs) {
            values[coalition.index()] = payoff;
        }
        Ok(CharacteristicFunction { universe, values })
    }

    /// Build a characteristic function by evaluating `f` on every coalition.
    ///
    /// No validation is applied; the caller owns the game's invariants.
    pub fn from_fn<F>(universe: CoalitionUniverse, mut f: F) -> Self
    where
        F: FnMut(Coalition) -> f64,
    {
        let mut values = vec![0.0; universe.len() + 1];
        for &coalition in universe.iter() {
            values[coalition.index()] = f(coalition);
        }
        CharacteristicFunction { universe, values }
    }

    /// Payoff of a coalition, or `None` for the empty coalition and for
    /// coalitions naming players outside the game.
    pub fn get(&self, coalition: Coalition) -> Option<f64> {
        if coalition.is_empty() {
            return None;
        }
        self.values.get(coalition.index()).copied()
    }

    /// `(coalition, payoff)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Coalition, f64)> + '_ {
        self.universe
            .iter()
            .map(move |&coalition| (coalition, self.values[coalition.index()]))
    }

    /// Payoffs in canonical order.
    pub fn payoffs(&self) -> Vec<f64> {
        self.iter().map(|(_, v)| v).collect()
    }

    pub fn universe(&self) -> &CoalitionUniverse {
        &self.universe
    }

    pub fn player_count(&self) -> usize {
        self.universe.player_count()
    }

    /// v(N).
    pub fn grand_value(&self) -> f64 {
        self.values[self.universe.grand().index()]
    }
}

impl Index<Coalition> for CharacteristicFunction {
    type Output = f64;

    fn index(&self, coalition: Coalition) -> &f64 {
        assert!(!coalition.is_empty(), "the empty coalition has no stored value");
        &self.values[coalition.index()]
    }
}
