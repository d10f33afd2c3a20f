//! The cooperative game abstraction
//!
//! Every game kind exposes its characteristic function; all derived
//! quantities (utopia payoffs, minimal rights, imputation bounds, membership
//! tests) are provided methods built on that single accessor. Calculators are
//! generic over [`CooperativeGame`], never over a concrete game type.

use crate::characteristic::CharacteristicFunction;
use crate::coalition::{Coalition, CoalitionUniverse, Player};
use crate::error::{GameError, Result};

/// A game over players `1..=n` with an immutable characteristic function.
pub trait CooperativeGame {
    /// The full coalition → payoff table.
    fn characteristic_function(&self) -> &CharacteristicFunction;

    /// Number of players n.
    fn player_count(&self) -> usize {
        self.characteristic_function().player_count()
    }

    /// Player ids in ascending order.
    fn players(&self) -> std::ops::RangeInclusive<Player> {
        1..=self.player_count()
    }

    /// The canonical coalition universe.
    fn coalitions(&self) -> &CoalitionUniverse {
        self.characteristic_function().universe()
    }

    /// The n singleton coalitions.
    fn one_coalitions(&self) -> &[Coalition] {
        self.coalitions().singletons()
    }

    fn grand_coalition(&self) -> Coalition {
        self.coalitions().grand()
    }

    /// v(S), with v(∅) = 0.
    ///
    /// # Panics
    /// If `coalition` names players outside the game.
    fn value(&self, coalition: Coalition) -> f64 {
        if coalition.is_empty() {
            0.0
        } else {
            self.characteristic_function()[coalition]
        }
    }

    /// v(N).
    fn grand_value(&self) -> f64 {
        self.characteristic_function().grand_value()
    }

    /// v(S) - v(S \ {player}).
    fn marginal_contribution(&self, coalition: Coalition, player: Player) -> Result<f64> {
        if coalition.is_empty() {
            return Err(GameError::EmptyCoalition);
        }
        let n = self.player_count();
        if player == 0 || player > n {
            return Err(GameError::InvalidPlayer { player });
        }
        if let Some(outsider) = coalition.max_player().filter(|&p| p > n) {
            return Err(GameError::InvalidPlayer { player: outsider });
        }
        if !coalition.contains(player) {
            return Err(GameError::PlayerNotInCoalition { player });
        }
        Ok(self.value(coalition) - self.value(coalition.without(player)))
    }

    /// M_i = v(N) - v(N \ {i}) per player.
    fn utopia_payoff_vector(&self) -> Vec<f64> {
        let grand = self.grand_coalition();
        let v_n = self.grand_value();
        self.players()
            .map(|i| v_n - self.value(grand.without(i)))
            .collect()
    }

    /// m_i = max over S ∋ i of v(S) - Σ_{j ∈ S, j ≠ i} M_j per player.
    fn minimal_rights_vector(&self) -> Vec<f64> {
        let utopia = self.utopia_payoff_vector();
        self.players()
            .map(|i| {
                self.characteristic_function()
                    .iter()
                    .filter(|(s, _)| s.contains(i))
                    .map(|(s, v)| {
                        let others: f64 = s.without(i).players().map(|j| utopia[j - 1]).sum();
                        v - others
                    })
                    .fold(f64::NEG_INFINITY, f64::max)
            })
            .collect()
    }

    /// Per-player `(v({i}), v(N) - Σ_{j≠i} v({j}))`.
    fn imputation_bounds(&self) -> Vec<(f64, f64)> {
        let singles: Vec<f64> = self.one_coalitions().iter().map(|&s| self.value(s)).collect();
        let v_n = self.grand_value();
        (0..singles.len())
            .map(|i| {
                let others: f64 = singles
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, v)| v)
                    .sum();
                (singles[i], v_n - others)
            })
            .collect()
    }

    /// Individual rationality plus exact efficiency.
    fn is_in_imputation_set(&self, payoff: &[f64]) -> Result<bool> {
        self.check_payoff_len(payoff)?;
        let rational = self
            .one_coalitions()
            .iter()
            .zip(payoff)
            .all(|(&s, &x)| x >= self.value(s));
        Ok(rational && payoff.iter().sum::<f64>() == self.grand_value())
    }

    /// Tightened per-player interval plus exact efficiency.
    ///
    /// Coalition-wise rationality over intermediate coalitions is not checked.
    fn is_in_core(&self, payoff: &[f64]) -> Result<bool> {
        self.check_payoff_len(payoff)?;
        let bounded = self
            .imputation_bounds()
            .iter()
            .zip(payoff)
            .all(|(&(lb, ub), &x)| lb <= x && x <= ub);
        Ok(bounded && payoff.iter().sum::<f64>() == self.grand_value())
    }

    #[doc(hidden)]
    fn check_payoff_len(&self, payoff: &[f64]) -> Result<()> {
        let expected = self.player_count();
        if payoff.len() != expected {
            return Err(GameError::VectorLengthMismatch { expected, got: payoff.len() });
        }
        Ok(())
    }
}

/// Longest list printed by the `Display` impls of concrete games.
pub(crate) const MAX_ENTRIES_SHOWN: usize = 32;

/// First line shared by every game's `Display` impl.
pub(crate) fn write_header(f: &mut std::fmt::Formatter<'_>, players: usize) -> std::fmt::Result {
    if players == 1 {
        writeln!(f, "1 player game")
    } else {
        writeln!(f, "{players} players game")
    }
}

/// `label = [a, b, ..]`, truncated to [`MAX_ENTRIES_SHOWN`] entries.
pub(crate) fn write_list<T: std::fmt::Display>(
    f: &mut std::fmt::Formatter<'_>,
    label: &str,
    items: &[T],
) -> std::fmt::Result {
    write!(f, "{label} = [")?;
    for (i, item) in items.iter().take(MAX_ENTRIES_SHOWN).enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}
