//! Transferable-utility games built from a flat payoff vector

use std::fmt;

use crate::characteristic::CharacteristicFunction;
use crate::error::Result;
use crate::game::{write_header, write_list, CooperativeGame};
use crate::geometry;
use crate::lp::{LpSolver, SimplexSolver};
use crate::predicates;

/// A TU game. `contributions[k]` is the payoff of the k-th coalition of the
/// canonical universe, so the player count is log2(len + 1).
#[derive(Debug, Clone, PartialEq)]
pub struct TuGame {
    contributions: Vec<f64>,
    characteristic: CharacteristicFunction,
}

impl TuGame {
    /// Validate `contributions` and build the game.
    pub fn new(contributions: &[f64]) -> Result<Self> {
        let characteristic = CharacteristicFunction::from_payoffs(contributions)?;
        Ok(TuGame {
            contributions: contributions.to_vec(),
            characteristic,
        })
    }

    /// Payoffs in canonical coalition order, as given at construction.
    pub fn contributions(&self) -> &[f64] {
        &self.contributions
    }

    /// See [`geometry::imputation_vertices`].
    pub fn imputation_vertices(&self) -> Vec<Vec<f64>> {
        geometry::imputation_vertices(self)
    }

    /// Core vertices using the default simplex backend.
    pub fn core_vertices(&self) -> Result<Vec<Vec<f64>>> {
        geometry::core_vertices(self, &SimplexSolver)
    }

    /// Core vertices using a caller-supplied LP backend.
    pub fn core_vertices_with<S: LpSolver + Sync>(&self, solver: &S) -> Result<Vec<Vec<f64>>> {
        geometry::core_vertices(self, solver)
    }

    pub fn is_convex(&self) -> bool {
        predicates::is_convex(self)
    }

    pub fn is_additive(&self) -> bool {
        predicates::is_additive(self)
    }
}

impl CooperativeGame for TuGame {
    fn characteristic_function(&self) -> &CharacteristicFunction {
        &self.characteristic
    }
}

impl fmt::Display for TuGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, self.player_count())?;
        write_list(f, "contributions", &self.contributions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coalition::Coalition;
    use crate::error::GameError;

    fn c(players: &[usize]) -> Coalition {
        players.iter().copied().collect()
    }

    #[test]
    fn test_display() {
        let game = TuGame::new(&[1.0, 2.0, 3.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(game.to_string(), "3 players game\ncontributions = [1, 2, 3, 3, 4, 5, 6]");

        let game = TuGame::new(&[1.0]).unwrap();
        assert_eq!(game.to_string(), "1 player game\ncontributions = [1]");
    }

    #[test]
    fn test_display_truncates() {
        let payoffs: Vec<f64> = (0..63).map(|k| k as f64).collect();
        let shown = TuGame::new(&payoffs).unwrap().to_string();
        assert!(shown.starts_with("6 players game\ncontributions = [0, 1, 2"));
        assert!(shown.ends_with("30, 31]"));
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(TuGame::new(&[]), Err(GameError::EmptyContributions));
        assert_eq!(TuGame::new(&[1.0, 2.0, 3.0, 4.0]), Err(GameError::InvalidLength { len: 4 }));
        assert!(matches!(
            TuGame::new(&[0.0, -1.0, -2.0, 3.0, 4.0, 5.0, 6.0]),
            Err(GameError::NegativePayoff { .. })
        ));
        assert!(matches!(
            TuGame::new(&[1.0, 2.0, 3.0, 2.0, 4.0, 5.0, 3.0]),
            Err(GameError::NonMonotoneContribution { .. })
        ));
    }

    #[test]
    fn test_accessors() {
        let game = TuGame::new(&[1.0, 2.0, 3.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(game.player_count(), 3);
        assert_eq!(game.players().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(game.one_coalitions(), &[c(&[1]), c(&[2]), c(&[3])]);
        assert_eq!(game.grand_coalition(), c(&[1, 2, 3]));
        assert_eq!(game.value(Coalition::EMPTY), 0.0);
        assert_eq!(game.value(c(&[1, 3])), 4.0);
        assert_eq!(game.contributions(), &[1.0, 2.0, 3.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_marginal_contribution() {
        let game = TuGame::new(&[1.0, 2.0, 3.0, 3.0, 5.0, 5.0, 8.0]).unwrap();
        assert_eq!(game.marginal_contribution(c(&[1]), 1), Ok(1.0));
        assert_eq!(game.marginal_contribution(c(&[1, 3]), 1), Ok(2.0));
        assert_eq!(game.marginal_contribution(c(&[1, 2, 3]), 1), Ok(3.0));
    }

    #[test]
    fn test_marginal_contribution_errors() {
        let game = TuGame::new(&[1.0, 2.0, 3.0, 3.0, 5.0, 5.0, 8.0]).unwrap();
        assert_eq!(
            game.marginal_contribution(Coalition::EMPTY, 1),
            Err(GameError::EmptyCoalition)
        );
        assert_eq!(
            game.marginal_contribution(c(&[1, 2]), 4),
            Err(GameError::InvalidPlayer { player: 4 })
        );
        assert_eq!(
            game.marginal_contribution(c(&[1, 4]), 1),
            Err(GameError::InvalidPlayer { player: 4 })
        );
        assert_eq!(
            game.marginal_contribution(c(&[1, 2]), 3),
            Err(GameError::PlayerNotInCoalition { player: 3 })
        );
    }

    #[test]
    fn test_utopia_payoff_vector() {
        let game = TuGame::new(&[1.0, 2.0, 3.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(game.utopia_payoff_vector(), vec![1.0, 2.0, 3.0]);
        let game = TuGame::new(&[0.0, 0.0, 0.0, 60.0, 60.0, 60.0, 72.0]).unwrap();
        assert_eq!(game.utopia_payoff_vector(), vec![12.0, 12.0, 12.0]);
        let game = TuGame::new(&[1.0, 2.0, 3.0, 3.0, 5.0, 5.0, 8.0]).unwrap();
        assert_eq!(game.utopia_payoff_vector(), vec![3.0, 3.0, 5.0]);
        let game = TuGame::new(&[5.0]).unwrap();
        assert_eq!(game.utopia_payoff_vector(), vec![5.0]);
    }

    #[test]
    fn test_minimal_rights_vector() {
        let game = TuGame::new(&[2.0, 4.0, 5.0, 18.0, 14.0, 9.0, 24.0]).unwrap();
        assert_eq!(game.minimal_rights_vector(), vec![8.0, 4.0, 5.0]);
        let game = TuGame::new(&[0.0, 0.0, 0.0, 60.0, 60.0, 60.0, 72.0]).unwrap();
        assert_eq!(game.minimal_rights_vector(), vec![48.0, 48.0, 48.0]);
        let game = TuGame::new(&[5.0]).unwrap();
        assert_eq!(game.minimal_rights_vector(), vec![5.0]);
    }

    #[test]
    fn test_imputation_membership() {
        let game = TuGame::new(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(game.is_in_imputation_set(&[1.5, 1.0, 3.5]), Ok(true));
        assert_eq!(game.is_in_imputation_set(&[2.05, 2.0, 2.0]), Ok(false));
        assert_eq!(
            game.is_in_imputation_set(&[1.0, 2.0]),
            Err(GameError::VectorLengthMismatch { expected: 3, got: 2 })
        );
    }

    #[test]
    fn test_core_membership() {
        let game = TuGame::new(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(game.is_in_core(&[1.0, 2.0, 3.0]), Ok(true));
        assert_eq!(game.is_in_core(&[1.0, 2.0, 4.0]), Ok(false));
        assert!(game.is_in_core(&[]).is_err());

        let single = TuGame::new(&[99.0]).unwrap();
        assert_eq!(single.is_in_imputation_set(&[1.0]), Ok(false));
        assert_eq!(single.is_in_core(&[1.0]), Ok(false));
        assert_eq!(single.is_in_core(&[99.0]), Ok(true));
    }

    #[test]
    fn test_geometry_shortcuts() {
        let game = TuGame::new(&[2.0, 4.0, 5.0, 18.0, 14.0, 9.0, 24.0]).unwrap();
        assert_eq!(game.core_vertices().unwrap().len(), 4);
        assert_eq!(
            game.core_vertices_with(&SimplexSolver).unwrap(),
            game.core_vertices().unwrap()
        );
        assert_eq!(game.imputation_vertices().len(), 3);
        assert!(!game.is_convex());
        assert!(!game.is_additive());
    }
}
