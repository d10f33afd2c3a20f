//! Indices built from swings and pivots: Shapley-Shubik, Banzhaf, Johnston,
//! and the solidarity value

use cogame_engine::combinatorics::ordering_weight;
use cogame_engine::SimpleGame;

use crate::values::{shapley_shares, weighted_swings};
use crate::{normalize, single_player, PowerIndex};

/// Share of player orderings in which a player is pivotal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapleyShubikIndex;

impl PowerIndex for ShapleyShubikIndex {
    fn name(&self) -> &'static str {
        "Shapley-Shubik Index"
    }

    fn compute<G: SimpleGame + ?Sized>(&self, game: &G) -> Vec<f64> {
        if let Some(v) = single_player(game) {
            return v;
        }
        shapley_shares(game)
    }
}

/// Share of all swings that belong to a player.
#[derive(Debug, Clone, Copy, Default)]
pub struct BanzhafIndex;

impl PowerIndex for BanzhafIndex {
    fn name(&self) -> &'static str {
        "Banzhaf Index"
    }

    fn compute<G: SimpleGame + ?Sized>(&self, game: &G) -> Vec<f64> {
        if let Some(v) = single_player(game) {
            return v;
        }
        normalize(game.players().map(|i| weighted_swings(game, i, |_| 1.0)).collect())
    }
}

/// Each winning coalition with pivots splits one unit evenly among them.
#[derive(Debug, Clone, Copy, Default)]
pub struct JohnstonIndex;

impl PowerIndex for JohnstonIndex {
    fn name(&self) -> &'static str {
        "Johnston Index"
    }

    fn compute<G: SimpleGame + ?Sized>(&self, game: &G) -> Vec<f64> {
        if let Some(v) = single_player(game) {
            return v;
        }
        let mut raw = vec![0.0; game.player_count()];
        for (_, pivots) in game.pivot_players(false) {
            if pivots.is_empty() {
                continue;
            }
            let share = 1.0 / pivots.len() as f64;
            for p in pivots {
                raw[p - 1] += share;
            }
        }
        normalize(raw)
    }
}

/// Σ_{T ∋ i} (n-|T|)! (|T|-1)! / n! · A(T), where A(T) is the average
/// marginal contribution of a member of T.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolidarityValue;

impl PowerIndex for SolidarityValue {
    fn name(&self) -> &'static str {
        "Solidarity Value"
    }

    fn compute<G: SimpleGame + ?Sized>(&self, game: &G) -> Vec<f64> {
        if let Some(v) = single_player(game) {
            return v;
        }
        let n = game.player_count();
        let mut solidarity = vec![0.0; n];
        for &t in game.coalitions().iter() {
            let v_t = game.value(t);
            let average: f64 = t
                .players()
                .map(|j| v_t - game.value(t.without(j)))
                .sum::<f64>()
                / t.len() as f64;
            let weighted = ordering_weight(n, t.len() - 1) * average;
            for i in t.players() {
                solidarity[i - 1] += weighted;
            }
        }
        solidarity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_close;
    use cogame_engine::{fixtures, WeightedVotingGame};

    #[test]
    fn test_shapley_shubik_index() {
        assert_close(
            &ShapleyShubikIndex.compute(&fixtures::voting_7_3_3().unwrap()),
            &[2.0 / 3.0, 1.0 / 6.0, 1.0 / 6.0],
        );
        assert_close(&ShapleyShubikIndex.compute(&fixtures::voting_8_4_1().unwrap()), &[0.5, 0.5, 0.0]);
        assert_close(
            &ShapleyShubikIndex.compute(&fixtures::voting_1_2_3().unwrap()),
            &[1.0 / 6.0, 1.0 / 6.0, 2.0 / 3.0],
        );
    }

    #[test]
    fn test_banzhaf_index() {
        assert_close(&BanzhafIndex.compute(&fixtures::voting_7_3_3().unwrap()), &[0.6, 0.2, 0.2]);
        assert_close(&BanzhafIndex.compute(&fixtures::voting_8_4_1().unwrap()), &[0.5, 0.5, 0.0]);
    }

    #[test]
    fn test_johnston_index() {
        assert_close(
            &JohnstonIndex.compute(&fixtures::voting_7_3_3().unwrap()),
            &[2.0 / 3.0, 1.0 / 6.0, 1.0 / 6.0],
        );
        assert_close(&JohnstonIndex.compute(&fixtures::voting_8_4_1().unwrap()), &[0.5, 0.5, 0.0]);
    }

    #[test]
    fn test_unanimity_game_is_symmetric() {
        let game = WeightedVotingGame::from_weights(vec![2, 1, 1, 1], 5).unwrap();
        for scores in [
            ShapleyShubikIndex.compute(&game),
            BanzhafIndex.compute(&game),
            JohnstonIndex.compute(&game),
        ] {
            assert_close(&scores, &[0.25; 4]);
        }
    }

    #[test]
    fn test_no_winning_coalition_gives_zeros() {
        let game = WeightedVotingGame::from_weights(vec![1, 2, 3], 99).unwrap();
        assert_eq!(BanzhafIndex.compute(&game), vec![0.0; 3]);
        assert_eq!(JohnstonIndex.compute(&game), vec![0.0; 3]);
        assert_eq!(ShapleyShubikIndex.compute(&game), vec![0.0; 3]);
    }

    #[test]
    fn test_solidarity_value() {
        let game = fixtures::voting_1_2_3().unwrap();
        let solidarity = SolidarityValue.compute(&game);
        let total: f64 = solidarity.iter().sum();
        // Efficient like the Shapley value
        assert!((total - 1.0).abs() < 1e-10);
        // Players 1 and 2 are symmetric apart from their weights
        assert!((solidarity[0] - solidarity[1]).abs() < 1e-10);
        assert_close(&solidarity, &[5.0 / 18.0, 5.0 / 18.0, 4.0 / 9.0]);
    }
}
