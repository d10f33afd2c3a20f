//! Property-based tests for value concepts and power indices.

use proptest::prelude::*;

use cogame_engine::fixtures::supermodular_game;
use cogame_engine::{CooperativeGame, WeightedVotingGame};
use cogame_indices::{
    power_indices, BanzhafValue, PowerIndex, PowerValue, ShapleyShubikIndex, ShapleyValue,
};

/// Strategy: integer singleton payoffs for 2-5 players plus a synergy bonus.
fn supermodular_strategy() -> impl Strategy<Value = (Vec<f64>, f64)> {
    (2usize..=5).prop_flat_map(|n| {
        (
            prop::collection::vec((0u32..20).prop_map(f64::from), n),
            (0u32..6).prop_map(f64::from),
        )
    })
}

/// Strategy: 2-6 weights in 0..10 and a quorum up to the total weight.
fn voting_strategy() -> impl Strategy<Value = (Vec<i64>, i64)> {
    prop::collection::vec(0i64..10, 2..=6).prop_flat_map(|weights| {
        let total: i64 = weights.iter().sum();
        (Just(weights), 0..=total + 1)
    })
}

proptest! {
    // 1. The Shapley value is efficient
    #[test]
    fn shapley_efficient((singles, synergy) in supermodular_strategy()) {
        let game = supermodular_game(&singles, synergy).unwrap();
        let total: f64 = ShapleyValue.compute(&game).iter().sum();
        prop_assert!((total - game.grand_value()).abs() < 1e-9);
    }

    // 2. The normalized Banzhaf value is efficient
    #[test]
    fn banzhaf_efficient((singles, synergy) in supermodular_strategy()) {
        let game = supermodular_game(&singles, synergy).unwrap();
        let total: f64 = BanzhafValue::default().compute(&game).iter().sum();
        prop_assert!((total - game.grand_value()).abs() < 1e-9);
    }

    // 3. In superadditive games the Shapley value is an imputation
    #[test]
    fn shapley_in_imputation_set((singles, synergy) in supermodular_strategy()) {
        let game = supermodular_game(&singles, synergy).unwrap();
        let shapley = ShapleyValue.compute(&game);
        prop_assert_eq!(game.is_in_imputation_set(&shapley), Ok(true), "x={:?}", shapley);
    }

    // 4. Shapley-Shubik is the Shapley value of the simple game
    #[test]
    fn shapley_shubik_matches_shapley((weights, quorum) in voting_strategy()) {
        let game = WeightedVotingGame::from_weights(weights, quorum).unwrap();
        let ssi = ShapleyShubikIndex.compute(&game);
        let shapley = ShapleyValue.compute(&game);
        for (a, b) in ssi.iter().zip(&shapley) {
            prop_assert!((a - b).abs() < 1e-12);
        }
    }

    // 5. Indices are finite, non-negative, and repeatable
    #[test]
    fn indices_well_formed((weights, quorum) in voting_strategy()) {
        let game = WeightedVotingGame::from_weights(weights, quorum).unwrap();
        let first = power_indices(&game);
        for (name, scores) in &first {
            prop_assert_eq!(scores.len(), game.player_count());
            for x in scores {
                prop_assert!(x.is_finite() && *x >= 0.0, "{name}: {scores:?}");
            }
        }
        prop_assert_eq!(first, power_indices(&game));
    }
}
