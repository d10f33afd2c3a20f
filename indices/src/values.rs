//! Value concepts for TU games: Shapley, Banzhaf, Gately point, Tau value

use cogame_engine::combinatorics::factorial;
use cogame_engine::CooperativeGame;

use crate::{ratio, single_player, Normalization, PowerValue};

/// Marginal contribution v(C ∪ {i}) - v(C) summed over every C ∌ i,
/// the empty coalition included, each term weighted by `weight(|C|)`.
pub(crate) fn weighted_swings<G, F>(game: &G, player: usize, weight: F) -> f64
where
    G: CooperativeGame + ?Sized,
    F: Fn(usize) -> f64,
{
    game.grand_coalition()
        .without(player)
        .subsets()
        .map(|c| weight(c.len()) * (game.value(c.with(player)) - game.value(c)))
        .sum()
}

/// Shapley value of every player.
///
/// Swings are weighted by the integer numerators |C|! (n-|C|-1)! and divided
/// by n! once, so integer-valued games come out exact.
pub(crate) fn shapley_shares<G: CooperativeGame + ?Sized>(game: &G) -> Vec<f64> {
    let n = game.player_count();
    let orderings = factorial(n);
    game.players()
        .map(|i| {
            weighted_swings(game, i, |size| factorial(size) * factorial(n - size - 1)) / orderings
        })
        .collect()
}

/// Average marginal contribution over all player orderings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapleyValue;

impl PowerValue for ShapleyValue {
    fn name(&self) -> &'static str {
        "Shapley Value"
    }

    fn compute<G: CooperativeGame + ?Sized>(&self, game: &G) -> Vec<f64> {
        if let Some(v) = single_player(game) {
            return v;
        }
        shapley_shares(game)
    }
}

/// Unweighted swing sums, either rescaled to v(N) or divided by 2^(n-1).
#[derive(Debug, Clone, Copy, Default)]
pub struct BanzhafValue {
    pub normalization: Normalization,
}

impl BanzhafValue {
    pub fn new(normalization: Normalization) -> Self {
        BanzhafValue { normalization }
    }
}

impl PowerValue for BanzhafValue {
    fn name(&self) -> &'static str {
        "Banzhaf Value"
    }

    fn compute<G: CooperativeGame + ?Sized>(&self, game: &G) -> Vec<f64> {
        if let Some(v) = single_player(game) {
            return v;
        }
        let swings: Vec<f64> = game
            .players()
            .map(|i| weighted_swings(game, i, |_| 1.0))
            .collect();
        let scale = match self.normalization {
            Normalization::Normalized => ratio(game.grand_value(), swings.iter().sum()),
            Normalization::Absolute => 1.0 / (1u64 << (game.player_count() - 1)) as f64,
        };
        swings.into_iter().map(|b| scale * b).collect()
    }
}

/// Efficient point on the segment from the singleton payoffs to the utopia
/// payoffs.
#[derive(Debug, Clone, Copy, Default)]
pub struct GatelyPoint;

impl PowerValue for GatelyPoint {
    fn name(&self) -> &'static str {
        "Gately Point"
    }

    fn compute<G: CooperativeGame + ?Sized>(&self, game: &G) -> Vec<f64> {
        if let Some(v) = single_player(game) {
            return v;
        }
        let singles: Vec<f64> = game.one_coalitions().iter().map(|&s| game.value(s)).collect();
        let utopia = game.utopia_payoff_vector();
        let singles_sum: f64 = singles.iter().sum();
        let surplus = game.grand_value() - singles_sum;
        let common_loss = utopia.iter().sum::<f64>() - singles_sum;

        singles
            .iter()
            .zip(&utopia)
            .map(|(&v_i, &m_i)| v_i + surplus * ratio(m_i - v_i, common_loss))
            .collect()
    }
}

/// Efficient point on the segment from the minimal rights vector m to the
/// utopia payoffs M: `m + λ (M - m)` with `Σ = v(N)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TauValue;

impl PowerValue for TauValue {
    fn name(&self) -> &'static str {
        "Tau Value"
    }

    fn compute<G: CooperativeGame + ?Sized>(&self, game: &G) -> Vec<f64> {
        if let Some(v) = single_player(game) {
            return v;
        }
        let minimal = game.minimal_rights_vector();
        let utopia = game.utopia_payoff_vector();
        let minimal_sum: f64 = minimal.iter().sum();
        let lambda = ratio(
            game.grand_value() - minimal_sum,
            utopia.iter().sum::<f64>() - minimal_sum,
        );

        minimal
            .iter()
            .zip(&utopia)
            .map(|(&m_i, &u_i)| m_i + lambda * (u_i - m_i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_close;
    use cogame_engine::fixtures;
    use cogame_engine::TuGame;

    fn game(payoffs: &[f64]) -> TuGame {
        TuGame::new(payoffs).unwrap()
    }

    #[test]
    fn test_shapley_value() {
        assert_close(&ShapleyValue.compute(&fixtures::three_player_core().unwrap()), &[9.5, 8.0, 6.5]);
        assert_close(
            &ShapleyValue.compute(&game(&[0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 7.5])),
            &[2.0, 2.5, 3.0],
        );
        assert_close(
            &ShapleyValue.compute(&fixtures::four_player().unwrap()),
            &[80.83333, 20.83333, 10.83333, 7.5],
        );
    }

    #[test]
    fn test_shapley_value_is_exact_on_integer_games() {
        let g = fixtures::supermodular_game(&[0.0, 0.0, 0.0, 1.0, 2.0], 1.0).unwrap();
        let shapley = ShapleyValue.compute(&g);
        assert_eq!(shapley, vec![4.0, 4.0, 4.0, 5.0, 6.0]);
        assert_eq!(g.is_in_imputation_set(&shapley), Ok(true));
    }

    #[test]
    fn test_shapley_value_is_efficient() {
        let g = fixtures::triangle_core().unwrap();
        let total: f64 = ShapleyValue.compute(&g).iter().sum();
        assert!((total - 135.0).abs() < 1e-10);
    }

    #[test]
    fn test_banzhaf_value() {
        let g = game(&[0.0, 0.0, 0.0, 1.0, 2.0, 1.0, 3.0]);
        assert_close(&BanzhafValue::default().compute(&g), &[15.0 / 13.0, 9.0 / 13.0, 15.0 / 13.0]);
        assert_close(
            &BanzhafValue::new(Normalization::Absolute).compute(&g),
            &[1.25, 0.75, 1.25],
        );

        let g = game(&[0.0, 0.0, 0.0, 1.0, 2.0, 1.0, 4.0]);
        assert_close(&BanzhafValue::default().compute(&g), &[1.5, 1.0, 1.5]);
        assert_close(&BanzhafValue::new(Normalization::Absolute).compute(&g), &[1.5, 1.0, 1.5]);
    }

    #[test]
    fn test_banzhaf_value_all_zero_game() {
        let g = game(&[0.0; 7]);
        assert_eq!(BanzhafValue::default().compute(&g), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_gately_point() {
        assert_close(
            &GatelyPoint.compute(&game(&[0.0, 0.0, 0.0, 4.0, 0.0, 3.0, 6.0])),
            &[18.0 / 11.0, 36.0 / 11.0, 12.0 / 11.0],
        );
        assert_close(
            &GatelyPoint.compute(&game(&[0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 3.5])),
            &[1.166667, 1.166667, 1.166667],
        );
        assert_close(
            &GatelyPoint.compute(&game(&[0.0, 0.0, 0.0, 1170.0, 770.0, 210.0, 1530.0])),
            &[827.7049, 476.5574, 225.7377],
        );
    }

    #[test]
    fn test_gately_point_degenerate_returns_singletons() {
        // Additive: utopia payoffs equal the singleton payoffs
        let g = game(&[1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0]);
        assert_eq!(GatelyPoint.compute(&g), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_tau_value() {
        assert_close(
            &TauValue.compute(&game(&[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0])),
            &[0.5, 0.0, 0.5],
        );
        assert_close(&TauValue.compute(&fixtures::three_player_core().unwrap()), &[11.5, 7.0, 5.5]);
        assert_close(
            &TauValue.compute(&game(&[0.0, 0.0, 0.0, 1.0, 2.0, 1.0, 3.0])),
            &[1.2, 0.6, 1.2],
        );
    }

    #[test]
    fn test_tau_value_degenerate_returns_minimal_rights() {
        let g = game(&[1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0]);
        assert_eq!(TauValue.compute(&g), g.minimal_rights_vector());
    }

    #[test]
    fn test_single_player_values() {
        let g = game(&[3.5]);
        assert_eq!(ShapleyValue.compute(&g), vec![3.5]);
        assert_eq!(BanzhafValue::new(Normalization::Absolute).compute(&g), vec![3.5]);
        assert_eq!(GatelyPoint.compute(&g), vec![3.5]);
        assert_eq!(TauValue.compute(&g), vec![3.5]);
    }
}
