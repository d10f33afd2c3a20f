//! Indices over minimal winning coalitions: Public Good, Shift, Holler and
//! Deegan-Packel

use cogame_engine::SimpleGame;

use crate::{membership_counts, normalize, ratio, single_player, Normalization, PowerIndex};

/// |W^m_i| / Σ_j |W^m_j|.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicGoodIndex;

impl PowerIndex for PublicGoodIndex {
    fn name(&self) -> &'static str {
        "Public-Good Index"
    }

    fn compute<G: SimpleGame + ?Sized>(&self, game: &G) -> Vec<f64> {
        if let Some(v) = single_player(game) {
            return v;
        }
        normalize(membership_counts(&game.minimal_winning_coalitions(), game.player_count()))
    }
}

/// Public Good over shift-minimal winning coalitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftIndex;

impl PowerIndex for ShiftIndex {
    fn name(&self) -> &'static str {
        "Shift Index"
    }

    fn compute<G: SimpleGame + ?Sized>(&self, game: &G) -> Vec<f64> {
        if let Some(v) = single_player(game) {
            return v;
        }
        normalize(membership_counts(&game.shift_winning_coalitions(), game.player_count()))
    }
}

/// |W^m_i|, optionally normalized to sum to 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct HollerIndex {
    pub normalization: Normalization,
}

impl HollerIndex {
    pub fn new(normalization: Normalization) -> Self {
        HollerIndex { normalization }
    }
}

impl PowerIndex for HollerIndex {
    fn name(&self) -> &'static str {
        "Holler Index"
    }

    fn compute<G: SimpleGame + ?Sized>(&self, game: &G) -> Vec<f64> {
        if let Some(v) = single_player(game) {
            return v;
        }
        let counts = membership_counts(&game.minimal_winning_coalitions(), game.player_count());
        match self.normalization {
            Normalization::Normalized => normalize(counts),
            Normalization::Absolute => counts,
        }
    }
}

/// Σ_{S ∈ W^m_i} 1/|S|; normalized form divides by |W^m|.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeeganPackelIndex {
    pub normalization: Normalization,
}

impl DeeganPackelIndex {
    pub fn new(normalization: Normalization) -> Self {
        DeeganPackelIndex { normalization }
    }
}

impl PowerIndex for DeeganPackelIndex {
    fn name(&self) -> &'static str {
        "Deegan-Packel Index"
    }

    fn compute<G: SimpleGame + ?Sized>(&self, game: &G) -> Vec<f64> {
        if let Some(v) = single_player(game) {
            return v;
        }
        let minimal = game.minimal_winning_coalitions();
        let mut raw = vec![0.0; game.player_count()];
        for s in &minimal {
            let share = 1.0 / s.len() as f64;
            for p in s.players() {
                raw[p - 1] += share;
            }
        }
        let scale = match self.normalization {
            Normalization::Normalized => ratio(1.0, minimal.len() as f64),
            Normalization::Absolute => 1.0,
        };
        raw.into_iter().map(|x| scale * x).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_close;
    use cogame_engine::{fixtures, WeightedVotingGame};

    #[test]
    fn test_public_good_index() {
        assert_close(&PublicGoodIndex.compute(&fixtures::voting_1_2_3().unwrap()), &[0.25, 0.25, 0.5]);
    }

    #[test]
    fn test_shift_index() {
        // (2,3) is not shift-minimal: swapping 2 for the weaker 1 keeps it minimal winning
        assert_close(&ShiftIndex.compute(&fixtures::voting_1_2_3().unwrap()), &[0.5, 0.0, 0.5]);
    }

    #[test]
    fn test_holler_index() {
        let game = fixtures::voting_1_2_3().unwrap();
        assert_eq!(HollerIndex::new(Normalization::Absolute).compute(&game), vec![1.0, 1.0, 2.0]);
        assert_close(&HollerIndex::default().compute(&game), &[0.25, 0.25, 0.5]);
    }

    #[test]
    fn test_deegan_packel_index() {
        let game = fixtures::voting_1_2_3().unwrap();
        assert_close(
            &DeeganPackelIndex::new(Normalization::Absolute).compute(&game),
            &[0.5, 0.5, 1.0],
        );
        assert_close(&DeeganPackelIndex::default().compute(&game), &[0.25, 0.25, 0.5]);
    }

    #[test]
    fn test_no_minimal_winning_coalitions() {
        for quorum in [99, 0] {
            let game = WeightedVotingGame::from_weights(vec![1, 2, 3], quorum).unwrap();
            assert_eq!(PublicGoodIndex.compute(&game), vec![0.0; 3]);
            assert_eq!(ShiftIndex.compute(&game), vec![0.0; 3]);
            assert_eq!(HollerIndex::default().compute(&game), vec![0.0; 3]);
            assert_eq!(DeeganPackelIndex::default().compute(&game), vec![0.0; 3]);
        }
    }
}
