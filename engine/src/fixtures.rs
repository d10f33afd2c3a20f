//! Reference games shared by tests and benchmarks
//!
//! Payoff vectors are listed in canonical coalition order:
//!   3 players: (1) (2) (3) (1,2) (1,3) (2,3) (1,2,3)
//!
//! Generated games are seeded with a small LCG so benchmark inputs are
//! reproducible without pulling in an RNG crate.

use crate::coalition::CoalitionUniverse;
use crate::characteristic::CharacteristicFunction;
use crate::error::Result;
use crate::tu_game::TuGame;
use crate::voting::WeightedVotingGame;

/// Three players with a four-vertex core: {[8,10,6], [9,10,5], [14,4,6], [15,4,5]}.
pub const THREE_PLAYER_CORE: [f64; 7] = [2.0, 4.0, 5.0, 18.0, 14.0, 9.0, 24.0];

/// Core collapses to the single point [1, 2, 3].
pub const POINT_CORE: [f64; 7] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

/// Zero singletons, asymmetric pairs; core is a triangle.
pub const TRIANGLE_CORE: [f64; 7] = [0.0, 0.0, 0.0, 60.0, 80.0, 100.0, 135.0];

/// Four-player game with a dominant first player.
pub const FOUR_PLAYER: [f64; 15] = [
    120.0, 60.0, 40.0, 30.0, 120.0, 120.0, 120.0, 60.0, 60.0, 40.0, 120.0, 120.0, 120.0, 60.0, 120.0,
];

/// Every coalition is worth its size.
pub const ADDITIVE_FOUR_PLAYER: [f64; 15] = [
    1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0, 3.0, 4.0,
];

pub fn three_player_core() -> Result<TuGame> {
    build(&THREE_PLAYER_CORE)
}

pub fn point_core() -> Result<TuGame> {
    build(&POINT_CORE)
}

pub fn triangle_core() -> Result<TuGame> {
    build(&TRIANGLE_CORE)
}

pub fn four_player() -> Result<TuGame> {
    build(&FOUR_PLAYER)
}

/// Weights [1, 2, 3], quorum 4: minimal winning (1,3) and (2,3).
pub fn voting_1_2_3() -> Result<WeightedVotingGame> {
    WeightedVotingGame::from_weights(vec![1, 2, 3], 4)
}

/// Weights [7, 3, 3], quorum 10: player 1 is needed in every winning coalition.
pub fn voting_7_3_3() -> Result<WeightedVotingGame> {
    WeightedVotingGame::from_weights(vec![7, 3, 3], 10)
}

/// Weights [8, 4, 1], quorum 10: player 3 is a null player.
pub fn voting_8_4_1() -> Result<WeightedVotingGame> {
    WeightedVotingGame::from_weights(vec![8, 4, 1], 10)
}

fn build(payoffs: &[f64]) -> Result<TuGame> {
    TuGame::new(payoffs)
}

/// v(S) = Σ_{i∈S} singles_i + synergy · |S| (|S| - 1).
///
/// Non-negative `singles` and `synergy` give a monotone, convex and
/// superadditive game.
pub fn supermodular_game(singles: &[f64], synergy: f64) -> Result<TuGame> {
    let universe = CoalitionUniverse::new(singles.len())?;
    let v = CharacteristicFunction::from_fn(universe, |s| {
        let size = s.len() as f64;
        s.players().map(|p| singles[p - 1]).sum::<f64>() + synergy * size * (size - 1.0)
    });
    TuGame::new(&v.payoffs())
}

/// Simple LCG for deterministic inputs.
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    pub fn next(&mut self) -> u64 {
        self.state = (self.state.wrapping_mul(1103515245).wrapping_add(12345)) & 0x7fffffff;
        self.state
    }

    /// Uniform integer in `0..bound`.
    pub fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

/// Integer-valued supermodular game of `players` players.
pub fn random_supermodular_game(players: usize, seed: u64) -> Result<TuGame> {
    let mut lcg = Lcg::new(seed);
    let singles: Vec<f64> = (0..players).map(|_| lcg.below(20) as f64).collect();
    let synergy = (1 + lcg.below(5)) as f64;
    supermodular_game(&singles, synergy)
}

/// Weighted voting game with weights in `1..=max_weight` and a simple
/// majority quorum.
pub fn random_voting_game(players: usize, max_weight: u64, seed: u64) -> Result<WeightedVotingGame> {
    let mut lcg = Lcg::new(seed);
    let weights: Vec<i64> = (0..players)
        .map(|_| 1 + lcg.below(max_weight) as i64)
        .collect();
    let quorum = weights.iter().sum::<i64>() / 2 + 1;
    WeightedVotingGame::from_weights(weights, quorum)
}
