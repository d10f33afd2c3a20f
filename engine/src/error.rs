//! Error types for game construction and game queries.

use thiserror::Error;

use crate::coalition::Player;

/// Errors raised by the coalition engine.
///
/// Construction errors (`EmptyContributions` through `NegativeQuorum`) abort
/// building a game; no partially built game is ever returned. Argument errors
/// (`EmptyCoalition` through `VectorLengthMismatch`) abort a single query and
/// leave the game usable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// The contribution vector is empty.
    #[error("No contributions provided")]
    EmptyContributions,

    /// The contribution vector length is not 2^n - 1.
    #[error("Invalid length of the contributions vector: {len} is not 2^n - 1")]
    InvalidLength { len: usize },

    /// A coalition payoff is negative.
    #[error("Contributions have to be greater than or equal to 0 (index {index} has {value})")]
    NegativePayoff { index: usize, value: f64 },

    /// A size class has a smaller maximum payoff than some smaller size class.
    #[error(
        "Contributions have to grow monotone by coalition size: size {size} peaks at {max}, below {previous_max}"
    )]
    NonMonotoneContribution { size: usize, max: f64, previous_max: f64 },

    /// A game needs at least one player.
    #[error("A game needs at least one player")]
    NoPlayers,

    /// The player count exceeds what the coalition table can hold.
    #[error("{players} players exceed the supported maximum of {max}")]
    TooManyPlayers { players: usize, max: usize },

    /// The weight vector does not have one entry per player.
    #[error("Length of player vector and weight vector don't match: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// A player weight is negative.
    #[error("Weight vector contains negative weight {weight} for player {player}")]
    NegativeWeight { player: Player, weight: i64 },

    /// The quorum is negative.
    #[error("Quorum has to be greater than or equal to 0, got {quorum}")]
    NegativeQuorum { quorum: i64 },

    /// An operation needs a non-empty coalition.
    #[error("No coalition provided")]
    EmptyCoalition,

    /// A player id is outside `1..=n`.
    #[error("Player {player} is not part of the game")]
    InvalidPlayer { player: Player },

    /// The player is not a member of the coalition.
    #[error("Player {player} is not part of the coalition")]
    PlayerNotInCoalition { player: Player },

    /// A payoff vector does not have one entry per player.
    #[error("Input vector's length does not match the number of players: expected {expected}, got {got}")]
    VectorLengthMismatch { expected: usize, got: usize },

    /// The linear program has no feasible point.
    #[error("Linear program is infeasible")]
    Infeasible,

    /// The linear program objective is unbounded.
    #[error("Linear program is unbounded")]
    Unbounded,
}

impl GameError {
    /// Whether this error comes from validating construction input.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            GameError::EmptyContributions
                | GameError::InvalidLength { .. }
                | GameError::NegativePayoff { .. }
                | GameError::NonMonotoneContribution { .. }
                | GameError::NoPlayers
                | GameError::TooManyPlayers { .. }
                | GameError::LengthMismatch { .. }
                | GameError::NegativeWeight { .. }
                | GameError::NegativeQuorum { .. }
        )
    }
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, GameError>;
