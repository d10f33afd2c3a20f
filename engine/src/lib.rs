//! cogame Engine - Coalition functions and the geometry built on them
//!
//! This crate contains the coalition universe, characteristic function
//! storage, the game abstraction shared by every solution concept, and the
//! LP-based core vertex enumeration.
//!
//! The engine performs no I/O and holds no global state. Games are immutable
//! after construction, so every query is a pure function of the game.

pub mod characteristic;
pub mod coalition;
pub mod combinatorics;
pub mod error;
pub mod fixtures;
pub mod game;
pub mod geometry;
pub mod lp;
pub mod predicates;
pub mod simple;
pub mod tu_game;
pub mod voting;

pub use characteristic::CharacteristicFunction;
pub use coalition::{Coalition, CoalitionUniverse, Player, MAX_PLAYERS};
pub use error::{GameError, Result};
pub use game::CooperativeGame;
pub use lp::{LinearProgram, LpSolver, SimplexSolver};
pub use simple::{PreferenceOptions, SimpleGame};
pub use tu_game::TuGame;
pub use voting::WeightedVotingGame;
