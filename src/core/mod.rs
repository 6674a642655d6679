//! Core engine types: boards, players, moves, RNG.
//!
//! This module contains the game-agnostic building blocks. Concrete games
//! give them meaning through the `rules` contract rather than by
//! modifying the core.

pub mod board;
pub mod moves;
pub mod player;
pub mod rng;

pub use board::BoardState;
pub use moves::{LegalMoves, MoveIndex};
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
