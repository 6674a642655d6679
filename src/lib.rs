//! # gridgame
//!
//! A generic engine for two-player, turn-based games on a fixed-size
//! square board, with RL-style trace collection.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Core**: The engine validates, applies, and
//!    evaluates moves; games define what a move *is* via the
//!    `GameDefinition` contract.
//!
//! 2. **Immutable Snapshots**: Applying a move always produces a new
//!    `BoardState`; history that references earlier positions stays
//!    valid without copies or locks.
//!
//! 3. **Fail Before Mutation**: Every validation runs before any state
//!    is produced, so an error leaves sessions exactly as they were.
//!
//! ## Modules
//!
//! - `core`: Board snapshots, players, the move vocabulary, RNG
//! - `rules`: The `GameDefinition` contract and the transition pipeline
//! - `games`: Shipped games (tic-tac-toe)
//! - `training`: Sessions, serializable traces, random self-play
//! - `render`: Text rendering of board states
//! - `error`: The crate error taxonomy

pub mod core;
pub mod error;
pub mod games;
pub mod render;
pub mod rules;
pub mod training;

// Re-export commonly used types
pub use crate::core::{BoardState, GameRng, LegalMoves, MoveIndex, Player, PlayerMap};

pub use crate::error::{Error, Result};

pub use crate::rules::{GameDefinition, GameEngine, GameStatus, Transition};

pub use crate::training::{GameSession, GameTrace, SelfPlayConfig, SelfPlayWorker, TraceBuffer};

pub use crate::render::BoardRenderer;
