//! Game contract and the shared transition pipeline.
//!
//! Games implement [`GameDefinition`] to define:
//! - Board geometry, position states, and the move enumeration
//! - Legal moves for each state and player
//! - How a move transforms a state, and when a state is terminal
//!
//! [`GameEngine`] drives the validate/apply/evaluate sequence that is
//! identical for every game.

pub mod definition;
pub mod pipeline;

pub use definition::{GameDefinition, GameStatus};
pub use pipeline::{GameEngine, Transition};
