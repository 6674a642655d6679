//! Concrete games shipped with the engine.

pub mod tictactoe;
