//! Tic-tac-toe (noughts and crosses).
//!
//! A full instantiation of the game contract: 3x3 board, nine moves named
//! by their zero-indexed row/column pair, win on three in a row along any
//! row, column, or diagonal.

mod game;

pub use game::TicTacToe;
