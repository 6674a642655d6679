//! Game definition contract.
//!
//! Concrete games implement `GameDefinition` to declare:
//! - Board geometry and the set of position states
//! - The fixed move enumeration (names define slots)
//! - How legal moves are computed, how a move transforms a state, and
//!   when a state is terminal
//!
//! The transition pipeline calls these operations but never interprets
//! game-specific concepts directly.

use crate::core::{BoardState, LegalMoves, Player};

/// Terminal/non-terminal classification of a board state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GameStatus {
    /// The game goes on; the next player has moves to make.
    Continuing,
    /// Player one has met the game's win condition.
    PlayerOneWin,
    /// Player two has met the game's win condition.
    PlayerTwoWin,
    /// The game ended with no winner.
    Draw,
}

impl GameStatus {
    /// True for every status except `Continuing`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Continuing)
    }

    /// The winning player, if there is one.
    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::PlayerOneWin => Some(Player::One),
            GameStatus::PlayerTwoWin => Some(Player::Two),
            GameStatus::Continuing | GameStatus::Draw => None,
        }
    }

    /// The status announcing a win for `player`.
    #[must_use]
    pub fn win_for(player: Player) -> GameStatus {
        match player {
            Player::One => GameStatus::PlayerOneWin,
            Player::Two => GameStatus::PlayerTwoWin,
        }
    }
}

/// The contract every concrete game implements.
///
/// ## Implementation notes
///
/// - `valid_moves` and `evaluate` are pure functions of their inputs; the
///   pipeline may call them repeatedly and expects identical answers.
/// - `evaluate` classifies the cells alone; it must not assume whose turn
///   produced the state.
/// - `apply_move` receives a *pre-validated* slot. Validation is the
///   pipeline's job; implementations may assume the move is legal.
/// - `apply_move` returns a fresh `BoardState` and leaves its input
///   untouched, so histories that reference earlier snapshots stay valid.
/// - `move_names()` ordering defines the slot numbering and is fixed for
///   the definition's lifetime.
pub trait GameDefinition {
    /// Fixed board geometry as `(rows, cols)`.
    fn board_size(&self) -> (usize, usize);

    /// Ordered names of the position states a cell can be in, for display
    /// and debugging. Cell code `i` means the `i`-th name; at least two
    /// states (an "empty" plus one occupied) are expected.
    fn position_states(&self) -> &[&str];

    /// The ordered, unique names of every move the game will ever offer.
    /// A move's slot is its position in this list.
    fn move_names(&self) -> &[String];

    /// The starting position. A fresh allocation on every call, never
    /// shared between sessions.
    fn initial_state(&self) -> BoardState;

    /// Which move slots are legal for `player` in `state`. The returned
    /// vector always has length `move_count()`.
    fn valid_moves(&self, state: &BoardState, player: Player) -> LegalMoves;

    /// Terminal/non-terminal classification of `state`.
    fn evaluate(&self, state: &BoardState) -> GameStatus;

    /// Apply a pre-validated move for `player`, returning the new state.
    fn apply_move(&self, state: &BoardState, player: Player, slot: usize) -> BoardState;

    /// Number of move slots, as defined by `move_names()`.
    fn move_count(&self) -> usize {
        self.move_names().len()
    }

    /// The names of the moves currently legal for `player` in `state`, in
    /// slot order.
    fn valid_move_names(&self, state: &BoardState, player: Player) -> Vec<&str> {
        let legal = self.valid_moves(state, player);
        self.move_names()
            .iter()
            .enumerate()
            .filter(|&(slot, _)| legal.is_legal(slot))
            .map(|(_, name)| name.as_str())
            .collect()
    }
}
