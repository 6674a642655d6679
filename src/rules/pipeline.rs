//! The shared transition pipeline: validate, apply, evaluate.
//!
//! `GameEngine` wraps a [`GameDefinition`] together with the move-name
//! index built once at construction. Every concrete game goes through the
//! same `play` sequence:
//!
//! 1. Range-check the move slot
//! 2. Check the slot against the legal-move vector
//! 3. Apply the move, producing a new state
//! 4. Evaluate the new state
//! 5. Compute the next player's legal moves (all-false once terminal)
//!
//! All validation happens before `apply_move`, so a failed `play` leaves
//! the caller's state untouched and can simply be retried.

use tracing::debug;

use crate::core::{BoardState, LegalMoves, MoveIndex, Player};
use crate::error::{Error, Result};

use super::definition::{GameDefinition, GameStatus};

/// The outcome of one successful `play` call.
#[derive(Clone, Debug)]
pub struct Transition {
    /// The board after the move.
    pub state: BoardState,
    /// Classification of the new board.
    pub status: GameStatus,
    /// Legal moves for the opposing player in the new board; all-false
    /// when `status` is terminal.
    pub next_legal: LegalMoves,
}

/// Move validation and state transition for one game definition.
///
/// ## Example
///
/// ```
/// use gridgame::games::tictactoe::TicTacToe;
/// use gridgame::rules::{GameEngine, GameStatus};
/// use gridgame::core::Player;
///
/// let engine = GameEngine::new(TicTacToe::new());
/// let state = engine.initial_state();
///
/// let transition = engine.play_by_name(&state, Player::One, "1, 1").unwrap();
/// assert_eq!(transition.status, GameStatus::Continuing);
/// assert!(!transition.next_legal.is_legal(4));
/// ```
pub struct GameEngine<G: GameDefinition> {
    game: G,
    move_index: MoveIndex,
}

impl<G: GameDefinition> GameEngine<G> {
    /// Wrap a game definition, building its move-name index.
    #[must_use]
    pub fn new(game: G) -> Self {
        let move_index = MoveIndex::new(game.move_names());
        Self { game, move_index }
    }

    /// The wrapped game definition.
    #[must_use]
    pub fn game(&self) -> &G {
        &self.game
    }

    /// The name/slot index for this game.
    #[must_use]
    pub fn move_index(&self) -> &MoveIndex {
        &self.move_index
    }

    /// Number of move slots.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.move_index.move_count()
    }

    /// A fresh starting position.
    #[must_use]
    pub fn initial_state(&self) -> BoardState {
        self.game.initial_state()
    }

    /// Validate and apply one move, returning the new state, its status,
    /// and the opposing player's legal moves.
    ///
    /// Fails with [`Error::MoveOutOfRange`] or [`Error::IllegalMove`]
    /// without touching `state`.
    pub fn play(&self, state: &BoardState, player: Player, slot: usize) -> Result<Transition> {
        let legal = self.game.valid_moves(state, player);
        self.transition(state, player, slot, &legal)
    }

    /// Like [`GameEngine::play`], addressing the move by name.
    ///
    /// Name resolution happens first, so an unknown name fails before any
    /// state work is attempted.
    pub fn play_by_name(
        &self,
        state: &BoardState,
        player: Player,
        move_name: &str,
    ) -> Result<Transition> {
        let slot = self.move_index.resolve(move_name)?;
        self.play(state, player, slot)
    }

    /// The names of the moves currently legal for `player`, in slot order.
    #[must_use]
    pub fn valid_move_names(&self, state: &BoardState, player: Player) -> Vec<&str> {
        self.game.valid_move_names(state, player)
    }

    /// Drive steps 1-5 against an already-computed legal-move vector.
    ///
    /// The session path stores the vector returned by the previous
    /// transition (all-false once terminal) and validates against *that*,
    /// which is what makes a finished session reject every further move.
    pub(crate) fn transition(
        &self,
        state: &BoardState,
        player: Player,
        slot: usize,
        legal: &LegalMoves,
    ) -> Result<Transition> {
        let move_count = self.move_count();
        if slot >= move_count {
            return Err(Error::MoveOutOfRange { slot, move_count });
        }
        if !legal.is_legal(slot) {
            return Err(Error::IllegalMove {
                slot,
                name: self.move_index.name(slot).to_string(),
            });
        }

        let new_state = self.game.apply_move(state, player, slot);
        let status = self.game.evaluate(&new_state);
        let next_legal = if status.is_terminal() {
            LegalMoves::all_false(move_count)
        } else {
            self.game.valid_moves(&new_state, player.opponent())
        };

        debug!(%player, slot, ?status, "applied move");

        Ok(Transition {
            state: new_state,
            status,
            next_legal,
        })
    }
}
