//! A mutable game session with full history.
//!
//! `GameSession` owns the current triple (board, player to move, legal
//! moves, status) plus an append-only log of every board snapshot and a
//! per-player log of the moves played. It is the surface that interactive
//! loops and trace collectors drive; all state changes go through the
//! transition pipeline, never through direct mutation.
//!
//! A failed `play` leaves the session exactly as it was: validation runs
//! against the *stored* legal-move vector before anything is recorded,
//! which is also what makes a finished session reject every further move
//! (the stored vector goes all-false at the first terminal status).

use im::Vector;
use tracing::debug;

use crate::core::{BoardState, LegalMoves, Player, PlayerMap};
use crate::error::Result;
use crate::rules::{GameDefinition, GameEngine, GameStatus};

use super::trace::GameTrace;

/// One playthrough of a game, with history.
///
/// ## Example
///
/// ```
/// use gridgame::games::tictactoe::TicTacToe;
/// use gridgame::rules::GameStatus;
/// use gridgame::training::GameSession;
///
/// let mut session = GameSession::new(TicTacToe::new());
/// session.play_by_name("1, 1").unwrap();
///
/// assert_eq!(session.status(), GameStatus::Continuing);
/// assert_eq!(session.past_states().len(), 2); // initial + one move
/// ```
pub struct GameSession<G: GameDefinition> {
    engine: GameEngine<G>,
    state: BoardState,
    to_move: Player,
    legal: LegalMoves,
    status: GameStatus,
    /// Every board snapshot so far, initial position first. The persistent
    /// vector makes cloning the log O(1) for trace extraction.
    past_states: Vector<BoardState>,
    moves: PlayerMap<Vec<usize>>,
}

impl<G: GameDefinition> GameSession<G> {
    /// Start a session at the game's initial position.
    #[must_use]
    pub fn new(game: G) -> Self {
        let engine = GameEngine::new(game);
        let state = engine.initial_state();
        let legal = engine.game().valid_moves(&state, Player::One);
        let mut past_states = Vector::new();
        past_states.push_back(state.clone());

        Self {
            engine,
            state,
            to_move: Player::One,
            legal,
            status: GameStatus::Continuing,
            past_states,
            moves: PlayerMap::with_default(),
        }
    }

    /// Throw away all progress and return to the initial position.
    pub fn reset(&mut self) {
        debug!("session reset");
        self.state = self.engine.initial_state();
        self.to_move = Player::One;
        self.legal = self.engine.game().valid_moves(&self.state, Player::One);
        self.status = GameStatus::Continuing;
        self.past_states = Vector::new();
        self.past_states.push_back(self.state.clone());
        self.moves = PlayerMap::with_default();
    }

    /// Play one move for the player whose turn it is.
    ///
    /// On success the session advances: the new snapshot is appended to
    /// the state log, the slot to the acting player's move log, and the
    /// turn passes to the opponent. On failure nothing changes.
    pub fn play(&mut self, slot: usize) -> Result<GameStatus> {
        let player = self.to_move;
        let transition = self
            .engine
            .transition(&self.state, player, slot, &self.legal)?;

        self.moves[player].push(slot);
        self.past_states.push_back(transition.state.clone());
        self.state = transition.state;
        self.status = transition.status;
        self.legal = transition.next_legal;
        self.to_move = player.opponent();

        Ok(self.status)
    }

    /// Play one move addressed by its name.
    ///
    /// Name resolution happens before anything else, so an unknown name
    /// cannot leave the session half-updated.
    pub fn play_by_name(&mut self, move_name: &str) -> Result<GameStatus> {
        let slot = self.engine.move_index().resolve(move_name)?;
        self.play(slot)
    }

    /// The engine driving this session.
    #[must_use]
    pub fn engine(&self) -> &GameEngine<G> {
        &self.engine
    }

    /// The current board.
    #[must_use]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the status is terminal.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Legal moves for the player whose turn it is; all-false once the
    /// session is over.
    #[must_use]
    pub fn legal_moves(&self) -> &LegalMoves {
        &self.legal
    }

    /// The names of the currently legal moves, in slot order.
    #[must_use]
    pub fn valid_move_names(&self) -> Vec<&str> {
        let index = self.engine.move_index();
        self.legal.legal_slots().map(|slot| index.name(slot)).collect()
    }

    /// Every board snapshot so far, initial position first.
    #[must_use]
    pub fn past_states(&self) -> &Vector<BoardState> {
        &self.past_states
    }

    /// The slots `player` has played, in order.
    #[must_use]
    pub fn moves_for(&self, player: Player) -> &[usize] {
        &self.moves[player]
    }

    /// Total number of moves played by both players.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves[Player::One].len() + self.moves[Player::Two].len()
    }

    /// Snapshot the session as a serializable trace.
    #[must_use]
    pub fn trace(&self) -> GameTrace {
        GameTrace {
            states: self.past_states.iter().cloned().collect(),
            moves: self.moves.clone(),
            status: self.status,
        }
    }
}
