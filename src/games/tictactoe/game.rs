//! Tic-tac-toe game implementation.

use crate::core::{BoardState, LegalMoves, Player};
use crate::rules::{GameDefinition, GameStatus};

const ROWS: usize = 3;
const COLS: usize = 3;

/// Cell code for an unoccupied cell; occupied cells hold `player.code()`.
const EMPTY: u8 = 0;

/// Cell coordinates of the eight winning lines: three rows, three
/// columns, the main diagonal, and the anti-diagonal.
const WIN_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Tic-tac-toe on a 3x3 board.
///
/// Moves are named by their zero-indexed row/column pair in row-major
/// order (`"0, 0"` through `"2, 2"`), so slot `r*3 + c` targets cell
/// `(r, c)`.
pub struct TicTacToe {
    move_names: Vec<String>,
}

impl TicTacToe {
    /// Create the game definition, enumerating the nine cell moves.
    #[must_use]
    pub fn new() -> Self {
        let move_names = (0..ROWS)
            .flat_map(|r| (0..COLS).map(move |c| format!("{r}, {c}")))
            .collect();
        Self { move_names }
    }

    /// Display symbols matching `position_states()` order.
    #[must_use]
    pub fn symbols() -> [char; 3] {
        [' ', 'x', 'o']
    }

    /// The cell targeted by a move slot.
    fn cell_of(slot: usize) -> (usize, usize) {
        (slot / COLS, slot % COLS)
    }

    /// Whether `player` has three in a row anywhere on the board.
    fn wins(state: &BoardState, player: Player) -> bool {
        let code = player.code();
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|&(r, c)| state.get(r, c) == code))
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDefinition for TicTacToe {
    fn board_size(&self) -> (usize, usize) {
        (ROWS, COLS)
    }

    fn position_states(&self) -> &[&str] {
        &["empty", "player one piece", "player two piece"]
    }

    fn move_names(&self) -> &[String] {
        &self.move_names
    }

    fn initial_state(&self) -> BoardState {
        BoardState::new(ROWS, COLS)
    }

    fn valid_moves(&self, state: &BoardState, _player: Player) -> LegalMoves {
        // Any empty cell is a legal target, for either player.
        state.iter_cells().map(|code| code == EMPTY).collect()
    }

    fn evaluate(&self, state: &BoardState) -> GameStatus {
        // Player one is checked first: if both players somehow satisfied a
        // win condition at once (unreachable under alternating play), the
        // tie-break is deterministic in player one's favor.
        if Self::wins(state, Player::One) {
            GameStatus::PlayerOneWin
        } else if Self::wins(state, Player::Two) {
            GameStatus::PlayerTwoWin
        } else if !state.contains(EMPTY) {
            GameStatus::Draw
        } else {
            GameStatus::Continuing
        }
    }

    fn apply_move(&self, state: &BoardState, player: Player, slot: usize) -> BoardState {
        let (row, col) = Self::cell_of(slot);
        state.with_cell(row, col, player.code())
    }
}
