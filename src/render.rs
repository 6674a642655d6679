//! Text rendering of board states.
//!
//! The renderer only needs a symbol per cell code, in the same order as
//! the game's `position_states()`; it contains no game logic.

use crate::core::BoardState;

/// Renders boards as an ASCII grid with column headers and row indices.
///
/// ```text
///     0   1   2
/// 0 |   | x |   |
/// 1 | o |   |   |
/// 2 |   |   | x |
/// ```
pub struct BoardRenderer {
    symbols: Vec<char>,
}

impl BoardRenderer {
    /// Create a renderer mapping cell code `i` to `symbols[i]`.
    #[must_use]
    pub fn new(symbols: Vec<char>) -> Self {
        Self { symbols }
    }

    fn symbol(&self, code: u8) -> char {
        self.symbols.get(code as usize).copied().unwrap_or('?')
    }

    /// Render a board to a multi-line string.
    #[must_use]
    pub fn render(&self, state: &BoardState) -> String {
        let (rows, cols) = state.size();

        let header: Vec<String> = (0..cols).map(|c| c.to_string()).collect();
        let mut out = format!("    {}", header.join("   "));

        for r in 0..rows {
            let cells: Vec<String> = (0..cols)
                .map(|c| self.symbol(state.get(r, c)).to_string())
                .collect();
            out.push_str(&format!("\n{r} | {} |", cells.join(" | ")));
        }

        out
    }
}
