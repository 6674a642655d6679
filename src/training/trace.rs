//! Serializable game records for training-data collection.
//!
//! A `GameTrace` is a self-contained record of one playthrough: every
//! board snapshot (initial position first), each player's moves in order,
//! and the final status. `TraceBuffer` collects traces with FIFO eviction
//! and can persist itself to disk in a compact binary form.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{BoardState, Player, PlayerMap};
use crate::error::{Error, Result};
use crate::rules::GameStatus;

/// A complete record of one game.
///
/// `states` always holds one more entry than the total number of moves:
/// the initial position plus one snapshot per move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameTrace {
    /// Every board snapshot, initial position first.
    pub states: Vec<BoardState>,
    /// Each player's move slots, in the order they were played.
    pub moves: PlayerMap<Vec<usize>>,
    /// Status of the final state.
    pub status: GameStatus,
}

impl GameTrace {
    /// Total number of moves recorded.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves[Player::One].len() + self.moves[Player::Two].len()
    }

    /// True if no moves were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.move_count() == 0
    }

    /// Per-player reward for the recorded outcome: 1.0 to the winner and
    /// 0.0 to the loser, 0.5 each on a draw or an unfinished game.
    #[must_use]
    pub fn rewards(&self) -> PlayerMap<f64> {
        match self.status.winner() {
            Some(winner) => PlayerMap::new(|p| if p == winner { 1.0 } else { 0.0 }),
            None => PlayerMap::with_value(0.5),
        }
    }

    /// The final board snapshot.
    #[must_use]
    pub fn final_state(&self) -> &BoardState {
        self.states
            .last()
            .expect("a trace always contains the initial state")
    }
}

/// Bounded FIFO collection of game traces.
///
/// When full, pushing evicts the oldest trace.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TraceBuffer {
    traces: VecDeque<GameTrace>,
    max_traces: usize,
}

impl TraceBuffer {
    /// Create a buffer holding at most `max_traces` traces.
    #[must_use]
    pub fn new(max_traces: usize) -> Self {
        Self {
            traces: VecDeque::with_capacity(max_traces),
            max_traces,
        }
    }

    /// Add a trace, evicting the oldest if the buffer is full.
    pub fn push(&mut self, trace: GameTrace) {
        if self.traces.len() >= self.max_traces {
            self.traces.pop_front();
        }
        self.traces.push_back(trace);
    }

    /// Number of traces currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    /// True if no traces are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Maximum number of traces the buffer will hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_traces
    }

    /// Drop all traces.
    pub fn clear(&mut self) {
        self.traces.clear();
    }

    /// Iterate over traces, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &GameTrace> {
        self.traces.iter()
    }

    /// Total number of moves across all traces.
    #[must_use]
    pub fn total_moves(&self) -> usize {
        self.traces.iter().map(GameTrace::move_count).sum()
    }

    /// Write the buffer to a file in compact binary form.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = bincode::serialize(self)?;
        fs::write(path.as_ref(), bytes).map_err(|source| Error::Io {
            operation: format!("write trace buffer to {}", path.as_ref().display()),
            source,
        })
    }

    /// Read a buffer previously written by [`TraceBuffer::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path.as_ref()).map_err(|source| Error::Io {
            operation: format!("read trace buffer from {}", path.as_ref().display()),
            source,
        })?;
        Ok(bincode::deserialize(&bytes)?)
    }
}
