//! Sessions, traces, and random self-play.
//!
//! This module is the history-tracking layer on top of the transition
//! pipeline, sized for RL-style data collection:
//!
//! - **GameSession**: one playthrough with the current position and full
//!   state/move history
//! - **GameTrace**: a serializable record of a finished (or in-progress)
//!   session
//! - **TraceBuffer**: bounded FIFO trace collection with save/load
//! - **SelfPlayWorker**: reproducible random playouts that fill traces
//!
//! ## Usage
//!
//! ```
//! use gridgame::games::tictactoe::TicTacToe;
//! use gridgame::training::{SelfPlayConfig, SelfPlayWorker, TraceBuffer};
//!
//! let mut worker = SelfPlayWorker::new(TicTacToe::new(), SelfPlayConfig::default());
//! let mut buffer = TraceBuffer::new(100);
//!
//! for trace in worker.play_games(10).unwrap() {
//!     buffer.push(trace);
//! }
//!
//! assert_eq!(buffer.len(), 10);
//! ```

pub mod self_play;
pub mod session;
pub mod trace;

pub use self_play::{SelfPlayConfig, SelfPlayWorker};
pub use session::GameSession;
pub use trace::{GameTrace, TraceBuffer};
