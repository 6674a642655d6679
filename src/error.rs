//! Crate error types.
//!
//! Every variant signals a caller error; none are transient or retryable.
//! Validation happens strictly before any state is produced, so an `Err`
//! from the pipeline or a session always leaves the input untouched.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A move name that is not present in the game's move enumeration.
    /// Raised by name resolution, before any state work.
    #[error("'{name}' is not a valid move name")]
    UnknownMoveName { name: String },

    /// A move slot outside `[0, move_count)`.
    #[error("move slot {slot} is out of range for a game with {move_count} moves")]
    MoveOutOfRange { slot: usize, move_count: usize },

    /// A well-formed move slot that is not currently legal for the acting
    /// player. Carries both the slot and its name for debuggability.
    #[error("the move {slot} ({name}) is not allowed")]
    IllegalMove { slot: usize, name: String },

    /// A raw player code outside the two recognized values. Unreachable
    /// through the typed API; only raw-code decoding can produce it.
    #[error("{code} is not a valid player code (expected 1 or 2)")]
    InvalidPlayer { code: u8 },

    /// Trace persistence failure.
    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Trace encoding or decoding failure.
    #[error("trace serialization error: {0}")]
    TraceCodec(#[from] bincode::Error),
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
