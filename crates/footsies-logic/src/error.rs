//! Error type shared by the whole engine

use derive_more::{Display, Error};

/// Everything that can go wrong while configuring or running a match.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum FootsiesError {
    /// A key that is not bound to any move in the catalog.
    #[display("unknown move key `{key}`")]
    UnknownMoveKey { key: String },
    /// A raw rank that does not belong to any move.
    #[display("invalid move rank {value}")]
    InvalidMove { value: u8 },
    /// Replay seeds are exactly 32 bytes.
    #[display("seed must be exactly 32 bytes, got {len}")]
    InvalidSeed { len: usize },
    /// Rejected at construction.
    #[display("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
    /// A player could not produce a move.
    #[display("player `{name}` failed to act: {message}")]
    Player { name: String, message: String },
}

impl FootsiesError {
    pub fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }

    pub fn player(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Player { name: name.into(), message: message.into() }
    }
}
