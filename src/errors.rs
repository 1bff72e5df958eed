//! Error types for position loading, move input and search configuration.
//!
//! Only recoverable failures live here. Corrupted internal state (an empty
//! bitboard handed to a bit scan, a move from an empty square during
//! application) is a bug and panics instead of being reported.

use thiserror::Error;

/// Errors reported to callers of the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Square index outside `0..=63`.
    #[error("square index {index} is out of range (must be 0-63)")]
    SquareOutOfRange { index: usize },

    /// Text that is not a square such as `e4`.
    #[error("invalid algebraic square: {text}")]
    InvalidSquare { text: String },

    /// A FEN record that could not be parsed.
    #[error("invalid FEN {field}: {reason}")]
    InvalidFen { field: &'static str, reason: String },

    /// Move text that does not have the `e2e4` / `e7e8q` shape.
    #[error("invalid move text: {text}")]
    InvalidMoveText { text: String },

    /// Promotion letter that names no promotable piece.
    #[error("invalid promotion piece: {piece}")]
    InvalidPromotion { piece: char },

    /// A well-formed move that is not legal in the current position.
    #[error("illegal move: {text}")]
    IllegalMove { text: String },

    /// Search parameters outside their supported range.
    #[error("invalid search configuration: {reason}")]
    InvalidConfig { reason: String },
}

/// Result alias used across the crate.
pub type ChessResult<T> = Result<T, ChessError>;

impl ChessError {
    pub(crate) fn fen(field: &'static str, reason: impl Into<String>) -> Self {
        ChessError::InvalidFen {
            field,
            reason: reason.into(),
        }
    }
}
