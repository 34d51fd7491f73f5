//! Statement error model.

use thiserror::Error;

use crate::id::PlayId;

/// Result type used across the billing pipeline.
pub type StatementResult<T> = Result<T, StatementError>;

/// Failure while computing a statement.
///
/// Every variant is fatal to the request: no partial statement is ever
/// produced once one of these is raised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatementError {
    /// A performance references a play missing from the catalog.
    #[error("unknown play: {0}")]
    UnknownPlay(PlayId),

    /// A play has a genre with no registered pricing rule.
    #[error("unknown genre: {0}")]
    UnknownGenre(String),

    /// An amount or credit sum does not fit in its integer representation.
    #[error("amount overflow: {0}")]
    AmountOverflow(String),
}

impl StatementError {
    pub fn unknown_play(id: impl Into<PlayId>) -> Self {
        Self::UnknownPlay(id.into())
    }

    pub fn unknown_genre(genre: impl Into<String>) -> Self {
        Self::UnknownGenre(genre.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::AmountOverflow(msg.into())
    }
}
