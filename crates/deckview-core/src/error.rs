//! Error types for Deckview

use thiserror::Error;

/// Main error type for deck loading
#[derive(Error, Debug)]
pub enum DeckError {
    /// Reading the deck resource failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The response was not valid JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Valid JSON, but not shaped like a deck document
    #[error("Malformed deck: {0}")]
    Malformed(String),

    /// A custom source failed to produce any bytes
    #[error("Source error: {0}")]
    Source(String),
}

/// Result type alias using DeckError
pub type DeckResult<T> = Result<T, DeckError>;
