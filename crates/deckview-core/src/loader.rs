//! Deck Loader
//!
//! Fetches the deck document once and decodes it. The fetch is behind the
//! [`DeckSource`] trait so the desktop app, the CLI and the tests can each
//! supply their own resource.

use std::future::Future;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{DeckError, DeckResult};
use crate::types::Deck;

/// Resource loaded when nothing else is configured
pub const DEFAULT_DECK_FILE: &str = "cards.json";

/// Something that can produce the raw bytes of a deck document.
pub trait DeckSource {
    /// Human-readable origin, used in log lines
    fn describe(&self) -> String;

    /// Fetch the raw document. Implementations must not cache.
    fn fetch(&self) -> impl Future<Output = DeckResult<Vec<u8>>> + Send;
}

/// Deck document on the local filesystem.
///
/// Every fetch reads the file again.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(DEFAULT_DECK_FILE)
    }
}

impl DeckSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> impl Future<Output = DeckResult<Vec<u8>>> + Send {
        async move { tokio::fs::read(&self.path).await.map_err(DeckError::from) }
    }
}

/// Decode a deck document from raw bytes
pub fn parse_deck(bytes: &[u8]) -> DeckResult<Deck> {
    let value: Value = serde_json::from_slice(bytes)?;
    Deck::from_value(value)
}

/// Fetch and decode a deck from `source`.
///
/// Failures are logged here with their cause; callers only need to show the
/// generic failure message.
pub async fn load_deck<S: DeckSource>(source: &S) -> DeckResult<Deck> {
    let origin = source.describe();
    tracing::debug!(source = %origin, "Fetching deck");

    let bytes = source.fetch().await.inspect_err(|e| {
        tracing::error!(source = %origin, error = %e, "Failed to fetch deck");
    })?;

    let deck = parse_deck(&bytes).inspect_err(|e| {
        tracing::error!(source = %origin, error = %e, "Failed to parse deck");
    })?;

    tracing::info!(
        source = %origin,
        title = deck.title(),
        cards = deck.len(),
        "Deck loaded"
    );
    Ok(deck)
}
