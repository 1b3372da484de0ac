//! Session context for Deckview.
//!
//! The loaded session and the detail-dialog state are provided once by the
//! root component and read by children through the hooks below.

use std::sync::Arc;

use deckview_core::{Deck, DeckResult, ModalState, Session, LOAD_FAILURE_MESSAGE};
use dioxus::prelude::*;

/// Status text while the deck is being fetched
pub const LOADING_MESSAGE: &str = "Loading cards…";

/// Shared, read-only session handle.
///
/// Compares by pointer so it can be used in props and signals without
/// requiring the session itself to be comparable.
#[derive(Debug, Clone)]
pub struct SessionHandle(pub Arc<Session>);

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for SessionHandle {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.0
    }
}

/// Where deck initialization stands.
///
/// Moves from `Loading` to exactly one of `Ready` or `Failed` and never back.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(SessionHandle),
    Failed,
}

impl LoadState {
    /// Settle the outcome of the one deck load.
    ///
    /// A failure carries no detail; the loader has already logged the cause.
    pub fn from_load(result: DeckResult<Deck>) -> Self {
        match result {
            Ok(deck) => LoadState::Ready(SessionHandle(Session::init(deck))),
            Err(e) => {
                tracing::debug!("Deck initialization stopped: {}", e);
                LoadState::Failed
            }
        }
    }

    pub fn session(&self) -> Option<SessionHandle> {
        match self {
            LoadState::Ready(handle) => Some(handle.clone()),
            _ => None,
        }
    }

    /// Text for the status region when there is no grid to report on
    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            LoadState::Loading => Some(LOADING_MESSAGE),
            LoadState::Ready(_) => None,
            LoadState::Failed => Some(LOAD_FAILURE_MESSAGE),
        }
    }
}

/// Hook to access the deck load state from context.
pub fn use_load_state() -> Signal<LoadState> {
    use_context::<Signal<LoadState>>()
}

/// Hook to access the detail dialog state from context.
///
/// Tiles write `Open(index)`; the dialog clears it on dismissal.
pub fn use_modal() -> Signal<ModalState> {
    use_context::<Signal<ModalState>>()
}
