//! Deckview Core Library
//!
//! Loading, indexing and filtering for a static deck of cards.
//!
//! ## Overview
//!
//! A deck is a JSON document with a title and an ordered list of cards. It is
//! fetched once, turned into an immutable [`Session`], and every change to the
//! search text or tag selection re-runs the matcher over the full card list.
//! The resulting [`GridView`] and [`DetailView`] values are plain data that a
//! front end (the desktop widget or the CLI) turns into pixels or text.
//!
//! ## Quick Start
//!
//! ```ignore
//! use deckview_core::{load_deck, FileSource, FilterController, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let deck = load_deck(&FileSource::new("cards.json")).await?;
//!     let session = Session::init(deck);
//!
//!     let mut controller = FilterController::new(session);
//!     let grid = controller.on_query_input("fire");
//!     println!("{}", grid.status);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loader;
pub mod logging;
pub mod matcher;
pub mod session;
pub mod tags;
pub mod types;
pub mod view;

// Re-exports
pub use error::{DeckError, DeckResult};
pub use loader::{load_deck, parse_deck, DeckSource, FileSource, DEFAULT_DECK_FILE};
pub use matcher::{matches, normalize};
pub use session::{FilterController, FilterCriteria, Session};
pub use tags::{build_tag_index, locale_cmp};
pub use types::{Card, Deck, DEFAULT_DECK_TITLE, UNTITLED};
pub use view::{
    escape_html, present, status_line, DetailView, DismissTrigger, GridContent,
    GridView, ModalState, Presentation, TileView, EMPTY_GRID_MESSAGE, LOAD_FAILURE_MESSAGE,
    TILE_TAG_LIMIT,
};
