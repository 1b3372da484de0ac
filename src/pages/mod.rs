//! Page views for Deckview.

mod deck;

pub use deck::DeckPage;
