//! UI Components for Deckview.

mod card_grid;
mod card_tile;
mod detail_modal;
mod filter_bar;

pub use card_grid::{CardGrid, StatusLine};
pub use card_tile::CardTile;
pub use detail_modal::DetailModal;
pub use filter_bar::FilterBar;
