//! Theme for Deckview.

mod styles;

pub use styles::GLOBAL_STYLES;
