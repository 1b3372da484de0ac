//! Card Grid Component
//!
//! Status line plus the tile grid. Each render replaces every tile.

use deckview_core::{GridContent, GridView, EMPTY_GRID_MESSAGE};
use dioxus::prelude::*;

use super::CardTile;

/// The status text region
#[component]
pub fn StatusLine(text: String) -> Element {
    rsx! {
        p { class: "stats", role: "status", "{text}" }
    }
}

/// Grid of tiles for one filter result
#[component]
pub fn CardGrid(
    /// Result of the latest filter pass
    grid: GridView,
    /// Fired with the master-list index of an activated tile
    on_open: EventHandler<usize>,
) -> Element {
    let body = match &grid.content {
        GridContent::Empty => rsx! {
            div { class: "grid-empty", "{EMPTY_GRID_MESSAGE}" }
        },
        GridContent::Tiles(tiles) => rsx! {
            for tile in tiles.iter() {
                CardTile { key: "{tile.index}", tile: tile.clone(), on_open }
            }
        },
    };

    rsx! {
        StatusLine { text: grid.status.clone() }
        div { class: "grid", {body} }
    }
}
