//! Card Tile Component

use deckview_core::view::NO_IMAGE_LABEL;
use deckview_core::TileView;
use dioxus::prelude::*;

/// Enter and Space activate a focused tile
fn activates(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

/// One card in the grid.
///
/// Click, Enter and Space all go through the same activation.
#[component]
pub fn CardTile(tile: TileView, on_open: EventHandler<usize>) -> Element {
    let index = tile.index;
    let activate = move || on_open.call(index);
    let label = tile.aria_label();

    rsx! {
        div {
            class: "card",
            tabindex: "0",
            role: "button",
            "aria-label": "{label}",
            onclick: move |_| activate(),
            onkeydown: move |evt: KeyboardEvent| {
                if activates(&evt.key()) {
                    // Space would otherwise scroll the grid.
                    evt.prevent_default();
                    activate();
                }
            },

            div { class: "thumb",
                if let Some(src) = &tile.image {
                    img {
                        "loading": "lazy",
                        src: "{src}",
                        alt: "{tile.name}",
                    }
                } else {
                    span { class: "thumb-placeholder", "{NO_IMAGE_LABEL}" }
                }
            }

            div { class: "card-body",
                h3 { class: "card-name", "{tile.name}" }
                p { class: "card-sub", "{tile.subtitle}" }
                div { class: "tags",
                    for tag in tile.tags.iter() {
                        span { class: "tag", "{tag}" }
                    }
                }
            }
        }
    }
}
