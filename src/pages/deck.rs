//! Deck page: header, filter controls, grid and detail dialog.

use deckview_core::FilterController;
use dioxus::prelude::*;

use crate::components::{CardGrid, DetailModal, FilterBar, StatusLine};
use crate::context::{use_load_state, use_modal, SessionHandle};

/// The single page of the widget.
///
/// Filter controls and tiles only exist once the session is ready; while
/// loading, or after a failed load, the page shows just a status line.
#[component]
pub fn DeckPage(title: String) -> Element {
    let load_state = use_load_state();

    let state = load_state();
    let body = match (state.session(), state.status_text()) {
        (Some(session), _) => rsx! { DeckBrowser { session } },
        (None, status) => rsx! {
            StatusLine { text: status.unwrap_or_default().to_string() }
            div { class: "grid" }
        },
    };

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { class: "title", "{title}" }
            }
            {body}
        }
    }
}

/// Search, tag filter, grid and dialog over a loaded session.
///
/// Every input event runs one full filter pass and replaces the grid.
#[component]
fn DeckBrowser(session: SessionHandle) -> Element {
    let mut controller = use_signal(|| FilterController::new(session.0.clone()));
    let mut grid = use_signal(|| controller.peek().refresh());
    let mut query = use_signal(String::new);
    let mut selected_tag = use_signal(String::new);
    let mut modal = use_modal();

    let on_query = move |text: String| {
        let view = controller.write().on_query_input(&text);
        query.set(text);
        grid.set(view);
    };

    let on_tag = move |value: String| {
        let view = controller.write().on_tag_change(&value);
        selected_tag.set(value);
        grid.set(view);
    };

    let on_open = move |index: usize| {
        tracing::debug!(index, "Card activated");
        modal.write().open(index);
    };

    rsx! {
        FilterBar {
            query: query(),
            tags: session.tags().to_vec(),
            selected: selected_tag(),
            on_query,
            on_tag,
        }
        CardGrid { grid: grid(), on_open }
        DetailModal { session: session.clone() }
    }
}
