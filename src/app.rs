use deckview_core::{load_deck, FileSource, ModalState, DEFAULT_DECK_TITLE};
use dioxus::prelude::*;

use crate::context::LoadState;
use crate::get_config;
use crate::pages::DeckPage;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the session context, and runs the one deck
/// load of this process.
#[component]
pub fn App() -> Element {
    let mut load_state: Signal<LoadState> = use_signal(LoadState::default);
    let modal: Signal<ModalState> = use_signal(ModalState::default);

    use_context_provider(|| load_state);
    use_context_provider(|| modal);

    // use_hook runs once per mount, so the deck is fetched exactly once.
    use_hook(move || {
        spawn(async move {
            let source = FileSource::new(get_config().deck);
            load_state.set(LoadState::from_load(load_deck(&source).await));
        });
    });

    let title = match &*load_state.read() {
        LoadState::Ready(session) => session.title().to_string(),
        _ => DEFAULT_DECK_TITLE.to_string(),
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        document::Title { "{title}" }
        DeckPage { title }
    }
}
