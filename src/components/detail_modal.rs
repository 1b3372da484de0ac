//! Detail Modal Component
//!
//! Shows one card in full inside the webview's native `<dialog>`. When the
//! dialog API is missing (or `--no-dialog` is set) the card goes to a plain
//! message box instead.

use deckview_core::{present, DetailView, DismissTrigger, ModalState, Presentation};
use dioxus::prelude::*;

use crate::context::{use_modal, SessionHandle};
use crate::get_config;

const DIALOG_ID: &str = "detail-dialog";

/// Whether the host webview implements `HTMLDialogElement.showModal`
async fn dialog_supported() -> bool {
    let probe = document::eval(
        r#"return typeof HTMLDialogElement === "function"
            && typeof HTMLDialogElement.prototype.showModal === "function";"#,
    );
    matches!(probe.await, Ok(serde_json::Value::Bool(true)))
}

async fn show_dialog() {
    let script = format!(
        r#"const d = document.getElementById("{DIALOG_ID}");
        if (d && !d.open) d.showModal();
        return true;"#
    );
    if let Err(e) = document::eval(&script).await {
        tracing::warn!("Failed to open detail dialog: {:?}", e);
    }
}

async fn close_dialog() {
    let script = format!(
        r#"const d = document.getElementById("{DIALOG_ID}");
        if (d && d.open) d.close();
        return true;"#
    );
    if let Err(e) = document::eval(&script).await {
        tracing::warn!("Failed to close detail dialog: {:?}", e);
    }
}

/// Reports every native `close` of the dialog back to Rust.
///
/// `close` does not bubble, so the listener sits on the document in the
/// capture phase and works before the dialog is mounted.
fn close_listener_script() -> String {
    format!(
        r#"document.addEventListener("close", (e) => {{
            if (e.target && e.target.id === "{DIALOG_ID}") dioxus.send(true);
        }}, true);"#
    )
}

/// Blocking message box, run off the UI thread
async fn show_alert(title: String, text: String) {
    let shown = tokio::task::spawn_blocking(move || {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title(&title)
            .set_description(&text)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    })
    .await;

    if let Err(e) = shown {
        tracing::error!("Alert fallback failed: {}", e);
    }
}

fn dismiss(
    mut modal: Signal<ModalState>,
    mut detail: Signal<Option<DetailView>>,
    trigger: DismissTrigger,
) {
    if modal.write().dismiss(trigger) {
        detail.set(None);
        spawn(close_dialog());
    }
}

/// Detail dialog for the card selected in [`ModalState`].
///
/// Dismissed by the close button, a click on the backdrop, Escape, or the
/// dialog closing natively.
#[component]
pub fn DetailModal(session: SessionHandle) -> Element {
    let mut modal = use_modal();
    let mut detail = use_signal(|| Option::<DetailView>::None);
    let no_dialog = get_config().no_dialog;

    // The webview can close the dialog on its own (cancel on Escape), which
    // must leave the state closed too. Our own close lands here as a no-op.
    use_hook(move || {
        spawn(async move {
            let mut closes = document::eval(&close_listener_script());
            while closes.recv::<bool>().await.is_ok() {
                dismiss(modal, detail, DismissTrigger::Escape);
            }
        });
    });

    use_effect(move || {
        let Some(index) = modal().selected() else {
            return;
        };
        let Some(card) = session.card(index).cloned() else {
            tracing::warn!(index, "Activated card is not in the deck");
            modal.set(ModalState::Closed);
            return;
        };
        let title = session.title().to_string();

        spawn(async move {
            let available = !no_dialog && dialog_supported().await;
            match present(index, &card, available) {
                Presentation::Dialog(view) => {
                    detail.set(Some(view));
                    show_dialog().await;
                }
                Presentation::Alert(text) => {
                    show_alert(title, text).await;
                    modal.set(ModalState::Closed);
                }
            }
        });
    });

    let content = detail();

    rsx! {
        dialog {
            id: DIALOG_ID,
            class: "modal",
            onclick: move |_| dismiss(modal, detail, DismissTrigger::OutsideClick),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    evt.prevent_default();
                    dismiss(modal, detail, DismissTrigger::Escape);
                }
            },

            div {
                class: "modal-inner",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "modal-close",
                    "aria-label": "Close",
                    onclick: move |_| dismiss(modal, detail, DismissTrigger::CloseControl),
                    "×"
                }

                if let Some(view) = content {
                    DetailBody { view }
                }
            }
        }
    }
}

#[component]
fn DetailBody(view: DetailView) -> Element {
    rsx! {
        div { class: "modal-img",
            if let Some(src) = &view.image {
                img { src: "{src}", alt: "{view.name}" }
            }
        }
        div { class: "modal-text",
            h2 { "{view.name}" }
            div { class: "meta", "{view.subtitle}" }
            div { class: "tags",
                for tag in view.tags.iter() {
                    span { class: "tag", "{tag}" }
                }
            }
            h3 { class: "rules-heading", "Rules / Text" }
            // Already escaped for &, < and >.
            div { class: "rules", dangerous_inner_html: "{view.rules_html}" }
        }
    }
}
