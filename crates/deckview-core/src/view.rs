//! Render contracts for the grid and the detail view.
//!
//! Everything here is plain data. The desktop app maps it onto Dioxus
//! elements and the CLI prints it.

use crate::types::Card;

/// Tags shown on a tile; the detail view shows all of them
pub const TILE_TAG_LIMIT: usize = 6;

/// Placeholder shown instead of tiles when nothing matches
pub const EMPTY_GRID_MESSAGE: &str = "No cards match your search/filter.";

/// The only message a user ever sees when the deck cannot be loaded
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load the card deck. Check the log for details.";

/// Text shown on a tile without an image
pub const NO_IMAGE_LABEL: &str = "No image";

/// `"<shown> card(s) shown • <total> total"`
pub fn status_line(shown: usize, total: usize) -> String {
    let noun = if shown == 1 { "card" } else { "cards" };
    format!("{shown} {noun} shown • {total} total")
}

/// Escape `&`, `<` and `>` so text can be placed inside an element as markup.
///
/// Quotes are left alone; the result is only ever used as element content,
/// never inside an attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Compact grid representation of one card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    /// Position of the card in the master list
    pub index: usize,
    pub name: String,
    pub subtitle: String,
    pub image: Option<String>,
    /// At most [`TILE_TAG_LIMIT`] tags, in card order
    pub tags: Vec<String>,
}

impl TileView {
    pub fn new(index: usize, card: &Card) -> Self {
        Self {
            index,
            name: card.display_name().to_string(),
            subtitle: card.subtitle().to_string(),
            image: card.image().map(str::to_owned),
            tags: card.tags.iter().take(TILE_TAG_LIMIT).cloned().collect(),
        }
    }

    /// Accessible label for the tile
    pub fn aria_label(&self) -> String {
        format!("Open {}", self.name)
    }
}

/// What the grid container holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridContent {
    /// Nothing matched; show [`EMPTY_GRID_MESSAGE`]
    Empty,
    Tiles(Vec<TileView>),
}

/// One full render of the grid: status line plus content.
///
/// Each render replaces the previous one entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub status: String,
    pub content: GridContent,
}

impl GridView {
    /// Render the cards of `master` selected by `visible` (indices, in order)
    pub fn render(master: &[Card], visible: &[usize]) -> Self {
        let status = status_line(visible.len(), master.len());
        let tiles: Vec<TileView> = visible
            .iter()
            .filter_map(|&i| master.get(i).map(|card| TileView::new(i, card)))
            .collect();

        let content = if tiles.is_empty() {
            GridContent::Empty
        } else {
            GridContent::Tiles(tiles)
        };
        Self { status, content }
    }

    pub fn tiles(&self) -> &[TileView] {
        match &self.content {
            GridContent::Empty => &[],
            GridContent::Tiles(tiles) => tiles,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.content, GridContent::Empty)
    }
}

/// Full-information presentation of one card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub index: usize,
    pub name: String,
    pub subtitle: String,
    pub image: Option<String>,
    /// Every tag, no truncation
    pub tags: Vec<String>,
    /// Rules text with `&`, `<`, `>` escaped, safe to inject as markup
    pub rules_html: String,
}

impl DetailView {
    pub fn new(index: usize, card: &Card) -> Self {
        Self {
            index,
            name: card.display_name().to_string(),
            subtitle: card.subtitle().to_string(),
            image: card.image().map(str::to_owned),
            tags: card.tags.clone(),
            rules_html: escape_html(card.rules()),
        }
    }
}

/// How a selected card gets shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// Native modal dialog with the full detail view
    Dialog(DetailView),
    /// Blocking alert with `"<name>\n\n<rules>"` as plain text
    Alert(String),
}

/// Choose the presentation for the card at `index`
pub fn present(index: usize, card: &Card, dialog_available: bool) -> Presentation {
    if dialog_available {
        Presentation::Dialog(DetailView::new(index, card))
    } else {
        tracing::debug!("Dialog unavailable, falling back to alert");
        Presentation::Alert(format!("{}\n\n{}", card.display_name(), card.rules()))
    }
}

/// Ways the detail dialog can be dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    /// The dialog's close button
    CloseControl,
    /// Pointer activation on the backdrop, outside the content
    OutsideClick,
    /// The Escape key
    Escape,
}

/// Open/closed state of the detail dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    /// Showing the card at this master-list index
    Open(usize),
}

impl ModalState {
    pub fn open(&mut self, index: usize) {
        *self = ModalState::Open(index);
    }

    /// Close the dialog. Returns false if it was already closed.
    pub fn dismiss(&mut self, trigger: DismissTrigger) -> bool {
        match *self {
            ModalState::Closed => false,
            ModalState::Open(index) => {
                tracing::debug!(index, ?trigger, "Detail dialog dismissed");
                *self = ModalState::Closed;
                true
            }
        }
    }

    pub fn selected(&self) -> Option<usize> {
        match *self {
            ModalState::Closed => None,
            ModalState::Open(index) => Some(index),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_pluralization() {
        assert_eq!(status_line(0, 5), "0 cards shown • 5 total");
        assert_eq!(status_line(1, 5), "1 card shown • 5 total");
        assert_eq!(status_line(2, 5), "2 cards shown • 5 total");
        assert_eq!(status_line(1, 1), "1 card shown • 1 total");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Deal 3 <damage>"), "Deal 3 &lt;damage&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html(r#"say "hi" 'there'"#), r#"say "hi" 'there'"#);
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_tile_truncates_tags() {
        let card = Card::named("Many").with_tags(["a", "b", "c", "d", "e", "f", "g", "h"]);
        let tile = TileView::new(3, &card);
        assert_eq!(tile.index, 3);
        assert_eq!(tile.tags, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_tile_fallbacks() {
        let tile = TileView::new(0, &Card::default());
        assert_eq!(tile.name, "Untitled");
        assert_eq!(tile.subtitle, "");
        assert!(tile.image.is_none());
        assert!(tile.tags.is_empty());
        assert_eq!(tile.aria_label(), "Open Untitled");
    }

    #[test]
    fn test_grid_empty_result() {
        let master = vec![Card::named("a"), Card::named("b")];
        let grid = GridView::render(&master, &[]);
        assert_eq!(grid.status, "0 cards shown • 2 total");
        assert_eq!(grid.content, GridContent::Empty);
        assert!(grid.tiles().is_empty());
    }

    #[test]
    fn test_grid_keeps_master_indices() {
        let master = vec![Card::named("a"), Card::named("b"), Card::named("c")];
        let grid = GridView::render(&master, &[0, 2]);
        assert_eq!(grid.status, "2 cards shown • 3 total");
        let names: Vec<_> = grid.tiles().iter().map(|t| (t.index, t.name.as_str())).collect();
        assert_eq!(names, vec![(0, "a"), (2, "c")]);
    }

    #[test]
    fn test_detail_shows_all_tags_and_escapes_rules() {
        let card = Card::named("Fireball")
            .with_tags(["fire", "spell", "a", "b", "c", "d", "e"])
            .with_rules("Deal 3 <damage>");
        let detail = DetailView::new(0, &card);
        assert_eq!(detail.tags.len(), 7);
        assert_eq!(detail.rules_html, "Deal 3 &lt;damage&gt;");
    }

    #[test]
    fn test_present_dialog_or_alert() {
        let card = Card::named("Fireball").with_rules("Deal 3 <damage>");
        match present(4, &card, true) {
            Presentation::Dialog(detail) => assert_eq!(detail.index, 4),
            other => panic!("expected dialog, got {:?}", other),
        }
        assert_eq!(
            present(4, &card, false),
            Presentation::Alert("Fireball\n\nDeal 3 <damage>".to_string())
        );
    }

    #[test]
    fn test_modal_dismiss_from_every_trigger() {
        for trigger in [
            DismissTrigger::CloseControl,
            DismissTrigger::OutsideClick,
            DismissTrigger::Escape,
        ] {
            let mut modal = ModalState::default();
            modal.open(2);
            assert_eq!(modal.selected(), Some(2));
            assert!(modal.dismiss(trigger));
            assert!(!modal.is_open());
        }
    }

    #[test]
    fn test_dismiss_when_closed_is_noop() {
        let mut modal = ModalState::Closed;
        assert!(!modal.dismiss(DismissTrigger::Escape));
        assert_eq!(modal, ModalState::Closed);
    }

    #[test]
    fn test_close_event_after_close_button_dismisses_once() {
        // Closing through the button also fires the dialog's own close event.
        let mut modal = ModalState::default();
        modal.open(3);
        assert!(modal.dismiss(DismissTrigger::CloseControl));
        assert!(!modal.dismiss(DismissTrigger::Escape));
        assert_eq!(modal.selected(), None);
    }

    #[test]
    fn test_reopen_replaces_selection() {
        let mut modal = ModalState::default();
        modal.open(1);
        modal.open(5);
        assert_eq!(modal.selected(), Some(5));
    }
}
