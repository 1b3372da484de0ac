//! Edge case and scenario tests
//!
//! Malformed documents, blank cards and the end-to-end scenarios the widget
//! must reproduce exactly.

use deckview_core::{
    parse_deck, present, Card, DeckError, FilterController, GridContent, Presentation, Session,
    DEFAULT_DECK_TITLE, TILE_TAG_LIMIT,
};

// ============================================================================
// Scenario Tests
// ============================================================================

const FIREBALL_DECK: &str = r#"{
    "title": "X",
    "cards": [
        { "name": "Fireball", "tags": ["fire", "spell"], "rules": "Deal 3 <damage>" }
    ]
}"#;

#[test]
fn test_fireball_scenario() {
    let session = Session::init(parse_deck(FIREBALL_DECK.as_bytes()).unwrap());
    assert_eq!(session.title(), "X");
    assert_eq!(session.tags(), ["fire", "spell"]);

    let mut controller = FilterController::new(session.clone());
    let grid = controller.on_query_input("fire");
    assert_eq!(grid.status, "1 card shown • 1 total");

    let grid = controller.on_query_input("water");
    assert_eq!(grid.status, "0 cards shown • 1 total");
    assert_eq!(grid.content, GridContent::Empty);

    let card = session.card(0).unwrap();
    match present(0, card, true) {
        Presentation::Dialog(detail) => {
            assert_eq!(detail.rules_html, "Deal 3 &lt;damage&gt;");
            assert_eq!(detail.name, "Fireball");
        }
        other => panic!("expected dialog, got {:?}", other),
    }
}

#[test]
fn test_untagged_card_scenario() {
    let doc = r#"{ "cards": [ { "name": "Plain" }, { "name": "Hot", "tags": ["fire"] } ] }"#;
    let session = Session::init(parse_deck(doc.as_bytes()).unwrap());
    assert_eq!(session.tags(), ["fire"]);

    let mut controller = FilterController::new(session);
    let grid = controller.on_tag_change("fire");
    let names: Vec<_> = grid.tiles().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Hot"]);
}

// ============================================================================
// Empty Input Tests
// ============================================================================

#[test]
fn test_empty_object_document() {
    let session = Session::init(parse_deck(b"{}").unwrap());
    assert_eq!(session.title(), DEFAULT_DECK_TITLE);
    assert!(session.cards().is_empty());
    assert!(session.tags().is_empty());

    let grid = FilterController::new(session).refresh();
    assert_eq!(grid.status, "0 cards shown • 0 total");
    assert!(grid.is_empty());
}

#[test]
fn test_whitespace_query_matches_everything() {
    let doc = r#"{ "cards": [ {}, { "name": "a" } ] }"#;
    let session = Session::init(parse_deck(doc.as_bytes()).unwrap());
    let grid = FilterController::new(session).on_query_input("   \t ");
    assert_eq!(grid.status, "2 cards shown • 2 total");
}

#[test]
fn test_blank_cards_render_with_fallbacks() {
    let doc = r#"{ "cards": [ {}, null, 3 ] }"#;
    let session = Session::init(parse_deck(doc.as_bytes()).unwrap());
    let grid = FilterController::new(session).refresh();
    assert_eq!(grid.tiles().len(), 3);
    for tile in grid.tiles() {
        assert_eq!(tile.name, "Untitled");
        assert_eq!(tile.subtitle, "");
        assert!(tile.image.is_none());
    }
}

// ============================================================================
// Malformed Document Tests
// ============================================================================

#[test]
fn test_malformed_documents_fail_to_load() {
    for doc in ["", "not json", "{\"cards\": [", "null", "[]", "\"deck\""] {
        let err = parse_deck(doc.as_bytes()).unwrap_err();
        assert!(
            matches!(err, DeckError::Parse(_) | DeckError::Malformed(_)),
            "unexpected error for {:?}: {:?}",
            doc,
            err
        );
    }
}

#[test]
fn test_wrong_field_types_never_fail() {
    let doc = r#"{
        "title": ["not", "a", "string"],
        "cards": [
            { "name": 1, "subtitle": true, "image": {}, "tags": "x", "rules": 9 },
            { "name": "Ok", "tags": [1, "keep", false] }
        ]
    }"#;
    let session = Session::init(parse_deck(doc.as_bytes()).unwrap());
    assert_eq!(session.title(), DEFAULT_DECK_TITLE);
    assert_eq!(session.cards()[0], Card::default());
    assert_eq!(session.cards()[1].tags, vec!["keep"]);
    assert_eq!(session.tags(), ["keep"]);
}

// ============================================================================
// Boundary Tests
// ============================================================================

#[test]
fn test_tile_tag_limit_boundary() {
    let exactly = Card::named("six").with_tags(["a", "b", "c", "d", "e", "f"]);
    let over = Card::named("seven").with_tags(["a", "b", "c", "d", "e", "f", "g"]);
    let session = Session::init(deckview_core::Deck::new(None, vec![exactly, over]));
    let grid = FilterController::new(session).refresh();

    assert_eq!(grid.tiles()[0].tags.len(), TILE_TAG_LIMIT);
    assert_eq!(grid.tiles()[1].tags.len(), TILE_TAG_LIMIT);
    assert!(!grid.tiles()[1].tags.contains(&"g".to_string()));
}

#[test]
fn test_duplicate_tags_kept_on_card() {
    let card = Card::named("dup").with_tags(["fire", "fire"]);
    let session = Session::init(deckview_core::Deck::new(None, vec![card]));
    assert_eq!(session.cards()[0].tags, vec!["fire", "fire"]);
    assert_eq!(session.tags(), ["fire"]);
}

#[test]
fn test_alert_fallback_uses_display_name() {
    let card = Card::default().with_rules("Text");
    assert_eq!(
        present(0, &card, false),
        Presentation::Alert("Untitled\n\nText".to_string())
    );
}
