//! Matcher
//!
//! Pure inclusion predicate: plain substring search over a card's text plus an
//! exact tag check. There is no tokenization, no word-boundary handling and no
//! diacritic folding.

use crate::types::Card;

/// Lower-case and trim.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Searchable text of a card: name, subtitle, space-joined tags and rules,
/// each normalized, joined by single spaces.
///
/// The "Untitled" fallback is a display concern and is not searchable.
pub fn haystack(card: &Card) -> String {
    let tags = card.tags.join(" ");
    [
        card.name.as_deref().unwrap_or(""),
        card.subtitle(),
        tags.as_str(),
        card.rules(),
    ]
    .map(normalize)
    .join(" ")
}

/// Whether `card` passes both criteria.
///
/// `query` must already be normalized; an empty query matches everything.
/// `tag` of `None` matches everything, otherwise the card must carry that exact tag.
pub fn matches(card: &Card, query: &str, tag: Option<&str>) -> bool {
    let text_ok = query.is_empty() || haystack(card).contains(query);
    let tag_ok = tag.map_or(true, |t| card.has_tag(t));
    text_ok && tag_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fireball() -> Card {
        Card::named("Fireball")
            .with_tags(["fire", "spell"])
            .with_rules("Deal 3 <damage>")
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  FiRe \n"), "fire");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_haystack_order() {
        let card = Card::named(" Bolt ")
            .with_subtitle("Instant")
            .with_tags(["Lightning", "spell"])
            .with_rules("Deal 3.");
        assert_eq!(haystack(&card), "bolt instant lightning spell deal 3.");
    }

    #[test]
    fn test_haystack_of_blank_card() {
        assert_eq!(haystack(&Card::default()), "   ");
    }

    #[test]
    fn test_query_matches_substring() {
        let card = fireball();
        assert!(matches(&card, "fire", None));
        assert!(matches(&card, "ball", None));
        assert!(matches(&card, "<damage>", None));
        assert!(!matches(&card, "water", None));
    }

    #[test]
    fn test_query_spans_fields() {
        let card = fireball();
        assert!(matches(&card, "fireball fire", None));
        assert!(matches(&card, "spell deal", None));
    }

    #[test]
    fn test_empty_query_matches() {
        assert!(matches(&fireball(), "", None));
        assert!(matches(&Card::default(), "", None));
    }

    #[test]
    fn test_untitled_is_not_searchable() {
        assert!(!matches(&Card::default(), "untitled", None));
    }

    #[test]
    fn test_tag_is_exact_and_case_sensitive() {
        let card = fireball();
        assert!(matches(&card, "", Some("fire")));
        assert!(!matches(&card, "", Some("Fire")));
        assert!(!matches(&card, "", Some("fir")));
    }

    #[test]
    fn test_untagged_card_never_matches_a_tag() {
        let card = Card::named("Plain");
        assert!(!matches(&card, "", Some("fire")));
        assert!(!matches(&card, "", Some("")));
    }

    #[test]
    fn test_both_criteria_required() {
        let card = fireball();
        assert!(matches(&card, "deal", Some("spell")));
        assert!(!matches(&card, "deal", Some("creature")));
        assert!(!matches(&card, "heal", Some("spell")));
    }
}
