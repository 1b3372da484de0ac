//! Tag Index Builder
//!
//! The tag index is the sorted set of distinct tags across a card list. It is
//! built once per load and drives the tag selector.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::types::Card;

/// Distinct tags across `cards`, sorted with [`locale_cmp`].
///
/// Tags are compared case-sensitively for distinctness, so `Fire` and `fire`
/// are two entries.
pub fn build_tag_index(cards: &[Card]) -> Vec<String> {
    let distinct: BTreeSet<&str> = cards
        .iter()
        .flat_map(|card| card.tags.iter().map(String::as_str))
        .collect();

    let mut tags: Vec<String> = distinct.into_iter().map(str::to_owned).collect();
    tags.sort_by(|a, b| locale_cmp(a, b));
    tags
}

/// Locale-style string ordering.
///
/// Letters compare case-insensitively first; among strings that differ only
/// in case, lower case sorts first at the first differing character. Code
/// point order breaks any remaining tie, which keeps the order total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);

    folded_a
        .cmp(folded_b)
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}
