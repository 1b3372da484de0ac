//! Session state and the Filter Controller.
//!
//! A [`Session`] is created exactly once, after the deck loads, and is never
//! modified afterwards. The [`FilterController`] owns the only mutable state:
//! the current query text and tag selection.

use std::sync::Arc;

use crate::matcher::{matches, normalize};
use crate::tags::build_tag_index;
use crate::types::{Card, Deck};
use crate::view::GridView;

/// Loaded deck plus its derived tag index
#[derive(Debug)]
pub struct Session {
    deck: Deck,
    tags: Vec<String>,
}

impl Session {
    /// Build the session for a freshly loaded deck
    pub fn init(deck: Deck) -> Arc<Self> {
        let tags = build_tag_index(deck.cards());
        tracing::info!(
            title = deck.title(),
            cards = deck.len(),
            tags = tags.len(),
            "Session initialized"
        );
        Arc::new(Self { deck, tags })
    }

    pub fn title(&self) -> &str {
        self.deck.title()
    }

    /// The master card list
    pub fn cards(&self) -> &[Card] {
        self.deck.cards()
    }

    /// Sorted distinct tags, as built at load time
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.deck.cards().get(index)
    }

    /// Indices of matching cards, in master-list order
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<usize> {
        let query = criteria.normalized_query();
        let tag = criteria.tag();
        self.cards()
            .iter()
            .enumerate()
            .filter(|(_, card)| matches(card, &query, tag))
            .map(|(i, _)| i)
            .collect()
    }

    /// Matching cards, in master-list order
    pub fn filter_cards(&self, criteria: &FilterCriteria) -> Vec<&Card> {
        self.filter(criteria)
            .into_iter()
            .filter_map(|i| self.card(i))
            .collect()
    }
}

/// Current search text and tag selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Raw text as typed; normalized when matching
    pub query: String,
    /// `None` means "All tags"
    pub tag: Option<String>,
}

impl FilterCriteria {
    pub fn new(query: impl Into<String>, tag: Option<String>) -> Self {
        Self {
            query: query.into(),
            tag: tag.filter(|t| !t.is_empty()),
        }
    }

    pub fn normalized_query(&self) -> String {
        normalize(&self.query)
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Interpret a tag selector value; the empty value is "All tags"
    pub fn tag_from_select(value: &str) -> Option<String> {
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// Re-runs the matcher over the whole deck on every input change.
///
/// There is no debouncing and no incremental update: each call does one full
/// pass and returns a complete [`GridView`] to replace the previous one.
#[derive(Debug, Clone)]
pub struct FilterController {
    session: Arc<Session>,
    criteria: FilterCriteria,
}

impl FilterController {
    /// Start with an empty query and no tag selected
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            session,
            criteria: FilterCriteria::default(),
        }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Search text changed
    pub fn on_query_input(&mut self, text: &str) -> GridView {
        self.criteria.query = text.to_string();
        self.refresh()
    }

    /// Tag selector changed
    pub fn on_tag_change(&mut self, value: &str) -> GridView {
        self.criteria.tag = FilterCriteria::tag_from_select(value);
        self.refresh()
    }

    /// Full pass with the current criteria
    pub fn refresh(&self) -> GridView {
        let visible = self.session.filter(&self.criteria);
        tracing::debug!(
            query = %self.criteria.query,
            tag = ?self.criteria.tag,
            shown = visible.len(),
            "Filter pass"
        );
        GridView::render(self.session.cards(), &visible)
    }
}
