//! Core types for Deckview
//!
//! Every field of the input document is optional, and a field of the wrong
//! JSON type is read as absent. Decoding a card therefore never fails.

use std::sync::Arc;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{DeckError, DeckResult};

/// Title used when the document has no usable `title`
pub const DEFAULT_DECK_TITLE: &str = "My Card Deck";

/// Display name for cards without a usable `name`
pub const UNTITLED: &str = "Untitled";

/// One catalog entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Card {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub subtitle: Option<String>,

    /// URL or path, handed to the webview as-is
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: Option<String>,

    /// Kept in document order, duplicates included
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,

    /// Plain text, never interpreted as markup
    #[serde(default, deserialize_with = "lenient_string")]
    pub rules: Option<String>,
}

impl Card {
    /// Create a card with just a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Builder-style tag list
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Builder-style rules text
    pub fn with_rules(mut self, rules: impl Into<String>) -> Self {
        self.rules = Some(rules.into());
        self
    }

    /// Builder-style image reference
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Name to show, falling back to "Untitled" when absent or empty
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNTITLED,
        }
    }

    /// Subtitle, empty when absent
    pub fn subtitle(&self) -> &str {
        self.subtitle.as_deref().unwrap_or("")
    }

    /// Image reference, `None` when absent or empty
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|src| !src.is_empty())
    }

    /// Rules text, empty when absent
    pub fn rules(&self) -> &str {
        self.rules.as_deref().unwrap_or("")
    }

    /// Whether the card carries `tag` (exact, case-sensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// The loaded document: a title plus an immutable, ordered card list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    title: String,
    cards: Arc<[Card]>,
}

impl Deck {
    /// Build a deck, applying the title fallback
    pub fn new(title: Option<String>, cards: Vec<Card>) -> Self {
        let title = title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_DECK_TITLE.to_string());
        Self {
            title,
            cards: cards.into(),
        }
    }

    /// Decode a deck from an already-parsed JSON document.
    ///
    /// The top level must be an object; everything below it is lenient.
    pub fn from_value(value: Value) -> DeckResult<Self> {
        if !value.is_object() {
            return Err(DeckError::Malformed(format!(
                "expected a JSON object at the top level, found {}",
                json_kind(&value)
            )));
        }
        let raw: RawDeck = serde_json::from_value(value)?;
        Ok(Self::new(raw.title, raw.cards))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The master card list (read-only)
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shared handle to the master card list
    pub fn cards_arc(&self) -> Arc<[Card]> {
        Arc::clone(&self.cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[derive(Deserialize)]
struct RawDeck {
    #[serde(default, deserialize_with = "lenient_string")]
    title: Option<String>,

    #[serde(default, deserialize_with = "lenient_cards")]
    cards: Vec<Card>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_cards<'de, D>(deserializer: D) -> Result<Vec<Card>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.into_iter().map(card_from_value).collect(),
        _ => Vec::new(),
    })
}

// Arrays would otherwise decode positionally into the struct fields.
fn card_from_value(value: Value) -> Card {
    if !value.is_object() {
        return Card::default();
    }
    serde_json::from_value(value).unwrap_or_default()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
