//! Filter Bar Component
//!
//! Search box plus the single-select tag filter.

use dioxus::prelude::*;

/// Label of the first option, which clears the tag filter
pub const ALL_TAGS_LABEL: &str = "All tags";

/// `(value, label)` pairs for the tag selector, "All tags" first
pub fn tag_options(tags: &[String]) -> Vec<(String, String)> {
    std::iter::once((String::new(), ALL_TAGS_LABEL.to_string()))
        .chain(tags.iter().map(|tag| (tag.clone(), tag.clone())))
        .collect()
}

/// Search input and tag dropdown
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FilterBar {
///         query: query(),
///         tags: session.tags().to_vec(),
///         selected: selected_tag(),
///         on_query: move |text| { /* re-filter */ },
///         on_tag: move |tag| { /* re-filter */ },
///     }
/// }
/// ```
#[component]
pub fn FilterBar(
    /// Current search text
    query: String,
    /// Derived tag index
    tags: Vec<String>,
    /// Selected tag value, empty for "All tags"
    selected: String,
    /// Fired on every keystroke
    on_query: EventHandler<String>,
    /// Fired on every selector change
    on_tag: EventHandler<String>,
) -> Element {
    let options = tag_options(&tags);

    rsx! {
        div { class: "toolbar",
            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Search name, tags, rules…",
                "aria-label": "Search cards",
                value: "{query}",
                oninput: move |e| on_query.call(e.value()),
            }
            select {
                class: "tag-filter",
                "aria-label": "Filter by tag",
                value: "{selected}",
                onchange: move |e| on_tag.call(e.value()),
                for (value, label) in options.into_iter() {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: value == selected,
                        "{label}"
                    }
                }
            }
        }
    }
}
