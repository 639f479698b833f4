//! "On this day" rendering: a pure function from payload to panel content.

use crate::messages;
use dagens_types::{DateKey, FeedPayload, HistoricalItem, Language, PageRef, QueryType};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde_json::Value;

/// Everything rendering needs besides the payload
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Language the payload came from; drives constructed links
    pub language: Language,
    pub query_type: QueryType,
    pub date: DateKey,
    pub max_items: usize,
}

/// Full contents of the display surface; each update replaces the previous one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelContent {
    /// A single line of text (loading, no results, failure)
    Text { text: String },
    Listing(Listing),
}

impl PanelContent {
    pub fn text(text: impl Into<String>) -> Self {
        PanelContent::Text { text: text.into() }
    }

    pub fn loading() -> Self {
        Self::text(messages::LOADING)
    }

    pub fn failed() -> Self {
        Self::text(messages::FETCH_FAILED)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PanelContent::Text { text } => Some(text),
            PanelContent::Listing(_) => None,
        }
    }

    pub fn as_listing(&self) -> Option<&Listing> {
        match self {
            PanelContent::Listing(listing) => Some(listing),
            PanelContent::Text { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub header: String,
    pub items: Vec<ItemLine>,
    pub source_label: String,
    pub source_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemLine {
    pub year: Option<String>,
    pub text: String,
    pub link: Option<String>,
}

impl ItemLine {
    /// "<year>: <text>", or just the text when the year is unknown
    pub fn display_line(&self) -> String {
        match &self.year {
            Some(year) => format!("{}: {}", year, self.text),
            None => self.text.clone(),
        }
    }
}

/// Pick at most `max_items` items.
///
/// A non-empty curated `selected` list always wins; otherwise `events`; for
/// births/deaths/holidays queries the list of that name is the last resort.
pub fn select_items(
    payload: &FeedPayload,
    query_type: QueryType,
    max_items: usize,
) -> Vec<&HistoricalItem> {
    let typed = match query_type {
        QueryType::Births => payload.births.as_ref(),
        QueryType::Deaths => payload.deaths.as_ref(),
        QueryType::Holidays => payload.holidays.as_ref(),
        QueryType::All | QueryType::Selected | QueryType::Events => None,
    };

    [payload.selected.as_ref(), payload.events.as_ref(), typed]
        .into_iter()
        .flatten()
        .find(|list| !list.is_empty())
        .map(|list| list.iter().take(max_items).collect())
        .unwrap_or_default()
}

/// Link target for a referenced page: the canonical URL when supplied,
/// otherwise built from the title against the language's Wikipedia.
pub fn resolve_link(language: &Language, page: &PageRef) -> String {
    if let Some(url) = &page.canonical_url {
        return url.clone();
    }
    let title = page.title.as_deref().unwrap_or_default();
    let slug = encode_uri_component(&title.replace(' ', "_"));
    format!("{}wiki/{}", language.wikipedia_root(), slug)
}

/// Bytes `encodeURIComponent` leaves alone: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a path segment the way browsers' `encodeURIComponent` does
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

fn item_line(language: &Language, item: &HistoricalItem) -> ItemLine {
    ItemLine {
        year: item.year.map(|y| y.to_string()),
        text: item
            .text
            .clone()
            .unwrap_or_else(|| messages::UNKNOWN_EVENT.to_string()),
        link: item.primary_page().map(|page| resolve_link(language, page)),
    }
}

/// Render a payload into panel content
pub fn build_content(payload: &Value, options: &RenderOptions) -> PanelContent {
    let payload = FeedPayload::from_value(payload);
    let items = select_items(&payload, options.query_type, options.max_items);

    if items.is_empty() {
        return PanelContent::text(messages::NO_RESULTS);
    }

    PanelContent::Listing(Listing {
        header: messages::header(&options.date.day_month()),
        items: items
            .into_iter()
            .map(|item| item_line(&options.language, item))
            .collect(),
        source_label: messages::SOURCE_LABEL.to_string(),
        source_url: options.language.wikipedia_root(),
    })
}
