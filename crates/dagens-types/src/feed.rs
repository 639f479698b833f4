//! Lenient view over the "on this day" feed payload.
//!
//! The payload is third-party JSON and is cached verbatim, so it is never
//! deserialized strictly. Each field is read on its own: wrong types and
//! missing values degrade to `None`/empty instead of failing the whole item.

use serde::Serialize;
use serde_json::Value;

/// One referenced encyclopedia page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRef {
    pub title: Option<String>,
    /// `content_urls.desktop.page` when the feed supplies it
    pub canonical_url: Option<String>,
}

impl PageRef {
    pub fn from_value(value: &Value) -> Self {
        Self {
            title: non_empty_str(value.get("title")),
            canonical_url: non_empty_str(
                value
                    .get("content_urls")
                    .and_then(|urls| urls.get("desktop"))
                    .and_then(|desktop| desktop.get("page")),
            ),
        }
    }
}

/// One historical fact (event, birth, death or holiday)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoricalItem {
    /// Year of the event; `None` when absent or zero
    pub year: Option<i64>,
    pub text: Option<String>,
    pub pages: Vec<PageRef>,
}

impl HistoricalItem {
    pub fn from_value(value: &Value) -> Self {
        let year = match value.get("year") {
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
        .filter(|y| *y != 0);

        let pages = value
            .get("pages")
            .and_then(Value::as_array)
            .map(|pages| {
                pages
                    .iter()
                    .filter(|p| !p.is_null())
                    .map(PageRef::from_value)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            year,
            text: non_empty_str(value.get("text")),
            pages,
        }
    }

    /// First referenced page, which is the one an item links to
    pub fn primary_page(&self) -> Option<&PageRef> {
        self.pages.first()
    }
}

/// The lists a feed response may carry. `None` means the field was absent or
/// not an array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeedPayload {
    pub selected: Option<Vec<HistoricalItem>>,
    pub events: Option<Vec<HistoricalItem>>,
    pub births: Option<Vec<HistoricalItem>>,
    pub deaths: Option<Vec<HistoricalItem>>,
    pub holidays: Option<Vec<HistoricalItem>>,
}

impl FeedPayload {
    pub fn from_value(value: &Value) -> Self {
        Self {
            selected: item_list(value, "selected"),
            events: item_list(value, "events"),
            births: item_list(value, "births"),
            deaths: item_list(value, "deaths"),
            holidays: item_list(value, "holidays"),
        }
    }
}

fn item_list(value: &Value, field: &str) -> Option<Vec<HistoricalItem>> {
    value
        .get(field)
        .and_then(Value::as_array)
        .map(|items| items.iter().map(HistoricalItem::from_value).collect())
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_full() {
        let item = HistoricalItem::from_value(&json!({
            "year": 872,
            "text": "Harald Fairhair wins the Battle of Hafrsfjord.",
            "pages": [{
                "title": "Battle of Hafrsfjord",
                "content_urls": {"desktop": {"page": "https://en.wikipedia.org/wiki/Battle_of_Hafrsfjord"}}
            }]
        }));

        assert_eq!(item.year, Some(872));
        assert_eq!(
            item.primary_page().unwrap().canonical_url.as_deref(),
            Some("https://en.wikipedia.org/wiki/Battle_of_Hafrsfjord")
        );
    }

    #[test]
    fn test_item_tolerates_bad_fields() {
        let item = HistoricalItem::from_value(&json!({
            "year": 0,
            "text": 42,
            "pages": "oops"
        }));
        assert_eq!(item.year, None);
        assert_eq!(item.text, None);
        assert!(item.pages.is_empty());

        let item = HistoricalItem::from_value(&json!({"year": "1905", "pages": [null, {}]}));
        assert_eq!(item.year, Some(1905));
        assert_eq!(item.pages.len(), 1);
        assert_eq!(item.pages[0].title, None);
    }

    #[test]
    fn test_negative_year_kept() {
        let item = HistoricalItem::from_value(&json!({"year": -44, "text": "Caesar"}));
        assert_eq!(item.year, Some(-44));
    }

    #[test]
    fn test_payload_distinguishes_absent_and_empty() {
        let payload = FeedPayload::from_value(&json!({"selected": [], "events": {"not": "array"}}));
        assert_eq!(payload.selected, Some(vec![]));
        assert_eq!(payload.events, None);
        assert_eq!(payload.births, None);

        assert_eq!(FeedPayload::from_value(&json!(null)), FeedPayload::default());
    }
}
