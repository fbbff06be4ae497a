use serde_json::{Map, Value};

/// Raw news item as returned by ai-hub.
///
/// Kept untyped so the free-tier projection never renames, coerces or
/// reorders a value it passes through.
pub type NewsItem = Map<String, Value>;

/// Fields of a news item available without payment, in output order.
pub const FREE_NEWS_FIELDS: [&str; 10] = [
    "id",
    "signal",
    "sentiment",
    "sentiment_value",
    "timestamp",
    "feed_categories",
    "sources",
    "author",
    "tokens",
    "tweet_url",
];

/// Return only the free-tier fields of a news item.
///
/// Keys missing from `item` are omitted, never defaulted.
pub fn truncate_news(item: &NewsItem) -> NewsItem {
    FREE_NEWS_FIELDS
        .iter()
        .filter_map(|key| item.get(*key).map(|value| (key.to_string(), value.clone())))
        .collect()
}

/// Message returned in place of a news item that upstream doesn't know.
pub fn news_item_not_found_message(id: &str) -> String {
    format!("News item '{id}' not found.")
}

/// Apply [`truncate_news`] to every item of a list response.
pub fn truncate_news_list(items: &[NewsItem]) -> Vec<NewsItem> {
    items.iter().map(truncate_news).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> NewsItem {
        value.as_object().cloned().unwrap()
    }

    fn full_item() -> NewsItem {
        item(json!({
            "id": "6630f1",
            "signal": "SEC approves spot ETH ETF",
            "sentiment": "bullish",
            "sentiment_value": 0.82,
            "timestamp": "2024-05-23T20:11:00Z",
            "feed_categories": ["ethereum", "macro"],
            "sources": ["https://x.com/example/status/1"],
            "author": "example",
            "tokens": ["ETH"],
            "tweet_url": "https://x.com/example/status/1",
            "long_context": "paid",
            "short_context": "paid",
            "entities": {"orgs": ["SEC"]}
        }))
    }

    #[test]
    fn test_truncate_news_strips_paid_fields() {
        let free = truncate_news(&full_item());

        assert_eq!(free.len(), 10);
        assert!(!free.contains_key("long_context"));
        assert!(!free.contains_key("short_context"));
        assert!(!free.contains_key("entities"));
    }

    #[test]
    fn test_truncate_news_keeps_values_unchanged() {
        let original = full_item();
        let free = truncate_news(&original);

        for (key, value) in &free {
            assert_eq!(Some(value), original.get(key), "value changed for {key}");
        }
    }

    #[test]
    fn test_truncate_news_key_set_is_intersection() {
        let partial = item(json!({
            "id": 7,
            "signal": "headline",
            "long_context": "paid",
            "unknown": true
        }));

        let free = truncate_news(&partial);
        let keys: Vec<&str> = free.keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["id", "signal"]);
    }

    #[test]
    fn test_truncate_news_does_not_default_missing_keys() {
        let free = truncate_news(&item(json!({"author": null})));

        assert_eq!(free.len(), 1);
        assert_eq!(free.get("author"), Some(&Value::Null));
    }

    #[test]
    fn test_truncate_news_follows_allow_list_order() {
        let reversed = item(json!({
            "tweet_url": "u",
            "author": "a",
            "signal": "s",
            "id": "i"
        }));

        let keys: Vec<String> = truncate_news(&reversed).keys().cloned().collect();
        assert_eq!(keys, vec!["id", "signal", "author", "tweet_url"]);
    }

    #[test]
    fn test_truncate_news_empty_item() {
        assert!(truncate_news(&NewsItem::new()).is_empty());
    }

    #[test]
    fn test_news_item_not_found_message() {
        assert_eq!(news_item_not_found_message("abc"), "News item 'abc' not found.");
    }

    #[test]
    fn test_truncate_news_list() {
        let items = vec![full_item(), item(json!({"id": 2, "short_context": "paid"}))];
        let free = truncate_news_list(&items);

        assert_eq!(free.len(), 2);
        assert_eq!(free[1].len(), 1);
        assert_eq!(free[1].get("id"), Some(&json!(2)));
    }
}
