use serde::Serialize;
use serde_json::Value;

/// Default recap window used when the caller doesn't pick one.
pub const DEFAULT_TIMEFRAME: &str = "12h";

/// Recap as returned to agents. All recap fields are free tier.
///
/// Every field is always serialized, `null` when upstream omitted it.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RecapOutput {
    pub feed_category: Option<Value>,
    pub timeframe: Option<Value>,
    pub recap: Option<Value>,
    pub created_at: Option<Value>,
}

/// Reshape a raw recap into exactly four named fields.
///
/// Never fails: a non-object input, or an object missing some keys, yields
/// `null` for whatever is absent.
pub fn format_recap(item: &Value) -> RecapOutput {
    let field = |key: &str| item.get(key).cloned().filter(|value| !value.is_null());

    RecapOutput {
        feed_category: field("feed_category"),
        timeframe: field("timeframe"),
        recap: field("recap"),
        created_at: field("created_at"),
    }
}

/// Message returned in place of a recap when upstream has none.
pub fn recap_not_found_message(category: &str, timeframe: &str) -> String {
    format!("No recap found for category '{category}' with timeframe '{timeframe}'.")
}
