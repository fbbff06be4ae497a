use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Returned by the categories resource whenever the live list can't be produced.
pub const CATEGORIES_FALLBACK: &str =
    "Categories temporarily unavailable. Use the get_categories tool instead.";

const CATEGORIES_HEADER: &str = "Available Gloria AI news categories:\n";

/// Feed category from `/available-feed-categories`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Category {
    pub code: String,
    pub name: String,
    /// Recap cadence as upstream sends it, usually a string like `"8h"`.
    #[serde(default)]
    pub recap_timeframe: Option<Value>,
}

/// Text for a cadence value, or `None` when it is empty, zero, `false` or `null`.
fn recap_cadence(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Object(map) if map.is_empty() => None,
        other => Some(other.to_string()),
    }
}

/// Format a single category line, e.g. `- bitcoin: Bitcoin (recaps every 8h)`.
pub fn format_category_line(category: &Category) -> String {
    let recap_info = match category.recap_timeframe.as_ref().and_then(recap_cadence) {
        Some(cadence) => format!("recaps every {cadence}"),
        None => "no recaps".to_string(),
    };
    format!("- {}: {} ({recap_info})", category.code, category.name)
}

/// Render the raw category list as human-readable text.
///
/// Fails if any entry lacks a string `code` or `name`.
pub fn render_categories(raw: &[Value]) -> Result<String, serde_json::Error> {
    let categories = raw
        .iter()
        .map(|value| Category::deserialize(value))
        .collect::<Result<Vec<_>, _>>()?;

    let mut lines = vec![CATEGORIES_HEADER.to_string()];
    lines.extend(categories.iter().map(format_category_line));

    Ok(lines.join("\n"))
}
