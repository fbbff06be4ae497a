mod news;
mod premium;

use gloria_mcp_core::about::SERVER_INSTRUCTIONS;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, ServerState, Tool};

pub const SERVER_NAME: &str = "Gloria AI";
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
    pub resources: Option<ResourcesCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct ResourcesCapability {
    pub subscribe: bool,
    #[serde(rename = "listChanged")]
    pub list_changed: bool,
}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    pub instructions: String,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

/// Deserialize tool arguments, treating missing arguments as an empty object.
pub fn parse_arguments<T: DeserializeOwned>(
    arguments: Option<serde_json::Value>,
) -> Result<T, JsonRpcError> {
    let arguments = match arguments {
        None | Some(serde_json::Value::Null) => serde_json::json!({}),
        Some(value) => value,
    };

    serde_json::from_value(arguments)
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid arguments: {e}")))
}

/// Accept a `limit` given as an integer, a whole float (`3.0`) or a numeric
/// string (`"3"`). Range checks are left to the clamp.
pub fn deserialize_limit<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    fn whole(value: f64) -> Option<i64> {
        (value.is_finite() && value.fract() == 0.0).then_some(value as i64)
    }

    let limit = match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => return Ok(None),
        Some(serde_json::Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().and_then(whole)),
        Some(serde_json::Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole))
        }
        Some(_) => None,
    };

    limit
        .map(Some)
        .ok_or_else(|| D::Error::custom("limit must be a whole number"))
}

/// Wrap tool output as pretty-printed JSON text content.
pub fn tool_result<T: Serialize>(data: &T) -> Result<serde_json::Value, JsonRpcError> {
    let json_string = serde_json::to_string_pretty(data)
        .map_err(|e| JsonRpcError::internal(format!("Serialization error: {e}")))?;

    let result = CallToolResult {
        content: vec![Content::Text { text: json_string }],
        is_error: None,
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

/// Map a failed upstream call to a JSON-RPC error.
pub fn tool_error(err: crate::error::Error) -> JsonRpcError {
    JsonRpcError::internal(format!("Tool execution error: {err}"))
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
            resources: Some(ResourcesCapability {
                subscribe: false,
                list_changed: false,
            }),
        },
        server_info: ServerInfo {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        instructions: SERVER_INSTRUCTIONS.to_string(),
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = vec![
        Tool {
            name: "get_latest_news".to_string(),
            description: "Get the latest curated crypto news headlines. Returns real-time news items with headline, sentiment, categories, and sources. Use the category parameter to filter by topic (e.g. 'bitcoin', 'defi', 'ai'). Call get_categories first to see all available category codes.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "description": "Filter by category code (e.g. 'bitcoin', 'ethereum', 'defi', 'ai'). Omit to get news across all categories."
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Number of items to return (1-10, default 5)",
                        "default": 5
                    }
                },
                "required": []
            }),
        },
        Tool {
            name: "get_news_recap".to_string(),
            description: "Get an AI-generated news recap/summary for a specific category. Returns a concise narrative summarizing the most important recent news for the given category. Great for getting up to speed quickly.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "description": "Category code (required). Use get_categories to see options. Popular choices: 'crypto', 'bitcoin', 'ethereum', 'defi', 'ai', 'macro'."
                    },
                    "timeframe": {
                        "type": "string",
                        "description": "Time window for the recap. Use '1h' for crypto/macro (updated hourly), '8h' or '24h' for other categories. Default '12h'.",
                        "default": "12h"
                    }
                },
                "required": ["category"]
            }),
        },
        Tool {
            name: "search_news".to_string(),
            description: "Search curated crypto news by keyword. Searches across all news items for matching content. Returns headlines, sentiment, categories, and sources.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search keyword or phrase (e.g. 'ETF', 'SEC', 'Uniswap')."
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Number of results to return (1-5, default 5)",
                        "default": 5
                    }
                },
                "required": ["query"]
            }),
        },
        Tool {
            name: "get_categories".to_string(),
            description: "List all available news categories with their recap timeframes. Returns category codes that can be used with get_latest_news, get_news_recap, and other tools. Each category includes its code, display name, and how frequently recaps are generated.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        Tool {
            name: "get_news_item".to_string(),
            description: "Get a specific news item by its ID. Returns the full free-tier details for a single news item including headline, sentiment, categories, sources, and tweet URL.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "string",
                        "description": "The news item ID (returned in results from get_latest_news or search_news)."
                    }
                },
                "required": ["id"]
            }),
        },
        Tool {
            name: "get_enriched_news".to_string(),
            description: "Get enriched news with full AI-generated context and analysis (paid via x402). The premium endpoint returns the complete news data including long_context, short_context, full entity analysis and token mentions. Payment is handled via the x402 protocol using USDC on Base network. This tool returns the payment endpoint and instructions.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        Tool {
            name: "get_ticker_summary".to_string(),
            description: "Get a 24-hour AI-generated summary for any crypto ticker or topic (paid via x402). Returns decision-grade bullet points combining Gloria's curated news with real-time web search. Designed for fund managers and trading agents. Payment is handled via the x402 protocol using USDC on Base network. This tool returns the payment endpoint and instructions.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
    ];

    let result = ToolsList { tools };

    serde_json::to_value(result).map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {e}")))?;

    match params.name.as_str() {
        "get_latest_news" => news::handle_get_latest_news(params.arguments, state).await,
        "get_news_recap" => news::handle_get_news_recap(params.arguments, state).await,
        "search_news" => news::handle_search_news(params.arguments, state).await,
        "get_categories" => news::handle_get_categories(state).await,
        "get_news_item" => news::handle_get_news_item(params.arguments, state).await,
        "get_enriched_news" => premium::handle_get_enriched_news(),
        "get_ticker_summary" => premium::handle_get_ticker_summary(),
        _ => Err(JsonRpcError::invalid_params(format!(
            "Unknown tool: {}",
            params.name
        ))),
    }
}
