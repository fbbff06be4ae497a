mod http;
mod resources;
mod stdio;
mod tools;

pub use http::run_http;
pub use stdio::run_stdio;

use crate::client::GloriaClient;
use log::debug;
use serde::{Deserialize, Serialize};

/// Everything a request handler needs. Built once at startup and shared by
/// every transport task.
pub struct ServerState {
    pub client: GloriaClient,
}

impl ServerState {
    pub fn new(client: GloriaClient) -> Self {
        Self { client }
    }
}

// JSON-RPC 2.0 types
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<serde_json::Value>,
    method: String,
    params: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    jsonrpc: String,
    id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcError {
    pub const PARSE_ERROR: i32 = -32700;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(Self::INVALID_PARAMS, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(Self::INTERNAL_ERROR, message)
    }
}

// MCP Protocol types
#[derive(Debug, Serialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// Handle one JSON-RPC message.
///
/// Returns `None` for notifications, which never get a response.
pub async fn handle_request(request_str: &str, state: &ServerState) -> Option<JsonRpcResponse> {
    let request: JsonRpcRequest = match serde_json::from_str(request_str) {
        Ok(req) => req,
        Err(e) => {
            return Some(JsonRpcResponse {
                jsonrpc: "2.0".to_string(),
                id: None,
                result: None,
                error: Some(JsonRpcError::new(
                    JsonRpcError::PARSE_ERROR,
                    format!("Parse error: {e}"),
                )),
            });
        }
    };

    if request.method.starts_with("notifications/") {
        debug!("Notification: {}", request.method);
        return None;
    }

    debug!("Handling {}", request.method);

    let result = match request.method.as_str() {
        "initialize" => tools::handle_initialize(),
        "ping" => Ok(serde_json::json!({})),
        "tools/list" => tools::handle_tools_list(),
        "tools/call" => tools::handle_tools_call(request.params, state).await,
        "resources/list" => resources::handle_resources_list(),
        "resources/read" => resources::handle_resources_read(request.params, state).await,
        method => Err(JsonRpcError::new(
            JsonRpcError::METHOD_NOT_FOUND,
            format!("Method not found: {method}"),
        )),
    };

    Some(match result {
        Ok(value) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: Some(value),
            error: None,
        },
        Err(error) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: None,
            error: Some(error),
        },
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::client::tests::create_client;
    use serde_json::{json, Value};

    /// Nothing listens on the discard port, so any network use fails fast.
    pub(crate) const UNREACHABLE: &str = "http://127.0.0.1:9";

    pub(crate) fn state(base_url: &str) -> ServerState {
        ServerState::new(create_client(base_url))
    }

    pub(crate) async fn call(state: &ServerState, request: Value) -> Value {
        let response = handle_request(&request.to_string(), state)
            .await
            .expect("request should get a response");
        serde_json::to_value(response).unwrap()
    }

    #[tokio::test]
    async fn test_parse_error() {
        let response = handle_request("{not json", &state(UNREACHABLE)).await.unwrap();
        let value = serde_json::to_value(response).unwrap();

        assert_eq!(value["error"]["code"], json!(-32700));
        assert_eq!(value["id"], Value::Null);
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let value = call(
            &state(UNREACHABLE),
            json!({"jsonrpc": "2.0", "id": 1, "method": "prompts/list"}),
        )
        .await;

        assert_eq!(value["error"]["code"], json!(-32601));
        assert_eq!(value["error"]["message"], json!("Method not found: prompts/list"));
    }

    #[tokio::test]
    async fn test_notification_gets_no_response() {
        let request = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
        assert!(handle_request(&request.to_string(), &state(UNREACHABLE))
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_ping() {
        let value = call(
            &state(UNREACHABLE),
            json!({"jsonrpc": "2.0", "id": "p", "method": "ping"}),
        )
        .await;

        assert_eq!(value["id"], json!("p"));
        assert_eq!(value["result"], json!({}));
    }

    #[tokio::test]
    async fn test_initialize_advertises_tools_and_resources() {
        let value = call(
            &state(UNREACHABLE),
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
        )
        .await;

        let result = &value["result"];
        assert_eq!(result["serverInfo"]["name"], json!("Gloria AI"));
        assert!(result["capabilities"]["tools"].is_object());
        assert!(result["capabilities"]["resources"].is_object());
        assert!(result["instructions"]
            .as_str()
            .unwrap()
            .contains("get_categories"));
    }
}
