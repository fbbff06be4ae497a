use log::debug;
use serde::{Deserialize, Serialize};

use super::{JsonRpcError, ServerState};

pub const ABOUT_URI: &str = "gloria://about";
pub const CATEGORIES_URI: &str = "gloria://categories";

const TEXT_MIME_TYPE: &str = "text/plain";

#[derive(Debug, Serialize)]
pub struct Resource {
    pub uri: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

#[derive(Debug, Serialize)]
pub struct ResourcesList {
    pub resources: Vec<Resource>,
}

#[derive(Debug, Deserialize)]
pub struct ReadResourceParams {
    pub uri: String,
}

#[derive(Debug, Serialize)]
pub struct ResourceContents {
    pub uri: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ReadResourceResult {
    pub contents: Vec<ResourceContents>,
}

pub fn handle_resources_list() -> Result<serde_json::Value, JsonRpcError> {
    let resources = vec![
        Resource {
            uri: ABOUT_URI.to_string(),
            name: "about".to_string(),
            description: "About Gloria AI and its data coverage.".to_string(),
            mime_type: TEXT_MIME_TYPE.to_string(),
        },
        Resource {
            uri: CATEGORIES_URI.to_string(),
            name: "categories".to_string(),
            description: "Current feed categories with descriptions.".to_string(),
            mime_type: TEXT_MIME_TYPE.to_string(),
        },
    ];

    serde_json::to_value(ResourcesList { resources })
        .map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

pub async fn handle_resources_read(
    params: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: ReadResourceParams =
        serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
            .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {e}")))?;

    debug!("Reading resource {}", params.uri);

    let text = match params.uri.as_str() {
        ABOUT_URI => crate::news::about_text().to_string(),
        CATEGORIES_URI => crate::news::categories_text(&state.client).await,
        uri => {
            return Err(JsonRpcError::invalid_params(format!(
                "Unknown resource: {uri}"
            )))
        }
    };

    let result = ReadResourceResult {
        contents: vec![ResourceContents {
            uri: params.uri,
            mime_type: TEXT_MIME_TYPE.to_string(),
            text,
        }],
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}
