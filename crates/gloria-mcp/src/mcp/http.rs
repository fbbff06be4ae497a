use crate::prelude::*;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use super::ServerState;

/// Path serving the streamable HTTP transport.
pub const MCP_PATH: &str = "/mcp";

pub fn router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(MCP_PATH, post(message_handler).get(stream_handler))
        .layer(cors)
        .with_state(state)
}

/// Serve MCP over streamable HTTP on every interface until Ctrl-C.
pub async fn run_http(state: Arc<ServerState>, port: u16) -> Result<()> {
    let addr = format!("0.0.0.0:{port}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    info!("MCP server listening on http://{addr}{MCP_PATH}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    info!("HTTP transport stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

/// JSON-RPC over POST. Responses are returned as a single JSON body;
/// notifications are acknowledged with 202 and no body.
async fn message_handler(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<serde_json::Value>,
) -> Response {
    let request_str = request.to_string();

    match super::handle_request(&request_str, &state).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// This server never pushes messages, so it offers no standalone SSE stream.
async fn stream_handler() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}
