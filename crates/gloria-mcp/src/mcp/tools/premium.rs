//! Paid tools. They take no arguments and never touch the network; the
//! answer is how to call the x402 endpoint, not its data.

use super::{tool_result, JsonRpcError};

pub fn handle_get_enriched_news() -> Result<serde_json::Value, JsonRpcError> {
    tool_result(&crate::news::enriched_news_data())
}

pub fn handle_get_ticker_summary() -> Result<serde_json::Value, JsonRpcError> {
    tool_result(&crate::news::ticker_summary_data())
}

#[cfg(test)]
mod tests {
    use crate::mcp::tests::{call, state, UNREACHABLE};
    use crate::mcp::tools::tests::{tool_call, tool_payload};
    use serde_json::json;
    use wiremock::MockServer;

    #[tokio::test]
    async fn test_get_enriched_news_ignores_arguments() {
        let state = state(UNREACHABLE);

        let plain = call(&state, tool_call("get_enriched_news", json!({}))).await;
        let with_args = call(
            &state,
            tool_call("get_enriched_news", json!({"feed_categories": "bitcoin"})),
        )
        .await;

        assert_eq!(tool_payload(&plain), tool_payload(&with_args));
        assert_eq!(
            tool_payload(&plain)["endpoint"],
            json!("https://api.itsgloria.ai/news")
        );
    }

    #[tokio::test]
    async fn test_premium_tools_make_no_requests() {
        let server = MockServer::start().await;
        let state = state(&server.uri());

        for name in ["get_enriched_news", "get_ticker_summary"] {
            let value = call(&state, tool_call(name, json!({}))).await;
            assert_eq!(tool_payload(&value)["payment_required"], json!(true));
        }

        assert!(server.received_requests().await.unwrap().is_empty());
        assert!(state.client.is_closed().await);
    }

    #[tokio::test]
    async fn test_get_ticker_summary_is_stable() {
        let state = state(UNREACHABLE);

        let first = call(&state, tool_call("get_ticker_summary", json!({}))).await;
        let second = call(&state, tool_call("get_ticker_summary", json!({}))).await;

        assert_eq!(
            first["result"]["content"][0]["text"],
            second["result"]["content"][0]["text"]
        );
    }
}
