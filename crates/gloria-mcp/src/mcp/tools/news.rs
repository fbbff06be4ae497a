use log::debug;
use serde::Deserialize;

use super::{deserialize_limit, parse_arguments, tool_error, tool_result, JsonRpcError, ServerState};

pub async fn handle_get_latest_news(
    arguments: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct LatestNewsArgs {
        category: Option<String>,
        #[serde(default, deserialize_with = "deserialize_limit")]
        limit: Option<i64>,
    }

    let args: LatestNewsArgs = parse_arguments(arguments)?;

    debug!(
        "Calling get_latest_news: category={:?}, limit={:?}",
        args.category, args.limit
    );

    let items = crate::news::latest_news_data(&state.client, args.category, args.limit)
        .await
        .map_err(tool_error)?;

    tool_result(&items)
}

pub async fn handle_get_news_recap(
    arguments: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct NewsRecapArgs {
        category: String,
        timeframe: Option<String>,
    }

    let args: NewsRecapArgs = parse_arguments(arguments)?;

    debug!(
        "Calling get_news_recap: category={}, timeframe={:?}",
        args.category, args.timeframe
    );

    let recap = crate::news::news_recap_data(&state.client, args.category, args.timeframe)
        .await
        .map_err(tool_error)?;

    tool_result(&recap)
}

pub async fn handle_search_news(
    arguments: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct SearchNewsArgs {
        query: String,
        #[serde(default, deserialize_with = "deserialize_limit")]
        limit: Option<i64>,
    }

    let args: SearchNewsArgs = parse_arguments(arguments)?;

    debug!(
        "Calling search_news: query={}, limit={:?}",
        args.query, args.limit
    );

    let items = crate::news::search_news_data(&state.client, args.query, args.limit)
        .await
        .map_err(tool_error)?;

    tool_result(&items)
}

pub async fn handle_get_categories(state: &ServerState) -> Result<serde_json::Value, JsonRpcError> {
    let categories = crate::news::categories_data(&state.client)
        .await
        .map_err(tool_error)?;

    tool_result(&categories)
}

pub async fn handle_get_news_item(
    arguments: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct NewsItemArgs {
        id: String,
    }

    let args: NewsItemArgs = parse_arguments(arguments)?;

    debug!("Calling get_news_item: id={}", args.id);

    let item = crate::news::news_item_data(&state.client, args.id)
        .await
        .map_err(tool_error)?;

    tool_result(&item)
}
