//! Data functions behind the MCP tools and resources.
//!
//! Each one performs at most one ai-hub request and hands the raw JSON to the
//! pure shapers in `gloria_mcp_core`.

use crate::client::GloriaClient;
use crate::error::ClientResult;
use gloria_mcp_core::about::ABOUT_TEXT;
use gloria_mcp_core::categories::{render_categories, CATEGORIES_FALLBACK};
use gloria_mcp_core::limits::{clamp_limit, LATEST_NEWS_MAX_LIMIT, SEARCH_NEWS_MAX_LIMIT};
use gloria_mcp_core::lookup::Lookup;
use gloria_mcp_core::news::{news_item_not_found_message, truncate_news, truncate_news_list, NewsItem};
use gloria_mcp_core::payment::{enriched_news_payment_info, ticker_summary_payment_info, PaymentInfo};
use gloria_mcp_core::recap::{format_recap, recap_not_found_message, RecapOutput, DEFAULT_TIMEFRAME};
use log::warn;
use serde_json::Value;

/// Latest free-tier headlines, optionally for one category.
///
/// No error for unknown categories; upstream decides what matches.
pub async fn latest_news_data(
    client: &GloriaClient,
    category: Option<String>,
    limit: Option<i64>,
) -> ClientResult<Vec<NewsItem>> {
    let limit = clamp_limit(limit, LATEST_NEWS_MAX_LIMIT);
    let items = client.get_news(category.as_deref(), None, limit).await?;
    Ok(truncate_news_list(&items))
}

/// Recap for one category, or a not-found payload when upstream has none.
pub async fn news_recap_data(
    client: &GloriaClient,
    category: String,
    timeframe: Option<String>,
) -> ClientResult<Lookup<RecapOutput>> {
    let timeframe = timeframe.unwrap_or_else(|| DEFAULT_TIMEFRAME.to_string());

    Ok(match client.get_recap(&category, &timeframe).await? {
        Some(recap) => Lookup::Found(format_recap(&recap)),
        None => Lookup::not_found(recap_not_found_message(&category, &timeframe)),
    })
}

/// Keyword search over free-tier news. Capped tighter than `latest_news_data`.
pub async fn search_news_data(
    client: &GloriaClient,
    query: String,
    limit: Option<i64>,
) -> ClientResult<Vec<NewsItem>> {
    let limit = clamp_limit(limit, SEARCH_NEWS_MAX_LIMIT);
    let items = client.get_news(None, Some(&query), limit).await?;
    Ok(truncate_news_list(&items))
}

/// Category list exactly as upstream returned it.
pub async fn categories_data(client: &GloriaClient) -> ClientResult<Vec<Value>> {
    client.get_categories().await
}

/// Single free-tier news item, or a not-found payload.
pub async fn news_item_data(client: &GloriaClient, id: String) -> ClientResult<Lookup<NewsItem>> {
    Ok(match client.get_news_by_id(&id).await? {
        Some(item) => Lookup::Found(truncate_news(&item)),
        None => Lookup::not_found(news_item_not_found_message(&id)),
    })
}

pub fn enriched_news_data() -> PaymentInfo {
    enriched_news_payment_info()
}

pub fn ticker_summary_data() -> PaymentInfo {
    ticker_summary_payment_info()
}

pub fn about_text() -> &'static str {
    ABOUT_TEXT
}

/// Live category list as text. Never fails: any error yields a pointer to the
/// `get_categories` tool instead.
pub async fn categories_text(client: &GloriaClient) -> String {
    let rendered = match client.get_categories().await {
        Ok(categories) => render_categories(&categories).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    match rendered {
        Ok(text) => text,
        Err(reason) => {
            warn!("Categories resource unavailable: {reason}");
            CATEGORIES_FALLBACK.to_string()
        }
    }
}
