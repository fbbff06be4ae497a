use crate::config::GloriaConfig;
use crate::error::{ClientResult, Error};
use gloria_mcp_core::news::NewsItem;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tokio::sync::RwLock;

/// Upper bound for every ai-hub request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin async wrapper around the ai-hub REST endpoints.
///
/// Owns one `reqwest::Client`, created on first request and reused until
/// [`GloriaClient::close`] drops it. A request made after `close` builds a
/// fresh one.
pub struct GloriaClient {
    base_url: String,
    token: String,
    timeout: Duration,
    http: RwLock<Option<reqwest::Client>>,
    #[cfg(test)]
    sessions_built: std::sync::atomic::AtomicUsize,
}

impl GloriaClient {
    pub fn new(config: &GloriaConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
            timeout: REQUEST_TIMEOUT,
            http: RwLock::new(None),
            #[cfg(test)]
            sessions_built: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    #[cfg(test)]
    fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether no session is currently held.
    pub async fn is_closed(&self) -> bool {
        self.http.read().await.is_none()
    }

    async fn session(&self) -> ClientResult<reqwest::Client> {
        if let Some(http) = self.http.read().await.as_ref() {
            return Ok(http.clone());
        }

        let mut guard = self.http.write().await;
        // Another caller may have created it while we waited for the lock.
        if let Some(http) = guard.as_ref() {
            return Ok(http.clone());
        }

        debug!("Opening HTTP session for {}", self.base_url);
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::Request(format!("Failed to build HTTP client: {e}")))?;
        *guard = Some(http.clone());

        #[cfg(test)]
        self.sessions_built
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);

        Ok(http)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> ClientResult<T> {
        let http = self.session().await?;
        let url = format!("{}{path}", self.base_url);

        debug!("GET {path} {params:?}");

        let response = http
            .get(&url)
            .query(params)
            .query(&[("token", self.token.as_str())])
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(|e| self.request_error(e))?;
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await.map_err(|e| self.request_error(e))?;
        serde_json::from_slice(&body).map_err(|e| Error::Decode(format!("{path}: {e}")))
    }

    fn request_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout(self.timeout.as_secs())
        } else {
            // Strip the URL so the token never ends up in an error message.
            Error::Request(err.without_url().to_string())
        }
    }

    /// `GET /news` filtered by category and/or keyword, first page only.
    pub async fn get_news(
        &self,
        category: Option<&str>,
        keyword: Option<&str>,
        limit: u32,
    ) -> ClientResult<Vec<NewsItem>> {
        let mut params = vec![("limit", limit.to_string()), ("page", "1".to_string())];
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            params.push(("feed_categories", category.to_string()));
        }
        if let Some(keyword) = keyword.filter(|k| !k.is_empty()) {
            params.push(("keyword", keyword.to_string()));
        }

        self.get("/news", &params).await
    }

    /// `GET /news/{id}`. A `null` body means the item doesn't exist.
    pub async fn get_news_by_id(&self, news_id: &str) -> ClientResult<Option<NewsItem>> {
        let path = format!("/news/{}", urlencoding::encode(news_id));
        self.get(&path, &[]).await
    }

    /// `GET /recaps` for one category and timeframe. A `null` body means no recap.
    pub async fn get_recap(&self, category: &str, timeframe: &str) -> ClientResult<Option<Value>> {
        let recap: Value = self
            .get(
                "/recaps",
                &[
                    ("feed_category", category.to_string()),
                    ("timeframe", timeframe.to_string()),
                ],
            )
            .await?;

        Ok(Some(recap).filter(|value| !value.is_null()))
    }

    /// `GET /available-feed-categories`. Public upstream, the token is sent anyway.
    pub async fn get_categories(&self) -> ClientResult<Vec<Value>> {
        self.get("/available-feed-categories", &[]).await
    }

    /// Drop the HTTP session. Safe to call repeatedly.
    pub async fn close(&self) {
        if self.http.write().await.take().is_some() {
            debug!("Closed HTTP session for {}", self.base_url);
        }
    }
}
