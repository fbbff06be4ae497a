use crate::error::{ClientResult, Error};

/// Default ai-hub API base URL
pub const DEFAULT_BASE_URL: &str = "https://ai-hub.cryptobriefing.com";

/// Default port for the streamable HTTP transport
pub const DEFAULT_PORT: u16 = 8005;

/// ai-hub connection settings
#[derive(Clone)]
pub struct GloriaConfig {
    pub base_url: String,
    pub api_token: String,
}

impl GloriaConfig {
    /// Validate settings collected from flags and environment variables.
    ///
    /// A missing or empty token is a configuration error.
    pub fn new(api_token: Option<String>, base_url: Option<String>) -> ClientResult<Self> {
        let api_token = api_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                Error::Config("GLORIA_API_TOKEN environment variable is required".to_string())
            })?;

        let base_url = base_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
        })
    }
}

impl std::fmt::Debug for GloriaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GloriaConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

/// Transport used to talk to the MCP client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Stdio,
    StreamableHttp,
}

impl Transport {
    /// Map an `MCP_TRANSPORT` value. Anything but `streamable-http` means stdio.
    pub fn from_name(name: &str) -> Self {
        match name {
            "streamable-http" => Self::StreamableHttp,
            _ => Self::Stdio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_config_error() {
        let err = GloriaConfig::new(None, None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("GLORIA_API_TOKEN"));
    }

    #[test]
    fn test_empty_token_is_config_error() {
        let err = GloriaConfig::new(Some(String::new()), None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_default_base_url() {
        let config = GloriaConfig::new(Some("tok".to_string()), None).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_token, "tok");
    }

    #[test]
    fn test_custom_base_url_is_trimmed() {
        let config = GloriaConfig::new(
            Some("tok".to_string()),
            Some("http://localhost:9000/".to_string()),
        )
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = GloriaConfig::new(Some("secret-token".to_string()), None).unwrap();
        assert!(!format!("{config:?}").contains("secret-token"));
    }

    #[test]
    fn test_transport_from_name() {
        assert_eq!(
            Transport::from_name("streamable-http"),
            Transport::StreamableHttp
        );
        assert_eq!(Transport::from_name("stdio"), Transport::Stdio);
        assert_eq!(Transport::from_name("sse"), Transport::Stdio);
        assert_eq!(Transport::from_name(""), Transport::Stdio);
    }
}
