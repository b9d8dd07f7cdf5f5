use donut_core::{DonutError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};

use crate::results::{AuctionResults, PlayerStats};

pub const DEFAULT_BASE_URL: &str = "https://api.donutsmp.net/v1";

/// Connection settings, loaded once by the process entry point.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: String,
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Client for the DonutSMP REST API.
///
/// Each fetch stores its outcome on the client; the stored results are then
/// read through [`DonutClient::auction`] and [`DonutClient::stats`].
pub struct DonutClient {
    client: Client,
    config: ApiConfig,
    pub(crate) auction: AuctionResults,
    pub(crate) stats: PlayerStats,
}

impl DonutClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            auction: AuctionResults::default(),
            stats: PlayerStats::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    /// Result of the last auction search
    pub fn auction(&self) -> &AuctionResults {
        &self.auction
    }

    /// Result of the last stats lookup
    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    /// Build `<base>/<segments...>`, percent-encoding each segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(self.base_url())
            .map_err(|e| DonutError::Config(format!("invalid base URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| DonutError::Config("base URL cannot have a path".to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    pub(crate) fn headers(&self) -> Result<HeaderMap> {
        let mut auth = HeaderValue::from_str(self.api_key())
            .map_err(|_| DonutError::Config("API key is not a valid header value".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_segments_to_base_path() {
        let client = DonutClient::new(ApiConfig::new("key"));
        let url = client.endpoint(&["auction", "list", "1"]).unwrap();
        assert_eq!(url.as_str(), "https://api.donutsmp.net/v1/auction/list/1");
    }

    #[test]
    fn endpoint_encodes_player_names() {
        let client =
            DonutClient::new(ApiConfig::new("key").with_base_url("http://localhost:8080/v1/"));
        let url = client.endpoint(&["stats", "some player/../x"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/v1/stats/some%20player%2F..%2Fx"
        );
    }

    #[test]
    fn endpoint_rejects_bad_base_url() {
        let client = DonutClient::new(ApiConfig::new("key").with_base_url("not a url"));
        assert!(matches!(
            client.endpoint(&["stats", "x"]),
            Err(DonutError::Config(_))
        ));
    }

    #[test]
    fn headers_carry_raw_api_key() {
        let client = DonutClient::new(ApiConfig::new("secret-key"));
        let headers = client.headers().unwrap();
        assert_eq!(headers[AUTHORIZATION], "secret-key");
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn headers_reject_control_characters() {
        let client = DonutClient::new(ApiConfig::new("bad\nkey"));
        assert!(matches!(client.headers(), Err(DonutError::Config(_))));
    }

    #[test]
    fn fresh_client_has_nothing_stored() {
        let client = DonutClient::new(ApiConfig::new("key"));
        assert!(!client.auction().is_fetched());
        assert!(!client.stats().is_fetched());
        assert!(client.auction().last_error().is_none());
    }
}
