use std::time::Duration;

use reqwest::Client;

use super::provider::MovieApi;
use super::wire::{parse_detail, parse_search};
use crate::config::{self, ApiConfig};
use crate::error::{MarqueeError, Result};
use crate::model::{DetailRecord, Query, SearchResultItem};

/// OMDb HTTP client.
///
/// Both endpoints are a GET on the same base URL: `?s=<query>` searches,
/// `?i=<identifier>` fetches a detail record. The API key travels as `apikey`.
pub struct OmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
    plot: String,
}

impl std::fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OmdbClient")
            .field("base_url", &self.base_url)
            .field("plot", &self.plot)
            .finish()
    }
}

impl OmdbClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_config(api_key, &ApiConfig::default())
    }

    /// Build a client from configuration, resolving the API key.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let api_key = config::resolve_api_key(config)?;
        Self::with_config(api_key, config)
    }

    pub fn with_config(api_key: String, config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.clone(),
            plot: config.plot.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, params: &[(&str, &str)]) -> Result<String> {
        let response = self
            .client
            .get(&self.base_url)
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MarqueeError::Api(format!("OMDb error {status}: {body}")));
        }

        Ok(response.text().await?)
    }
}

impl MovieApi for OmdbClient {
    async fn search(&self, query: &Query) -> Result<Vec<SearchResultItem>> {
        tracing::debug!(query = %query, "omdb search");
        let body = self.get(&[("s", query.as_str())]).await?;
        parse_search(&body)
    }

    async fn details(&self, id: &str) -> Result<DetailRecord> {
        tracing::debug!(id, "omdb detail");
        let body = self.get(&[("i", id), ("plot", self.plot.as_str())]).await?;
        parse_detail(id, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_with_key() {
        let config = ApiConfig {
            api_key: Some("test-key".into()),
            ..Default::default()
        };
        let client = OmdbClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "https://www.omdbapi.com/");
        assert_eq!(client.plot, "short");
    }

    #[test]
    fn test_debug_hides_key() {
        let client = OmdbClient::new("super-secret".into()).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("omdbapi.com"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:9/".into(),
            timeout_secs: 2,
            ..Default::default()
        };
        let client = OmdbClient::with_config("k".into(), &config).unwrap();
        let err = client.details("tt1375666").await.unwrap_err();
        assert!(matches!(err, MarqueeError::Http(_)));
        assert!(!err.is_no_match());
    }
}
