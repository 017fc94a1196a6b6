//! Live HTTP client for the swarm backend.
//!
//! Thin reqwest wrapper: JSON in, JSON out, bearer token attached when
//! one is configured. Non-2xx responses surface as
//! `ApiError::Status` with the raw body kept for logging.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use swarm_common::SwarmState;

use super::{ApiError, PerformanceResponse, SignalsResponse, SwarmApi};

/// Default request timeout for backend calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the swarm backend REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Create a client for the given base URL with the default timeout.
    ///
    /// `auth_token`, when present, is sent as a bearer token on every
    /// request; when absent the Authorization header is omitted.
    pub fn new(base_url: impl Into<String>, auth_token: Option<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, auth_token, REQUEST_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        auth_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token,
        })
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            return Err(ApiError::Status { status, body });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        let response = self.authorize(self.http.get(&url)).send().await?;
        Self::decode(response).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");
        let response = self
            .authorize(self.http.post(&url))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl SwarmApi for ApiClient {
    async fn swarm_status(&self) -> Result<SwarmState, ApiError> {
        self.get("/api/swarm/status").await
    }

    async fn recent_signals(&self, limit: usize) -> Result<SignalsResponse, ApiError> {
        self.get(&format!("/api/swarm/signals?limit={limit}")).await
    }

    async fn trigger_scan(&self, symbols: &[String]) -> Result<serde_json::Value, ApiError> {
        self.post("/api/swarm/scan", &json!({ "symbols": symbols }))
            .await
    }

    async fn performance(&self, days: u32) -> Result<PerformanceResponse, ApiError> {
        self.get(&format!("/api/performance?days={days}")).await
    }

    async fn orchestrate(&self, symbol: &str) -> Result<serde_json::Value, ApiError> {
        self.post("/api/swarm/orchestrate", &json!({ "symbol": symbol }))
            .await
    }

    async fn consensus(&self, signal_id: u64) -> Result<serde_json::Value, ApiError> {
        self.get(&format!("/api/swarm/consensus/{signal_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = ApiClient::new("http://localhost:8000/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_base_url_kept_without_slash() {
        let client = ApiClient::new("https://swarm.example.com", None).unwrap();
        assert_eq!(client.base_url(), "https://swarm.example.com");
    }

    #[test]
    fn test_client_with_token_constructs() {
        let client = ApiClient::new("http://localhost:8000", Some("tok_123".to_string()));
        assert!(client.is_ok());
    }
}
