//! Mock transport for testing.
//!
//! `MockTransport` answers requests from an in-memory table of canned
//! envelopes and records every request it sees, so façade modules can be
//! exercised without a network.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, RwLock};
use std::time::Duration;

use crate::domain::{ApiError, ApiRequest, ApiResponse, ApiTransport, TransportError};

/// Configuration for mock behavior.
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Envelope returned for endpoints with no canned response.
    pub default_response: ApiResponse<Value>,
    /// If set, every call fails at the transport level with this error.
    pub failure: Option<TransportError>,
    /// Simulated latency in milliseconds.
    pub latency_ms: Option<u64>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            default_response: ApiResponse::Data(Value::Null),
            failure: None,
            latency_ms: None,
        }
    }
}

impl MockConfig {
    /// Creates a config that answers `null` to everything.
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    /// Creates a config that answers every call with an error envelope.
    #[must_use]
    pub fn rejecting(message: impl Into<String>, code: Option<u16>) -> Self {
        Self {
            default_response: ApiResponse::Error(ApiError::new(message, code)),
            ..Self::default()
        }
    }

    /// Creates a config whose calls never complete.
    #[must_use]
    pub fn failing(error: TransportError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Adds simulated latency.
    #[must_use]
    pub fn with_latency(mut self, ms: u64) -> Self {
        self.latency_ms = Some(ms);
        self
    }
}

/// Stub transport with scripted responses.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use serde_json::json;
/// use swaye_client::SwayeClient;
/// use swaye_client::domain::ApiResponse;
/// use swaye_client::test_utils::MockTransport;
///
/// let mock = Arc::new(MockTransport::new());
/// mock.respond_with("/chain/chainId", ApiResponse::Data(json!(1)));
/// let client = SwayeClient::with_transport(mock);
/// ```
pub struct MockTransport {
    config: MockConfig,
    responses: Mutex<HashMap<String, ApiResponse<Value>>>,
    requests: Mutex<Vec<ApiRequest>>,
    tokens_seen: Mutex<Vec<Option<String>>>,
    bearer_token: RwLock<Option<SecretString>>,
    call_count: AtomicU64,
}

impl MockTransport {
    /// Creates a new mock with default (success) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MockConfig::success())
    }

    #[must_use]
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            config,
            responses: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
            tokens_seen: Mutex::new(Vec::new()),
            bearer_token: RwLock::new(None),
            call_count: AtomicU64::new(0),
        }
    }

    /// Creates a mock that rejects every call with the given status line.
    #[must_use]
    pub fn rejecting(message: impl Into<String>, code: Option<u16>) -> Self {
        Self::with_config(MockConfig::rejecting(message, code))
    }

    /// Creates a mock whose calls fail at the transport level.
    #[must_use]
    pub fn failing(error: TransportError) -> Self {
        Self::with_config(MockConfig::failing(error))
    }

    /// Script the envelope returned for an endpoint (query string excluded).
    pub fn respond_with(&self, endpoint: impl Into<String>, response: ApiResponse<Value>) {
        self.responses
            .lock()
            .unwrap()
            .insert(endpoint.into(), response);
    }

    /// Gets the number of requests received.
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Gets all recorded requests, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Bearer token in effect for each recorded request.
    pub fn tokens_seen(&self) -> Vec<Option<String>> {
        self.tokens_seen.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.requests.lock().unwrap().clear();
        self.tokens_seen.lock().unwrap().clear();
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApiTransport for MockTransport {
    async fn request(&self, request: ApiRequest) -> Result<ApiResponse<Value>, TransportError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        let token = self
            .bearer_token
            .read()
            .unwrap()
            .as_ref()
            .map(|t| t.expose_secret().to_string());
        self.tokens_seen.lock().unwrap().push(token);

        let endpoint = request.endpoint.clone();
        self.requests.lock().unwrap().push(request);

        if let Some(ms) = self.config.latency_ms {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }

        if let Some(err) = &self.config.failure {
            return Err(err.clone());
        }

        let scripted = self.responses.lock().unwrap().get(&endpoint).cloned();
        Ok(scripted.unwrap_or_else(|| self.config.default_response.clone()))
    }

    fn set_bearer_token(&self, token: Option<SecretString>) {
        *self.bearer_token.write().unwrap() = token.filter(|t| !t.expose_secret().is_empty());
    }

    fn has_bearer_token(&self) -> bool {
        self.bearer_token.read().unwrap().is_some()
    }

    fn base_url(&self) -> &str {
        "http://mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_returns_scripted_response() {
        let mock = MockTransport::new();
        mock.respond_with("/blockNumber", ApiResponse::Data(json!(99)));

        let resp = mock.request(ApiRequest::get("/blockNumber")).await.unwrap();
        assert_eq!(resp, ApiResponse::Data(json!(99)));
    }

    #[tokio::test]
    async fn test_mock_falls_back_to_default() {
        let mock = MockTransport::rejecting("boom", Some(404));

        let resp = mock.request(ApiRequest::get("/anything")).await.unwrap();
        assert_eq!(resp, ApiResponse::Error(ApiError::new("boom", Some(404))));
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let mock = MockTransport::failing(TransportError::Network("refused".to_string()));

        let result = mock.request(ApiRequest::get("/user")).await;
        assert_eq!(result, Err(TransportError::Network("refused".to_string())));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_records_requests_and_tokens() {
        let mock = MockTransport::new();
        mock.request(ApiRequest::get("/user")).await.unwrap();
        mock.set_bearer_token(Some(SecretString::from("t1")));
        mock.request(ApiRequest::get("/user/balance")).await.unwrap();

        let endpoints: Vec<String> = mock.requests().into_iter().map(|r| r.endpoint).collect();
        assert_eq!(endpoints, vec!["/user", "/user/balance"]);
        assert_eq!(mock.tokens_seen(), vec![None, Some("t1".to_string())]);

        mock.clear();
        assert!(mock.requests().is_empty());
        assert!(mock.last_request().is_none());
    }

    #[tokio::test]
    async fn test_mock_latency() {
        let mock = MockTransport::with_config(MockConfig::success().with_latency(10));
        let start = std::time::Instant::now();
        mock.request(ApiRequest::get("/user")).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
