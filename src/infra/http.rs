//! HTTP transport backed by `reqwest`.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::domain::{ApiError, ApiRequest, ApiResponse, ApiTransport, HttpMethod, QueryParams, TransportError};

/// Reason phrase used for status codes without a canonical one.
const UNKNOWN_STATUS: &str = "Unknown Status";

/// Transport that talks JSON over HTTP to the service.
///
/// The bearer token sits behind a lock so it can be rotated through a
/// shared reference; each request reads it once while building headers.
pub struct HttpApiClient {
    http_client: Client,
    base_url: String,
    bearer_token: RwLock<Option<SecretString>>,
}

impl HttpApiClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    /// Returns `TransportError::Protocol` if the underlying HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| TransportError::Protocol(e.to_string()))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        info!(base_url = %base_url, "Created API client");
        Ok(Self {
            http_client,
            base_url,
            bearer_token: RwLock::new(non_empty(config.bearer_token)),
        })
    }

    /// Create a client with no credential and no timeouts.
    pub fn with_defaults(base_url: &str) -> Result<Self, TransportError> {
        Self::new(ClientConfig::new(base_url))
    }

    /// Full request URL: base URL, endpoint, then the encoded query string.
    pub fn build_url(&self, endpoint: &str, params: &QueryParams) -> String {
        build_url(&self.base_url, endpoint, params)
    }

    fn headers(&self) -> Result<HeaderMap, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let guard = self.bearer_token.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(token) = guard.as_ref() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|_| TransportError::Protocol("bearer token is not a valid header value".to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl ApiTransport for HttpApiClient {
    #[instrument(skip(self, request), fields(method = %request.method, endpoint = %request.endpoint))]
    async fn request(&self, request: ApiRequest) -> Result<ApiResponse<Value>, TransportError> {
        let headers = self.headers()?;
        let url = self.build_url(&request.endpoint, &request.query);

        let mut builder = self
            .http_client
            .request(to_method(request.method), &url)
            .headers(headers);
        if let Some(body) = &request.body {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| TransportError::Serialization(e.to_string()))?;
            builder = builder.body(bytes);
        }

        debug!(url = %url, "Sending request");
        let response = builder.send().await.map_err(|e| {
            let err = TransportError::from(e);
            warn!(error = %err, "Request failed");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = status.canonical_reason().unwrap_or(UNKNOWN_STATUS);
            warn!(status = status.as_u16(), reason = %message, "Request rejected by service");
            return Ok(ApiResponse::Error(ApiError::new(message, Some(status.as_u16()))));
        }

        let bytes = response.bytes().await.map_err(TransportError::from)?;
        let data: Value = serde_json::from_slice(&bytes).map_err(|e| {
            warn!(error = %e, "Response body is not JSON");
            TransportError::Decode(e.to_string())
        })?;
        debug!(status = status.as_u16(), "Request succeeded");
        Ok(ApiResponse::Data(data))
    }

    fn set_bearer_token(&self, token: Option<SecretString>) {
        let mut guard = self.bearer_token.write().unwrap_or_else(PoisonError::into_inner);
        *guard = non_empty(token);
    }

    fn has_bearer_token(&self) -> bool {
        self.bearer_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// `base_url + endpoint + query`, with no separator logic beyond the `?`.
pub fn build_url(base_url: &str, endpoint: &str, params: &QueryParams) -> String {
    format!("{base_url}{endpoint}{}", params.to_query_string())
}

fn non_empty(token: Option<SecretString>) -> Option<SecretString> {
    token.filter(|t| !t.expose_secret().is_empty())
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_creation() {
        let client = HttpApiClient::with_defaults("http://x");
        assert!(client.is_ok());
    }

    #[test]
    fn test_build_url_without_params() {
        let client = HttpApiClient::with_defaults("http://x").unwrap();
        assert_eq!(client.build_url("/block/5", &QueryParams::new()), "http://x/block/5");
    }

    #[test]
    fn test_build_url_with_params() {
        let client = HttpApiClient::with_defaults("http://x").unwrap();
        let params = QueryParams::new().with("owner", "0x1").with("spender", "0x2");
        assert_eq!(
            client.build_url("/erc20/allowance/0xABC", &params),
            "http://x/erc20/allowance/0xABC?owner=0x1&spender=0x2"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = HttpApiClient::with_defaults("http://x/api/").unwrap();
        assert_eq!(client.base_url(), "http://x/api");
        assert_eq!(client.build_url("/user", &QueryParams::new()), "http://x/api/user");
    }

    #[test]
    fn test_headers_without_token() {
        let client = HttpApiClient::with_defaults("http://x").unwrap();
        let headers = client.headers().unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert!(headers.get(AUTHORIZATION).is_none());
        assert!(!client.has_bearer_token());
    }

    #[test]
    fn test_headers_with_token() {
        let config = ClientConfig::new("http://x").with_bearer_token("abc123");
        let client = HttpApiClient::new(config).unwrap();
        let headers = client.headers().unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc123");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
    }

    #[test]
    fn test_set_bearer_token_replaces_and_clears() {
        let client = HttpApiClient::with_defaults("http://x").unwrap();

        client.set_bearer_token(Some(SecretString::from("first")));
        assert_eq!(client.headers().unwrap().get(AUTHORIZATION).unwrap(), "Bearer first");

        client.set_bearer_token(Some(SecretString::from("second")));
        assert_eq!(client.headers().unwrap().get(AUTHORIZATION).unwrap(), "Bearer second");

        client.set_bearer_token(None);
        assert!(client.headers().unwrap().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_empty_token_omits_header() {
        let client = HttpApiClient::with_defaults("http://x").unwrap();
        client.set_bearer_token(Some(SecretString::from("")));
        assert!(!client.has_bearer_token());
        assert!(client.headers().unwrap().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_token_with_newline_is_protocol_error() {
        let client = HttpApiClient::with_defaults("http://x").unwrap();
        client.set_bearer_token(Some(SecretString::from("bad\ntoken")));
        assert!(matches!(client.headers(), Err(TransportError::Protocol(_))));
    }

    #[test]
    fn test_client_with_timeouts() {
        let config = ClientConfig::new("http://x")
            .with_timeout(Duration::from_secs(5))
            .with_connect_timeout(Duration::from_secs(1));
        assert!(HttpApiClient::new(config).is_ok());
    }

    #[test]
    fn test_method_mapping() {
        assert_eq!(to_method(HttpMethod::Get), Method::GET);
        assert_eq!(to_method(HttpMethod::Post), Method::POST);
        assert_eq!(to_method(HttpMethod::Put), Method::PUT);
        assert_eq!(to_method(HttpMethod::Delete), Method::DELETE);
    }
}
