//! The transport seam every façade module calls through.

use async_trait::async_trait;
use secrecy::SecretString;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::TransportError;
use super::query::QueryParams;
use super::types::{ApiRequest, ApiResponse, HttpMethod};

/// Turns one [`ApiRequest`] into exactly one [`ApiResponse`].
///
/// Non-success HTTP statuses come back as `Ok(ApiResponse::Error(..))`.
/// `Err` is reserved for exchanges that could not complete at all.
///
/// Implementations own the credential and must be `Send + Sync` so a single
/// instance can be shared as `Arc<dyn ApiTransport>` across façade modules.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Perform a single exchange with the remote service.
    async fn request(&self, request: ApiRequest) -> Result<ApiResponse<Value>, TransportError>;

    /// Replace the bearer token; `None` or an empty token clears it.
    /// Applies to requests whose headers are built after this call.
    fn set_bearer_token(&self, token: Option<SecretString>);

    fn has_bearer_token(&self) -> bool;

    fn base_url(&self) -> &str;
}

impl dyn ApiTransport {
    /// `GET` with optional query parameters, decoding the payload into `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: QueryParams,
    ) -> Result<ApiResponse<T>, TransportError> {
        let request = ApiRequest::get(endpoint).with_query(params);
        decode(self.request(request).await?)
    }

    /// `POST` with a JSON body, decoding the payload into `T`.
    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<ApiResponse<T>, TransportError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::post(endpoint, encode(body)?);
        decode(self.request(request).await?)
    }

    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<ApiResponse<T>, TransportError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::new(HttpMethod::Put, endpoint).with_body(encode(body)?);
        decode(self.request(request).await?)
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<ApiResponse<T>, TransportError> {
        let request = ApiRequest::new(HttpMethod::Delete, endpoint);
        decode(self.request(request).await?)
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, TransportError> {
    serde_json::to_value(body).map_err(|e| TransportError::Serialization(e.to_string()))
}

fn decode<T: DeserializeOwned>(response: ApiResponse<Value>) -> Result<ApiResponse<T>, TransportError> {
    match response {
        ApiResponse::Data(value) => Ok(ApiResponse::Data(serde_json::from_value(value)?)),
        ApiResponse::Error(err) => Ok(ApiResponse::Error(err)),
    }
}
