//! Error types for the transport and façade layers.

use thiserror::Error;

/// Failures that prevent a request/response exchange from completing.
///
/// HTTP error statuses are *not* represented here: the transport reports
/// them as [`ApiResponse::Error`](super::ApiResponse::Error) values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("Invalid request: {0}")]
    Protocol(String),
    #[error("Failed to decode response: {0}")]
    Decode(String),
    #[error("Failed to serialize request body: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_builder() {
            TransportError::Protocol(err.to_string())
        } else if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid field '{field}': {message}")]
    InvalidField { field: String, message: String },
    #[error("Validation failed: {0}")]
    Multiple(String),
}

/// Error returned by every façade method and by client construction.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The service answered with a non-success status. Displays as the
    /// bare message so callers see exactly what the service reported.
    #[error("{message}")]
    Rejected { message: String, code: Option<u16> },
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// HTTP status of a rejected request, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Rejected { code, .. } => *code,
            _ => None,
        }
    }

    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::Rejected { .. })
    }

    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}

impl From<super::ApiError> for ClientError {
    fn from(err: super::ApiError) -> Self {
        ClientError::Rejected {
            message: err.message,
            code: err.code,
        }
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(err: validator::ValidationErrors) -> Self {
        ClientError::Validation(ValidationError::Multiple(err.to_string()))
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode(err.to_string())
    }
}
