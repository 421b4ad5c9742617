use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::query::QueryParams;

/// Represents a transaction hash as returned by the service.
pub type TxHash = String;

/// Represents an account or contract address.
pub type Address = String;

/// Error half of the result envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, code: Option<u16>) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} ({})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Result envelope produced by the transport: either a payload or the
/// status line of a rejected request, never both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ApiResponse<T> {
    Data(T),
    Error(ApiError),
}

impl<T> ApiResponse<T> {
    pub fn is_data(&self) -> bool {
        matches!(self, ApiResponse::Data(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ApiResponse::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Data(data) => Some(data),
            ApiResponse::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ApiResponse::Data(_) => None,
            ApiResponse::Error(err) => Some(err),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        match self {
            ApiResponse::Data(data) => ApiResponse::Data(f(data)),
            ApiResponse::Error(err) => ApiResponse::Error(err),
        }
    }

    /// Unwrap the payload or return the error branch.
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            ApiResponse::Data(data) => Ok(data),
            ApiResponse::Error(err) => Err(err),
        }
    }
}

/// HTTP verbs the service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outgoing call, built fresh per request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub endpoint: String,
    pub method: HttpMethod,
    pub query: QueryParams,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, endpoint)
    }

    pub fn post(endpoint: impl Into<String>, body: Value) -> Self {
        Self::new(HttpMethod::Post, endpoint).with_body(body)
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Block selector: a height or a block hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockId {
    Number(u64),
    Hash(String),
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockId::Number(n) => write!(f, "{n}"),
            BlockId::Hash(h) => f.write_str(h),
        }
    }
}

impl From<u64> for BlockId {
    fn from(n: u64) -> Self {
        BlockId::Number(n)
    }
}

impl From<&str> for BlockId {
    fn from(s: &str) -> Self {
        BlockId::Hash(s.to_string())
    }
}

impl From<String> for BlockId {
    fn from(s: String) -> Self {
        BlockId::Hash(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub hash: String,
    pub parent_hash: String,
    pub number: u64,
    #[serde(default)]
    pub transactions: Vec<Value>,
    pub timestamp: u64,
    pub nonce: String,
    pub difficulty: u64,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub miner: Address,
    pub extra_data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub hash: TxHash,
    #[serde(rename = "type")]
    pub tx_type: u8,
    #[serde(default)]
    pub access_list: Vec<Value>,
    pub block_hash: Option<String>,
    pub block_number: Option<u64>,
    pub transaction_index: Option<u64>,
    pub confirmations: u64,
    pub from: Address,
    pub gas_price: Option<String>,
    pub max_priority_fee_per_gas: Option<String>,
    pub max_fee_per_gas: Option<String>,
    pub gas_limit: u64,
    pub to: Option<Address>,
    pub value: String,
    pub nonce: u64,
    pub data: String,
    pub r: String,
    pub s: String,
    pub v: u64,
    pub creates: Option<Address>,
    pub chain_id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub to: Option<Address>,
    pub from: Address,
    pub contract_address: Option<Address>,
    pub transaction_index: u64,
    pub gas_used: u64,
    pub logs_bloom: String,
    pub block_hash: String,
    pub transaction_hash: TxHash,
    #[serde(default)]
    pub logs: Vec<Value>,
    pub block_number: u64,
    pub confirmations: u64,
    pub cumulative_gas_used: u64,
    pub effective_gas_price: String,
    pub status: u8,
    #[serde(rename = "type")]
    pub tx_type: u8,
    pub byzantium: bool,
}

/// Result of submitting a transaction request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionSubmission {
    pub hash: TxHash,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wallet {
    pub address: Address,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub handle: String,
    pub wallet: Wallet,
}
