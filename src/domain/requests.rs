//! Request objects accepted by the façade modules.
//!
//! POST requests are sent verbatim as the JSON body (camelCase keys).
//! Fields interpolated into a URL path must be non-empty; nothing else is
//! checked here.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallContractRequest {
    pub function_signature: String,
    pub params: Vec<String>,
    pub contract_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub function_signature: String,
    pub params: Vec<Value>,
    pub contract_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl TransactionRequest {
    pub fn new(
        contract_address: impl Into<String>,
        function_signature: impl Into<String>,
        params: Vec<Value>,
    ) -> Self {
        Self {
            function_signature: function_signature.into(),
            params,
            contract_address: contract_address.into(),
            value: None,
        }
    }

    /// Attach native currency to send along with the call.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Erc20BalanceRequest {
    pub address: String,
    #[validate(length(min = 1))]
    pub contract_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc20TransferRequest {
    pub address: String,
    pub amount: String,
    pub contract_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc20ApproveRequest {
    pub address: String,
    pub amount: String,
    pub contract_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc20TransferFromRequest {
    pub contract_address: String,
    pub from: String,
    pub to: String,
    pub amount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Erc20AllowanceRequest {
    pub owner: String,
    pub spender: String,
    #[validate(length(min = 1))]
    pub contract_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Erc20TotalSupplyRequest {
    #[validate(length(min = 1))]
    pub contract_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Erc721BalanceRequest {
    pub address: String,
    #[validate(length(min = 1))]
    pub contract_address: String,
}

/// Used by both `transferFrom` and `safeTransferFrom`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc721TransferRequest {
    pub from: String,
    pub to: String,
    pub token_id: String,
    pub contract_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc721ApproveRequest {
    pub approved_address: String,
    pub token_id: String,
    pub contract_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Erc721ApprovedRequest {
    #[validate(length(min = 1))]
    pub token_id: String,
    #[validate(length(min = 1))]
    pub contract_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc721SetApprovalForAllRequest {
    pub operator: String,
    pub approved: bool,
    pub contract_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc721IsApprovedForAllRequest {
    pub owner: String,
    pub operator: String,
    pub contract_address: String,
}
