use std::sync::Arc;

use tracing::instrument;

use crate::domain::{
    ApiTransport, ClientError, QueryParams, Transaction, TransactionReceipt, TransactionRequest,
    TransactionSubmission, ValidationError,
};

/// Transaction submission and lookup.
#[derive(Clone)]
pub struct TransactionApi {
    transport: Arc<dyn ApiTransport>,
}

impl TransactionApi {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Ask the service to build, sign and broadcast a contract call.
    #[instrument(
        skip(self, request),
        fields(contract = %request.contract_address, function = %request.function_signature)
    )]
    pub async fn submit_transaction_request(
        &self,
        request: &TransactionRequest,
    ) -> Result<TransactionSubmission, ClientError> {
        let response = self.transport.post("/transaction/submit", request).await?;
        Ok(response.into_result()?)
    }

    #[instrument(skip(self))]
    pub async fn get_transaction(&self, hash: &str) -> Result<Transaction, ClientError> {
        require_hash(hash)?;
        let response = self
            .transport
            .get(&format!("/transaction/{hash}"), QueryParams::new())
            .await?;
        Ok(response.into_result()?)
    }

    #[instrument(skip(self))]
    pub async fn get_transaction_receipt(&self, hash: &str) -> Result<TransactionReceipt, ClientError> {
        require_hash(hash)?;
        let response = self
            .transport
            .get(&format!("/transaction/{hash}/receipt"), QueryParams::new())
            .await?;
        Ok(response.into_result()?)
    }
}

fn require_hash(hash: &str) -> Result<(), ValidationError> {
    if hash.is_empty() {
        return Err(ValidationError::InvalidField {
            field: "hash".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}
