use std::sync::Arc;

use tracing::instrument;

use crate::domain::{ApiTransport, CallContractRequest, ClientError};

/// Read-only smart contract calls.
#[derive(Clone)]
pub struct ContractApi {
    transport: Arc<dyn ApiTransport>,
}

impl ContractApi {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Call a contract function and return its encoded result.
    #[instrument(
        skip(self, request),
        fields(contract = %request.contract_address, function = %request.function_signature)
    )]
    pub async fn call_contract(&self, request: &CallContractRequest) -> Result<String, ClientError> {
        let response = self.transport.post("/contract/call", request).await?;
        Ok(response.into_result()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiResponse, HttpMethod};
    use crate::test_utils::MockTransport;
    use serde_json::json;

    fn request() -> CallContractRequest {
        CallContractRequest {
            function_signature: "balanceOf(address)".to_string(),
            params: vec!["0x123".to_string()],
            contract_address: "0xABC".to_string(),
        }
    }

    #[tokio::test]
    async fn test_call_contract() {
        let mock = Arc::new(MockTransport::new());
        mock.respond_with("/contract/call", ApiResponse::Data(json!("0x2a")));

        let result = ContractApi::new(mock.clone())
            .call_contract(&request())
            .await
            .unwrap();
        assert_eq!(result, "0x2a");

        let req = mock.last_request().unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(
            req.body,
            Some(json!({
                "functionSignature": "balanceOf(address)",
                "params": ["0x123"],
                "contractAddress": "0xABC"
            }))
        );
    }

    #[tokio::test]
    async fn test_call_contract_error() {
        let mock = Arc::new(MockTransport::rejecting("boom", Some(400)));

        let err = ContractApi::new(mock).call_contract(&request()).await.unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }
}
