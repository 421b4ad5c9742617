use std::sync::Arc;

use tracing::instrument;
use validator::Validate;

use crate::domain::{
    ApiTransport, ClientError, Erc721ApproveRequest, Erc721ApprovedRequest, Erc721BalanceRequest,
    Erc721IsApprovedForAllRequest, Erc721SetApprovalForAllRequest, Erc721TransferRequest,
    QueryParams,
};

/// Non-fungible token (ERC721) operations.
#[derive(Clone)]
pub struct Erc721Api {
    transport: Arc<dyn ApiTransport>,
}

impl Erc721Api {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Number of tokens of the collection owned by `request.address`.
    #[instrument(skip(self, request), fields(contract = %request.contract_address))]
    pub async fn get_balance(&self, request: &Erc721BalanceRequest) -> Result<String, ClientError> {
        request.validate()?;
        let endpoint = format!("/erc721/balance/{}", request.contract_address);
        let params = QueryParams::new().with("address", &request.address);
        let response = self.transport.get(&endpoint, params).await?;
        Ok(response.into_result()?)
    }

    /// Move a token with `transferFrom`.
    #[instrument(skip(self, request), fields(contract = %request.contract_address, token_id = %request.token_id))]
    pub async fn transfer(&self, request: &Erc721TransferRequest) -> Result<String, ClientError> {
        let response = self.transport.post("/erc721/transferFrom", request).await?;
        Ok(response.into_result()?)
    }

    /// Move a token with `safeTransferFrom`, which checks the receiver can hold it.
    #[instrument(skip(self, request), fields(contract = %request.contract_address, token_id = %request.token_id))]
    pub async fn safe_transfer_from(&self, request: &Erc721TransferRequest) -> Result<String, ClientError> {
        let response = self.transport.post("/erc721/safeTransferFrom", request).await?;
        Ok(response.into_result()?)
    }

    #[instrument(skip(self, request), fields(contract = %request.contract_address, token_id = %request.token_id))]
    pub async fn approve(&self, request: &Erc721ApproveRequest) -> Result<String, ClientError> {
        let response = self.transport.post("/erc721/approve", request).await?;
        Ok(response.into_result()?)
    }

    /// Address approved to move a single token.
    #[instrument(skip(self, request), fields(contract = %request.contract_address, token_id = %request.token_id))]
    pub async fn approved(&self, request: &Erc721ApprovedRequest) -> Result<String, ClientError> {
        request.validate()?;
        let endpoint = format!("/erc721/approved/{}/{}", request.contract_address, request.token_id);
        let response = self.transport.get(&endpoint, QueryParams::new()).await?;
        Ok(response.into_result()?)
    }

    #[instrument(skip(self, request), fields(contract = %request.contract_address, operator = %request.operator))]
    pub async fn set_approval_for_all(
        &self,
        request: &Erc721SetApprovalForAllRequest,
    ) -> Result<String, ClientError> {
        let response = self.transport.post("/erc721/setApprovalForAll", request).await?;
        Ok(response.into_result()?)
    }

    /// Whether `operator` may manage every token `owner` holds in the collection.
    #[instrument(skip(self, request), fields(contract = %request.contract_address, operator = %request.operator))]
    pub async fn is_approved_for_all(
        &self,
        request: &Erc721IsApprovedForAllRequest,
    ) -> Result<bool, ClientError> {
        let response = self.transport.post("/erc721/isApprovedForAll", request).await?;
        Ok(response.into_result()?)
    }
}
