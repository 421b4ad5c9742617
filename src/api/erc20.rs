use std::sync::Arc;

use tracing::instrument;
use validator::Validate;

use crate::domain::{
    ApiTransport, ClientError, Erc20AllowanceRequest, Erc20ApproveRequest, Erc20BalanceRequest,
    Erc20TotalSupplyRequest, Erc20TransferFromRequest, Erc20TransferRequest, QueryParams,
};

/// Fungible token (ERC20) operations. Amounts travel as decimal strings.
#[derive(Clone)]
pub struct Erc20Api {
    transport: Arc<dyn ApiTransport>,
}

impl Erc20Api {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Token balance held by `request.address`.
    #[instrument(skip(self, request), fields(contract = %request.contract_address))]
    pub async fn get_balance(&self, request: &Erc20BalanceRequest) -> Result<String, ClientError> {
        request.validate()?;
        let endpoint = format!("/erc20/balance/{}", request.contract_address);
        let params = QueryParams::new().with("address", &request.address);
        let response = self.transport.get(&endpoint, params).await?;
        Ok(response.into_result()?)
    }

    /// Transfer tokens from the authenticated user's wallet.
    #[instrument(skip(self, request), fields(contract = %request.contract_address))]
    pub async fn transfer(&self, request: &Erc20TransferRequest) -> Result<String, ClientError> {
        let response = self.transport.post("/erc20/transfer", request).await?;
        Ok(response.into_result()?)
    }

    /// Allow `request.address` to spend up to `request.amount`.
    #[instrument(skip(self, request), fields(contract = %request.contract_address))]
    pub async fn approve(&self, request: &Erc20ApproveRequest) -> Result<String, ClientError> {
        let response = self.transport.post("/erc20/approve", request).await?;
        Ok(response.into_result()?)
    }

    #[instrument(skip(self, request), fields(contract = %request.contract_address))]
    pub async fn transfer_from(&self, request: &Erc20TransferFromRequest) -> Result<String, ClientError> {
        let response = self.transport.post("/erc20/transferFrom", request).await?;
        Ok(response.into_result()?)
    }

    /// Remaining amount `spender` may withdraw from `owner`.
    #[instrument(skip(self, request), fields(contract = %request.contract_address))]
    pub async fn allowance(&self, request: &Erc20AllowanceRequest) -> Result<String, ClientError> {
        request.validate()?;
        let endpoint = format!("/erc20/allowance/{}", request.contract_address);
        let params = QueryParams::new()
            .with("owner", &request.owner)
            .with("spender", &request.spender);
        let response = self.transport.get(&endpoint, params).await?;
        Ok(response.into_result()?)
    }

    #[instrument(skip(self, request), fields(contract = %request.contract_address))]
    pub async fn total_supply(&self, request: &Erc20TotalSupplyRequest) -> Result<String, ClientError> {
        request.validate()?;
        let endpoint = format!("/erc20/totalSupply/{}", request.contract_address);
        let response = self.transport.get(&endpoint, QueryParams::new()).await?;
        Ok(response.into_result()?)
    }
}
