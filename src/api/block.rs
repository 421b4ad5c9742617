use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::{ApiTransport, Block, BlockId, ClientError, QueryParams, ValidationError};

/// Block lookups.
#[derive(Clone)]
pub struct BlockApi {
    transport: Arc<dyn ApiTransport>,
}

impl BlockApi {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Fetch a block by height or hash.
    ///
    /// # Errors
    /// `ClientError::Validation` for an empty hash, `ClientError::Rejected`
    /// if the service refuses the request, or `ClientError::Transport` if
    /// the exchange fails.
    #[instrument(skip_all)]
    pub async fn get_block(&self, id: impl Into<BlockId>) -> Result<Block, ClientError> {
        let id = id.into();
        if matches!(&id, BlockId::Hash(hash) if hash.is_empty()) {
            return Err(ValidationError::InvalidField {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            }
            .into());
        }
        debug!(block = %id, "Fetching block");
        let response = self
            .transport
            .get(&format!("/block/{id}"), QueryParams::new())
            .await?;
        Ok(response.into_result()?)
    }

    /// Height of the latest block.
    #[instrument(skip(self))]
    pub async fn get_block_number(&self) -> Result<u64, ClientError> {
        let response = self.transport.get("/blockNumber", QueryParams::new()).await?;
        Ok(response.into_result()?)
    }
}
