use std::sync::Arc;

use tracing::instrument;

use crate::domain::{ApiTransport, ClientError, QueryParams};

/// Chain metadata.
#[derive(Clone)]
pub struct ChainApi {
    transport: Arc<dyn ApiTransport>,
}

impl ChainApi {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Chain ID of the network the service is connected to.
    #[instrument(skip(self))]
    pub async fn get_chain_id(&self) -> Result<u64, ClientError> {
        let response = self.transport.get("/chain/chainId", QueryParams::new()).await?;
        Ok(response.into_result()?)
    }
}
