use std::sync::Arc;

use tracing::instrument;

use crate::domain::{ApiTransport, ClientError, QueryParams, User};

/// Data about the authenticated user. Every call needs a bearer token.
#[derive(Clone)]
pub struct UserApi {
    transport: Arc<dyn ApiTransport>,
}

impl UserApi {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self) -> Result<User, ClientError> {
        let response = self.transport.get("/user", QueryParams::new()).await?;
        Ok(response.into_result()?)
    }

    /// Native currency balance of the user's wallet.
    #[instrument(skip(self))]
    pub async fn get_balance(&self) -> Result<String, ClientError> {
        let response = self.transport.get("/user/balance", QueryParams::new()).await?;
        Ok(response.into_result()?)
    }

    #[instrument(skip(self))]
    pub async fn get_accounts(&self) -> Result<Vec<String>, ClientError> {
        let response = self.transport.get("/user/accounts", QueryParams::new()).await?;
        Ok(response.into_result()?)
    }
}
