//! The client aggregate.
//!
//! [`SwayeClient`] wires one shared transport into every façade module, so a
//! credential change made through the client is seen by all of them.

use std::sync::Arc;

use secrecy::SecretString;
use tracing::{debug, info};

use crate::api::{BlockApi, ChainApi, ContractApi, Erc20Api, Erc721Api, TransactionApi, UserApi};
use crate::config::ClientConfig;
use crate::domain::{ApiTransport, ClientError};
use crate::infra::HttpApiClient;

/// Entry point to the Swaye API.
///
/// # Example
///
/// ```ignore
/// use swaye_client::SwayeClient;
///
/// let client = SwayeClient::new("https://api.swaye.io", None)?;
/// let height = client.block.get_block_number().await?;
///
/// client.set_bearer_token("token-from-login");
/// let user = client.user.get_user().await?;
/// ```
#[derive(Clone)]
pub struct SwayeClient {
    transport: Arc<dyn ApiTransport>,

    pub block: BlockApi,
    pub chain: ChainApi,
    pub contract: ContractApi,
    pub erc20: Erc20Api,
    pub erc721: Erc721Api,
    pub transaction: TransactionApi,
    pub user: UserApi,
}

impl SwayeClient {
    /// Create a client for `base_url`, optionally authenticated.
    ///
    /// # Errors
    /// `ClientError::Config` if `base_url` is not a URL, or
    /// `ClientError::Transport` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, bearer_token: Option<SecretString>) -> Result<Self, ClientError> {
        let mut config = ClientConfig::new(base_url);
        config.bearer_token = bearer_token;
        Self::from_config(config)
    }

    /// # Errors
    /// See [`SwayeClient::new`].
    pub fn from_config(config: ClientConfig) -> Result<Self, ClientError> {
        config.check()?;
        let transport = HttpApiClient::new(config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Build from `SWAYE_*` environment variables (and `.env`).
    ///
    /// # Errors
    /// `ClientError::Config` if `SWAYE_API_URL` is missing or a value is malformed.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Build on top of any transport, e.g. a mock in tests.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn ApiTransport>) -> Self {
        info!(base_url = %transport.base_url(), "Initializing Swaye client");
        Self {
            block: BlockApi::new(Arc::clone(&transport)),
            chain: ChainApi::new(Arc::clone(&transport)),
            contract: ContractApi::new(Arc::clone(&transport)),
            erc20: Erc20Api::new(Arc::clone(&transport)),
            erc721: Erc721Api::new(Arc::clone(&transport)),
            transaction: TransactionApi::new(Arc::clone(&transport)),
            user: UserApi::new(Arc::clone(&transport)),
            transport,
        }
    }

    /// Authenticate subsequent requests from every module. An empty token
    /// clears the credential.
    pub fn set_bearer_token(&self, token: impl Into<SecretString>) {
        debug!("Updating bearer token");
        self.transport.set_bearer_token(Some(token.into()));
    }

    pub fn clear_bearer_token(&self) {
        debug!("Clearing bearer token");
        self.transport.set_bearer_token(None);
    }

    #[must_use]
    pub fn has_bearer_token(&self) -> bool {
        self.transport.has_bearer_token()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiResponse, Erc20TotalSupplyRequest};
    use crate::test_utils::MockTransport;
    use serde_json::json;

    fn setup() -> (Arc<MockTransport>, SwayeClient) {
        let mock = Arc::new(MockTransport::new());
        let client = SwayeClient::with_transport(mock.clone());
        (mock, client)
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = SwayeClient::new("https://api.swaye.io/", None).unwrap();
        assert_eq!(client.base_url(), "https://api.swaye.io");
        assert!(!client.has_bearer_token());
    }

    #[test]
    fn test_new_with_token() {
        let client = SwayeClient::new("https://api.swaye.io", Some("tok".into())).unwrap();
        assert!(client.has_bearer_token());
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let result = SwayeClient::new("not a url", None);
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn test_from_config_with_timeouts() {
        let config = ClientConfig::new("http://localhost:8080")
            .with_timeout(std::time::Duration::from_secs(5))
            .with_connect_timeout(std::time::Duration::from_secs(1));
        let client = SwayeClient::from_config(config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_is_clone() {
        let (_, client) = setup();
        let cloned = client.clone();
        assert!(Arc::ptr_eq(&client.transport, &cloned.transport));
    }

    #[tokio::test]
    async fn test_token_rotation_is_seen_by_every_module() {
        let (mock, client) = setup();
        mock.respond_with("/blockNumber", ApiResponse::Data(json!(1)));
        mock.respond_with("/erc20/totalSupply/0xABC", ApiResponse::Data(json!("10")));
        mock.respond_with("/user/accounts", ApiResponse::Data(json!([])));

        let supply = Erc20TotalSupplyRequest {
            contract_address: "0xABC".to_string(),
        };

        client.block.get_block_number().await.unwrap();

        client.set_bearer_token("first");
        assert!(client.has_bearer_token());
        client.erc20.total_supply(&supply).await.unwrap();

        client.set_bearer_token("second");
        client.user.get_accounts().await.unwrap();

        client.clear_bearer_token();
        assert!(!client.has_bearer_token());
        client.block.get_block_number().await.unwrap();

        assert_eq!(
            mock.tokens_seen(),
            vec![
                None,
                Some("first".to_string()),
                Some("second".to_string()),
                None
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_token_clears_credential() {
        let (mock, client) = setup();
        mock.respond_with("/chain/chainId", ApiResponse::Data(json!(1)));

        client.set_bearer_token("tok");
        client.set_bearer_token("");
        assert!(!client.has_bearer_token());

        client.chain.get_chain_id().await.unwrap();
        assert_eq!(mock.tokens_seen(), vec![None]);
    }

    #[tokio::test]
    async fn test_modules_share_one_transport() {
        let (mock, client) = setup();
        mock.respond_with("/blockNumber", ApiResponse::Data(json!(7)));
        mock.respond_with("/chain/chainId", ApiResponse::Data(json!(11155111)));

        assert_eq!(client.block.get_block_number().await.unwrap(), 7);
        assert_eq!(client.chain.get_chain_id().await.unwrap(), 11155111);
        assert_eq!(mock.call_count(), 2);
    }
}
