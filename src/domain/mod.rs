//! Domain layer: value types, request objects, errors and the transport seam.

pub mod error;
pub mod query;
pub mod requests;
pub mod traits;
pub mod types;

pub use error::{ClientError, ConfigError, TransportError, ValidationError};
pub use query::QueryParams;
pub use requests::{
    CallContractRequest, Erc20AllowanceRequest, Erc20ApproveRequest, Erc20BalanceRequest,
    Erc20TotalSupplyRequest, Erc20TransferFromRequest, Erc20TransferRequest, Erc721ApproveRequest,
    Erc721ApprovedRequest, Erc721BalanceRequest, Erc721IsApprovedForAllRequest,
    Erc721SetApprovalForAllRequest, Erc721TransferRequest, TransactionRequest,
};
pub use traits::ApiTransport;
pub use types::{
    Address, ApiError, ApiRequest, ApiResponse, Block, BlockId, HttpMethod, Transaction,
    TransactionReceipt, TransactionSubmission, TxHash, User, Wallet,
};
