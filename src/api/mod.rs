//! Façade modules: one typed veneer per service domain.
//!
//! Every method maps onto exactly one transport call. A data envelope is
//! returned verbatim; an error envelope becomes [`ClientError::Rejected`].
//!
//! [`ClientError::Rejected`]: crate::domain::ClientError::Rejected

pub mod block;
pub mod chain;
pub mod contract;
pub mod erc20;
pub mod erc721;
pub mod transaction;
pub mod user;

pub use block::BlockApi;
pub use chain::ChainApi;
pub use contract::ContractApi;
pub use erc20::Erc20Api;
pub use erc721::Erc721Api;
pub use transaction::TransactionApi;
pub use user::UserApi;
