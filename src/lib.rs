//! Swaye API Client
//!
//! A typed async client for the Swaye blockchain data service, built on
//! trait-based abstraction and dependency injection.
//!
//! # Architecture Overview
//!
//! This crate is organized into four layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 Client Layer                 │
//! │  SwayeClient: one transport, all modules     │
//! ├─────────────────────────────────────────────┤
//! │                 Façade Layer                 │
//! │  block, chain, contract, erc20, erc721, ...  │
//! ├─────────────────────────────────────────────┤
//! │                 Domain Layer                 │
//! │   Transport trait, envelope, types, errors   │
//! ├─────────────────────────────────────────────┤
//! │             Infrastructure Layer             │
//! │          reqwest-backed HTTP transport       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Key Features
//!
//! - **Transport seam**: every module calls through `Arc<dyn ApiTransport>`
//! - **Envelope**: the transport yields either a data or an error envelope, never both
//! - **Shared credential**: a bearer token set on the client applies to every module
//! - **Testability**: `MockTransport` (feature `test-utils`) replaces the network
//! - **Logging**: Structured logging with `tracing`
//! - **Security**: The bearer token is held as a `secrecy::SecretString`
//!
//! # Example
//!
//! ```ignore
//! use swaye_client::SwayeClient;
//! use swaye_client::domain::Erc20BalanceRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), swaye_client::domain::ClientError> {
//!     let client = SwayeClient::from_env()?;
//!
//!     let block = client.block.get_block(19_000_000u64).await?;
//!     println!("block {} has {} transactions", block.number, block.transactions.len());
//!
//!     let balance = client
//!         .erc20
//!         .get_balance(&Erc20BalanceRequest {
//!             address: "0x123".to_string(),
//!             contract_address: "0xABC".to_string(),
//!         })
//!         .await?;
//!     println!("balance: {balance}");
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod domain;
pub mod infra;

// Test utilities are available in tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use client::SwayeClient;
pub use config::ClientConfig;
pub use domain::{ApiResponse, ApiTransport, ClientError};
pub use infra::HttpApiClient;
