//! Infrastructure layer implementations.

pub mod http;

pub use http::{HttpApiClient, build_url};
