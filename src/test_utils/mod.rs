//! Test utilities and mock implementations.
//!
//! This module provides a scriptable stand-in for the transport so the
//! façade modules can be tested without a running service.

pub mod mocks;

pub use mocks::{MockConfig, MockTransport};
