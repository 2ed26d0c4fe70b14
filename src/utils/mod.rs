//! Shared utilities
//!
//! This module provides error handling and other cross-cutting helpers.

pub mod error;

pub use error::{GatewayError, Result};
