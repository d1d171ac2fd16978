//! Error types for the test user client.
//!
//! This module provides the error handling system for the crate with specialized error types
//! for configuration and Graph API interactions. All errors use `thiserror` for ergonomic
//! definitions with automatic `Display` and `Error` trait implementations.

pub mod config;
pub mod graph;

use thiserror::Error;

use crate::error::{config::ConfigError, graph::GraphError};

/// Main error type for the crate.
///
/// This enum aggregates domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Graph API errors (error envelopes, unexpected statuses, failed writes)
/// - Transport errors (connection failures, timeouts)
/// - Decoding errors (response bodies that don't match the expected shape)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Graph API error (error envelope, unexpected status, rejected write).
    #[error(transparent)]
    GraphError(#[from] GraphError),
    /// HTTP transport error (connection, TLS, timeout, body read).
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// Response body could not be decoded into the expected type.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}
