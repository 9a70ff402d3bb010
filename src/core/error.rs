//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type for everything that can go wrong
//! outside a single tool call: startup configuration, client construction
//! and the transport layer. Tool call failures never reach it; they are
//! turned into error envelopes by the dispatcher.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The upstream API client could not be built.
    #[error("Upstream client error: {0}")]
    Upstream(#[from] crate::domains::noun_project::ApiError),

    /// Transport failures (bind, serve, protocol).
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
