//! Noun Project MCP Server
//!
//! A Model Context Protocol server that lets assistants search The Noun
//! Project icon library. Seven read-only tools are exposed; each call is
//! validated against its declared input schema, forwarded to the upstream
//! REST API with an OAuth 1.0a signature, and answered with a text envelope.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and
//!   the transports (stdio, optional HTTP)
//! - **domains**
//!   - **noun_project**: request signing, typed query parameters and the
//!     upstream HTTP client
//!   - **tools**: the operation registry, argument validation and the
//!     dispatcher that turns every call into a success or error envelope
//!
//! # Example
//!
//! ```rust,no_run
//! use noun_project_mcp::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     let usage = server.call("check_usage", None).await;
//!     println!("{:?}", usage.content);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
