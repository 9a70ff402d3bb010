//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and a `.env` file when present). The Noun Project
//! key and secret are mandatory: without them the server refuses to start.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::domains::noun_project::{Credentials, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Environment variable holding the Noun Project API key.
pub const API_KEY_VAR: &str = "NOUN_PROJECT_API_KEY";

/// Environment variable holding the Noun Project API secret.
pub const API_SECRET_VAR: &str = "NOUN_PROJECT_API_SECRET";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream API credentials.
    pub credentials: CredentialsConfig,

    /// Upstream API location.
    pub upstream: UpstreamConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the Noun Project API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing)]
    pub api_secret: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_secret", &self.api_secret.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl CredentialsConfig {
    /// Turn the configured pair into signing credentials.
    ///
    /// Fails when either value is missing or blank.
    pub fn resolve(&self) -> Result<Credentials> {
        match (non_blank(&self.api_key), non_blank(&self.api_secret)) {
            (Some(key), Some(secret)) => Ok(Credentials::new(key, secret)),
            _ => Err(Error::config(format!(
                "{API_KEY_VAR} and {API_SECRET_VAR} must be set"
            ))),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Where the upstream API lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "noun-project-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `NOUN_PROJECT_API_KEY` / `NOUN_PROJECT_API_SECRET` (required),
    /// `NOUN_PROJECT_API_URL`, and the `MCP_`-prefixed server settings such
    /// as `MCP_SERVER_NAME` and `MCP_LOG_LEVEL`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        config.credentials = CredentialsConfig {
            api_key: std::env::var(API_KEY_VAR).ok(),
            api_secret: std::env::var(API_SECRET_VAR).ok(),
        };
        config.credentials.resolve()?;

        if let Ok(base_url) = std::env::var("NOUN_PROJECT_API_URL") {
            info!("Using custom Noun Project API URL: {}", base_url);
            config.upstream.base_url = base_url;
        }

        Ok(config)
    }
}
