//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools domain.
//!
//! `list_tools` and `call_tool` are implemented directly instead of through
//! an rmcp `ToolRouter`: every call, including one naming an unknown tool,
//! must come back as a tool result envelope rather than a protocol error.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::noun_project::{IconApi, NounProjectClient};
use crate::domains::tools::{Dispatcher, JsonObject};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool dispatcher wrapping the upstream client.
    dispatcher: Dispatcher,
}

impl McpServer {
    /// Create a new MCP server talking to The Noun Project.
    ///
    /// Fails if the credentials are missing; no network I/O happens here.
    pub fn new(config: Config) -> Result<Self> {
        let credentials = config.credentials.resolve()?;
        let client = NounProjectClient::with_base_url(credentials, &config.upstream.base_url)?;
        Ok(Self::with_api(config, Arc::new(client)))
    }

    /// Create a server over any upstream implementation.
    pub fn with_api(config: Config, api: Arc<dyn IconApi>) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: Dispatcher::standard(api),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// All available tools, in registry order.
    pub fn tools(&self) -> Vec<Tool> {
        self.dispatcher.registry().tools()
    }

    /// Call a tool by name. Always yields an envelope.
    pub async fn call(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        self.dispatcher.dispatch(name, arguments).await
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Search The Noun Project icon library: find icons and collections by keyword, \
                 inspect icon details, get autocomplete suggestions, build download URLs, \
                 and check the remaining API quota."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip_all)]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip_all, fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        Ok(self.call(&request.name, request.arguments).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CredentialsConfig;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.credentials = CredentialsConfig {
            api_key: Some("key".to_string()),
            api_secret: Some("secret".to_string()),
        };
        // Nothing listens here; any accidental request fails fast.
        config.upstream.base_url = "http://127.0.0.1:9".to_string();
        config
    }

    #[test]
    fn test_new_requires_credentials() {
        assert!(McpServer::new(Config::default()).is_err());
        assert!(McpServer::new(test_config()).is_ok());
    }

    #[test]
    fn test_tools_listed_without_network() {
        let server = McpServer::new(test_config()).unwrap();
        let tools = server.tools();
        assert_eq!(tools.len(), 7);
        assert_eq!(tools[0].name, "search_icons");
        assert_eq!(tools[6].name, "get_download_url");
    }

    #[test]
    fn test_get_info_enables_tools() {
        let server = McpServer::new(test_config()).unwrap();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.is_some());
        assert_eq!(info.server_info.name, "noun-project-mcp");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_get_info_uses_configured_name() {
        let mut config = test_config();
        config.server.name = "icons-staging".to_string();
        let server = McpServer::new(config).unwrap();
        assert_eq!(server.get_info().server_info.name, "icons-staging");
    }

    #[tokio::test]
    async fn test_unknown_tool_envelope() {
        let server = McpServer::new(test_config()).unwrap();
        let result = server.call("nonexistent_op", None).await;
        assert_eq!(result.is_error, Some(true));
        match &result.content[0].raw {
            RawContent::Text(text) => assert_eq!(text.text, "Error: Unknown tool: nonexistent_op"),
            other => panic!("unexpected content {:?}", other),
        }
    }

    #[test]
    fn test_server_identity() {
        let server = McpServer::new(test_config()).unwrap();
        assert_eq!(server.name(), "noun-project-mcp");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }
}
