//! Dispatcher - maps an operation name to its upstream call.
//!
//! The single entry point for tool calls. Every call yields a well-formed
//! envelope: the pretty-printed JSON result on success, or `Error: <message>`
//! flagged as an error. Failures never propagate past this boundary.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::BoxFuture;
use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::definitions::{
    CheckUsageTool, GetCollectionTool, GetDownloadUrlTool, GetIconTool, IconAutocompleteTool,
    SearchCollectionsTool, SearchIconsTool,
};
use super::error::{NormalizedError, ToolError, ToolResult};
use super::registry::ToolRegistry;
use super::schema::JsonObject;
use crate::domains::noun_project::IconApi;

/// Runs one operation against the upstream API.
pub type Handler = fn(Arc<dyn IconApi>, JsonObject) -> BoxFuture<'static, ToolResult<Value>>;

/// Static mapping from operation name to handler.
#[derive(Clone, Default)]
pub struct DispatchTable {
    handlers: HashMap<&'static str, Handler>,
}

impl DispatchTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handlers for the seven Noun Project operations.
    pub fn standard() -> Self {
        Self::new()
            .with_handler(SearchIconsTool::NAME, SearchIconsTool::handle)
            .with_handler(GetIconTool::NAME, GetIconTool::handle)
            .with_handler(GetCollectionTool::NAME, GetCollectionTool::handle)
            .with_handler(SearchCollectionsTool::NAME, SearchCollectionsTool::handle)
            .with_handler(IconAutocompleteTool::NAME, IconAutocompleteTool::handle)
            .with_handler(CheckUsageTool::NAME, CheckUsageTool::handle)
            .with_handler(GetDownloadUrlTool::NAME, GetDownloadUrlTool::handle)
    }

    pub fn with_handler(mut self, name: &'static str, handler: Handler) -> Self {
        self.handlers.insert(name, handler);
        self
    }

    pub fn get(&self, name: &str) -> Option<Handler> {
        self.handlers.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Routes tool calls to the upstream client and builds the envelope.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
    table: Arc<DispatchTable>,
    api: Arc<dyn IconApi>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ToolRegistry>, table: Arc<DispatchTable>, api: Arc<dyn IconApi>) -> Self {
        Self {
            registry,
            table,
            api,
        }
    }

    /// Dispatcher over the standard registry and table.
    pub fn standard(api: Arc<dyn IconApi>) -> Self {
        Self::new(
            Arc::new(ToolRegistry::standard()),
            Arc::new(DispatchTable::standard()),
            api,
        )
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Resolve, validate and run an operation, returning its raw result.
    pub async fn execute(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<Value, NormalizedError> {
        let handler = self
            .table
            .get(name)
            .ok_or_else(|| ToolError::not_found(name))?;

        let mut arguments = arguments.unwrap_or_default();
        if let Some(descriptor) = self.registry.get(name) {
            descriptor.validate(&arguments)?;
            arguments = descriptor.normalize(arguments);
        }

        Ok(handler(self.api.clone(), arguments).await?)
    }

    /// Run an operation and wrap the outcome in a tool-call envelope.
    #[instrument(skip(self, arguments))]
    pub async fn dispatch(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        let outcome = self.execute(name, arguments).await.and_then(|value| {
            serde_json::to_string_pretty(&value)
                .map_err(|e| NormalizedError::new(format!("failed to serialize result: {e}")))
        });

        match outcome {
            Ok(text) => {
                info!("Tool {} succeeded", name);
                CallToolResult::success(vec![Content::text(text)])
            }
            Err(err) => {
                warn!("Tool {} failed: {}", name, err);
                CallToolResult::error(vec![Content::text(err.envelope_text())])
            }
        }
    }
}
