//! Tool Registry - the immutable catalog of operations.
//!
//! Built once at startup and shared read-only. It answers "what operations
//! exist" without touching the network and hands the dispatcher the schema
//! to validate against.

use rmcp::model::Tool;

use super::definitions::{
    CheckUsageTool, GetCollectionTool, GetDownloadUrlTool, GetIconTool, IconAutocompleteTool,
    SearchCollectionsTool, SearchIconsTool,
};
use super::schema::OperationDescriptor;

/// Tool registry - holds every operation descriptor in declaration order.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    descriptors: Vec<OperationDescriptor>,
}

impl ToolRegistry {
    /// The seven Noun Project operations.
    pub fn standard() -> Self {
        Self::from_descriptors(vec![
            SearchIconsTool::descriptor(),
            GetIconTool::descriptor(),
            GetCollectionTool::descriptor(),
            SearchCollectionsTool::descriptor(),
            IconAutocompleteTool::descriptor(),
            CheckUsageTool::descriptor(),
            GetDownloadUrlTool::descriptor(),
        ])
    }

    /// Build a registry from an explicit descriptor list.
    pub fn from_descriptors(descriptors: Vec<OperationDescriptor>) -> Self {
        Self { descriptors }
    }

    pub fn descriptors(&self) -> &[OperationDescriptor] {
        &self.descriptors
    }

    /// Look up a descriptor by operation name.
    pub fn get(&self, name: &str) -> Option<&OperationDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.descriptors.iter().map(|d| d.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn tools(&self) -> Vec<Tool> {
        self.descriptors.iter().map(|d| d.to_tool()).collect()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
