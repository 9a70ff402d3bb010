//! Tools domain module.
//!
//! Exposes the upstream icon service as MCP tools.
//!
//! ## Architecture
//!
//! - `definitions/` - One file per operation (descriptor + handler)
//! - `schema.rs` - Declarative argument schemas and the generic validator
//! - `registry.rs` - The immutable operation catalog
//! - `dispatcher.rs` - Name → handler mapping and envelope construction
//! - `error.rs` - Tool errors and the normalized error shape
//!
//! ## Adding a New Tool
//!
//! 1. Add the upstream call to `IconApi` in `domains/noun_project/client.rs`
//! 2. Create a file in `definitions/` with the descriptor and `handle()`
//! 3. Register the descriptor in `registry.rs` and the handler in `dispatcher.rs`

pub mod definitions;
pub mod dispatcher;
mod error;
pub mod registry;
pub mod schema;

pub use dispatcher::{DispatchTable, Dispatcher, Handler};
pub use error::{NormalizedError, ToolError, ToolResult};
pub use registry::ToolRegistry;
pub use schema::{ArgKind, ArgSpec, JsonObject, OperationDescriptor};
