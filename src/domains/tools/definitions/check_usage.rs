//! API quota tool.
//!
//! Takes no arguments. The payload is returned exactly as the upstream
//! service reports it so callers can police their own request rate.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;

use crate::domains::noun_project::IconApi;
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::schema::{ArgSpec, JsonObject, OperationDescriptor};

#[derive(Debug, Clone)]
pub struct CheckUsageTool;

impl CheckUsageTool {
    pub const NAME: &'static str = "check_usage";

    pub const TITLE: &'static str = "Check API Usage";

    pub const DESCRIPTION: &'static str = "Check current Noun Project API usage and monthly quota. \
         Returns usage count and remaining requests. \
         Use this to monitor rate limits before making bulk requests.";

    pub const ARGS: &'static [ArgSpec] = &[];

    pub fn descriptor() -> OperationDescriptor {
        OperationDescriptor {
            name: Self::NAME,
            title: Self::TITLE,
            description: Self::DESCRIPTION,
            args: Self::ARGS,
        }
    }

    pub fn handle(api: Arc<dyn IconApi>, _args: JsonObject) -> BoxFuture<'static, ToolResult<Value>> {
        async move { Ok(api.check_usage().await?) }.boxed()
    }
}
