//! Collection search tool.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;

use super::common::FLAG;
use crate::domains::noun_project::IconApi;
use crate::domains::noun_project::params::SearchCollectionsParams;
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::schema::{ArgKind, ArgSpec, JsonObject, OperationDescriptor};

/// Keyword search over curated icon collections.
#[derive(Debug, Clone)]
pub struct SearchCollectionsTool;

impl SearchCollectionsTool {
    pub const NAME: &'static str = "search_collections";

    pub const TITLE: &'static str = "Search Collections";

    pub const DESCRIPTION: &'static str = "Search for icon collections on The Noun Project by keyword. \
         Returns paginated results of themed icon groups. \
         Use this to discover curated sets of related icons.";

    pub const ARGS: &'static [ArgSpec] = &[
        ArgSpec::new(
            "query",
            ArgKind::String,
            "Search term for collections (e.g., \"winter\", \"business\", \"animals\")",
        )
        .required(),
        ArgSpec::new(
            "blacklist",
            ArgKind::Number,
            "Set to 1 to remove results matching terms or IDs in blacklist",
        )
        .one_of(FLAG),
        ArgSpec::new("limit", ArgKind::Number, "Maximum number of results to return").at_least(1),
        ArgSpec::new(
            "prev_page",
            ArgKind::String,
            "Token for paging to the previous page",
        ),
        ArgSpec::new("next_page", ArgKind::String, "Token for paging to the next page"),
    ];

    pub fn descriptor() -> OperationDescriptor {
        OperationDescriptor {
            name: Self::NAME,
            title: Self::TITLE,
            description: Self::DESCRIPTION,
            args: Self::ARGS,
        }
    }

    pub fn handle(api: Arc<dyn IconApi>, args: JsonObject) -> BoxFuture<'static, ToolResult<Value>> {
        async move {
            let params: SearchCollectionsParams = serde_json::from_value(Value::Object(args))?;
            Ok(api.search_collections(params).await?)
        }
        .boxed()
    }
}
