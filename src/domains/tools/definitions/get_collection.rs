//! Collection detail tool.
//!
//! Collections are curated, themed groups of icons ("Weather Icons",
//! "Business Icons"); the response lists the icons they contain.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;

use super::common::{FLAG, THUMBNAIL_SIZES};
use crate::domains::noun_project::IconApi;
use crate::domains::noun_project::params::GetCollectionParams;
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::schema::{ArgKind, ArgSpec, JsonObject, OperationDescriptor};

#[derive(Debug, Clone)]
pub struct GetCollectionTool;

impl GetCollectionTool {
    pub const NAME: &'static str = "get_collection";

    pub const TITLE: &'static str = "Get Collection";

    pub const DESCRIPTION: &'static str = "Get a curated collection of icons by its ID. \
         Returns collection metadata and the icons it contains. \
         Collections are themed groups of icons (e.g., \"Weather Icons\", \"Business Icons\").";

    pub const ARGS: &'static [ArgSpec] = &[
        ArgSpec::new("collection_id", ArgKind::Number, "The unique ID of the collection")
            .required(),
        ArgSpec::new(
            "thumbnail_size",
            ArgKind::Number,
            "Thumbnail size to return for icons (42, 84, or 200 pixels)",
        )
        .one_of(THUMBNAIL_SIZES),
        ArgSpec::new(
            "include_svg",
            ArgKind::Number,
            "Set to 1 to include SVG URLs in the response",
        )
        .one_of(FLAG),
        ArgSpec::new(
            "limit",
            ArgKind::Number,
            "Maximum number of icons to return from the collection",
        )
        .at_least(1),
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
            let params: GetCollectionParams = serde_json::from_value(Value::Object(args))?;
            Ok(api.get_collection(params).await?)
        }
        .boxed()
    }
}
