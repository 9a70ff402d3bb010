//! Icon detail tool.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;

use super::common::THUMBNAIL_SIZES;
use crate::domains::noun_project::IconApi;
use crate::domains::noun_project::params::GetIconParams;
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::schema::{ArgKind, ArgSpec, JsonObject, OperationDescriptor};

/// Fetches the full metadata of one icon.
#[derive(Debug, Clone)]
pub struct GetIconTool;

impl GetIconTool {
    pub const NAME: &'static str = "get_icon";

    pub const TITLE: &'static str = "Get Icon Details";

    pub const DESCRIPTION: &'static str = "Get detailed information about a specific icon by its numeric ID. \
         Returns full metadata including creator info, tags, license, and download URLs. \
         Use this after search_icons to get complete details about a specific result.";

    pub const ARGS: &'static [ArgSpec] = &[
        ArgSpec::new("icon_id", ArgKind::Number, "The unique numeric ID of the icon").required(),
        ArgSpec::new(
            "thumbnail_size",
            ArgKind::Number,
            "Thumbnail size to return (42, 84, or 200 pixels)",
        )
        .one_of(THUMBNAIL_SIZES),
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
            let params: GetIconParams = serde_json::from_value(Value::Object(args))?;
            Ok(api.get_icon(params).await?)
        }
        .boxed()
    }
}
