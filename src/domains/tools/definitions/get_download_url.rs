//! Download URL tool.
//!
//! Resolves a colored/sized rendition of an icon and returns only the file
//! URL. Free API keys are limited to public domain icons.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;

use crate::domains::noun_project::IconApi;
use crate::domains::noun_project::params::DownloadIconParams;
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::schema::{
    ArgKind, ArgSpec, Format, JsonObject, Literal, OperationDescriptor,
};

const FILETYPES: &[Literal] = &[Literal::Str("svg"), Literal::Str("png")];

#[derive(Debug, Clone)]
pub struct GetDownloadUrlTool;

impl GetDownloadUrlTool {
    pub const NAME: &'static str = "get_download_url";

    pub const TITLE: &'static str = "Get Download URL";

    pub const DESCRIPTION: &'static str = "Get a download URL for an icon with custom color and size options. \
         Supports SVG and PNG formats. For PNG, you can specify pixel size (20-1200). \
         For color, use hex values without the # prefix. \
         Note: Free API access is limited to public domain icons only.";

    pub const ARGS: &'static [ArgSpec] = &[
        ArgSpec::new("icon_id", ArgKind::Number, "The unique ID of the icon to download")
            .required(),
        ArgSpec::new(
            "color",
            ArgKind::String,
            "Hexadecimal color value without # (e.g., \"FF0000\" for red)",
        )
        .format(Format::HexColor),
        ArgSpec::new(
            "filetype",
            ArgKind::String,
            "File format: svg or png (SVG does not accept size parameter)",
        )
        .one_of(FILETYPES),
        ArgSpec::new(
            "size",
            ArgKind::Number,
            "For PNG only, size in pixels (minimum 20, maximum 1200)",
        )
        .between(20, 1200),
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
            let params: DownloadIconParams = serde_json::from_value(Value::Object(args))?;
            Ok(api.get_download_url(params).await?)
        }
        .boxed()
    }
}
