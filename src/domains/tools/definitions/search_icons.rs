//! Icon search tool.
//!
//! The primary way to find icons: keyword search with optional style,
//! line weight and public-domain filters, paginated with opaque tokens.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;

use super::common::{FLAG, THUMBNAIL_SIZES};
use crate::domains::noun_project::IconApi;
use crate::domains::noun_project::params::SearchIconsParams;
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::schema::{
    ArgKind, ArgSpec, Format, JsonObject, Literal, OperationDescriptor,
};

const STYLES: &[Literal] = &[
    Literal::Str("solid"),
    Literal::Str("line"),
    Literal::Str("solid,line"),
];

/// Icon search tool.
#[derive(Debug, Clone)]
pub struct SearchIconsTool;

impl SearchIconsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_icons";

    pub const TITLE: &'static str = "Search Icons";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for icons on The Noun Project by keyword. \
         Returns a paginated list of icons with metadata, thumbnails, and attribution info. \
         Supports filtering by visual style (solid/line), line weight, and public domain status. \
         Use this as the primary way to find icons for UI design, presentations, or documentation.";

    pub const ARGS: &'static [ArgSpec] = &[
        ArgSpec::new(
            "query",
            ArgKind::String,
            "Search term for icons (e.g., \"dog\", \"house\", \"bicycle\")",
        )
        .required(),
        ArgSpec::new(
            "styles",
            ArgKind::String,
            "Filter by icon style: solid (filled), line (outline), or both",
        )
        .one_of(STYLES),
        ArgSpec::new(
            "line_weight",
            ArgKind::NumberOrString,
            "For line icons, filter by line weight (1-60) or range (e.g., \"18-20\")",
        )
        .between(1, 60)
        .format(Format::WeightRange),
        ArgSpec::new(
            "limit_to_public_domain",
            ArgKind::Number,
            "Set to 1 to limit results to public domain icons only (free to use without attribution)",
        )
        .one_of(FLAG),
        ArgSpec::new(
            "thumbnail_size",
            ArgKind::Number,
            "Thumbnail size to return (42, 84, or 200 pixels)",
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
            "Maximum number of results to return (default varies by API)",
        )
        .at_least(1),
        ArgSpec::new(
            "next_page",
            ArgKind::String,
            "Pagination token for the next page of results",
        ),
        ArgSpec::new(
            "prev_page",
            ArgKind::String,
            "Pagination token for the previous page of results",
        ),
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
            let params: SearchIconsParams = serde_json::from_value(Value::Object(args))?;
            Ok(api.search_icons(params).await?)
        }
        .boxed()
    }
}
