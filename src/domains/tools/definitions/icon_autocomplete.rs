//! Search term autocomplete tool.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;

use crate::domains::noun_project::IconApi;
use crate::domains::noun_project::params::AutocompleteParams;
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::schema::{ArgKind, ArgSpec, JsonObject, OperationDescriptor};

#[derive(Debug, Clone)]
pub struct IconAutocompleteTool;

impl IconAutocompleteTool {
    pub const NAME: &'static str = "icon_autocomplete";

    pub const TITLE: &'static str = "Icon Autocomplete";

    pub const DESCRIPTION: &'static str = "Get autocomplete suggestions for icon search terms. \
         Returns a list of popular search terms matching the input. \
         Use this to help discover related keywords before performing a full search.";

    pub const ARGS: &'static [ArgSpec] = &[
        ArgSpec::new(
            "query",
            ArgKind::String,
            "Partial search term to get suggestions for",
        )
        .required(),
        ArgSpec::new("limit", ArgKind::Number, "Maximum number of suggestions to return")
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
            let params: AutocompleteParams = serde_json::from_value(Value::Object(args))?;
            Ok(api.autocomplete(params).await?)
        }
        .boxed()
    }
}
