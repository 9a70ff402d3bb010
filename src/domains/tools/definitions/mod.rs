//! Tool definitions module.
//!
//! One file per operation. Each definition carries its descriptor (name,
//! title, description, argument schema) and the handler that turns an
//! argument object into an upstream call.

mod common;
pub mod check_usage;
pub mod get_collection;
pub mod get_download_url;
pub mod get_icon;
pub mod icon_autocomplete;
pub mod search_collections;
pub mod search_icons;

pub use check_usage::CheckUsageTool;
pub use get_collection::GetCollectionTool;
pub use get_download_url::GetDownloadUrlTool;
pub use get_icon::GetIconTool;
pub use icon_autocomplete::IconAutocompleteTool;
pub use search_collections::SearchCollectionsTool;
pub use search_icons::SearchIconsTool;
