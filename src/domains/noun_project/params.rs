//! Typed parameter objects for each upstream call.
//!
//! Every struct deserializes from the tool's argument object and serializes
//! into the query string sent upstream. Identifiers that belong in the URL
//! path are skipped during serialization.

use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};

/// Line weight filter: a single weight or a `"min-max"` range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineWeight {
    Weight(u32),
    Range(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchIconsParams {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_weight: Option<LineWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_to_public_domain: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_svg: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetIconParams {
    #[serde(skip_serializing)]
    pub icon_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_size: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetCollectionParams {
    #[serde(skip_serializing)]
    pub collection_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_svg: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCollectionsParams {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blacklist: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutocompleteParams {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DownloadIconParams {
    #[serde(skip_serializing)]
    pub icon_id: u64,
    /// Hex color without `#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filetype: Option<String>,
    /// PNG only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// Flatten a parameter object into ordered query pairs, dropping absent fields.
pub fn to_query_pairs<T: Serialize>(params: &T) -> ApiResult<Vec<(String, String)>> {
    let encoded = serde_urlencoded::to_string(params)?;
    serde_urlencoded::from_str(&encoded).map_err(|e| ApiError::request(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_icons_minimal_query() {
        let params: SearchIconsParams = serde_json::from_value(json!({ "query": "dog" })).unwrap();
        let pairs = to_query_pairs(&params).unwrap();
        assert_eq!(pairs, vec![("query".to_string(), "dog".to_string())]);
    }

    #[test]
    fn test_line_weight_accepts_number_or_range() {
        let single: SearchIconsParams =
            serde_json::from_value(json!({ "query": "x", "line_weight": 18 })).unwrap();
        assert_eq!(single.line_weight, Some(LineWeight::Weight(18)));

        let range: SearchIconsParams =
            serde_json::from_value(json!({ "query": "x", "line_weight": "18-20" })).unwrap();
        assert_eq!(range.line_weight, Some(LineWeight::Range("18-20".to_string())));

        let pairs = to_query_pairs(&range).unwrap();
        assert!(pairs.contains(&("line_weight".to_string(), "18-20".to_string())));
    }

    #[test]
    fn test_path_ids_stay_out_of_query() {
        let params: DownloadIconParams =
            serde_json::from_value(json!({ "icon_id": 123, "filetype": "png", "size": 200 }))
                .unwrap();
        assert_eq!(params.icon_id, 123);
        let pairs = to_query_pairs(&params).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("filetype".to_string(), "png".to_string()),
                ("size".to_string(), "200".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_query_fails_to_deserialize() {
        let result: Result<AutocompleteParams, _> = serde_json::from_value(json!({ "limit": 5 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_values_with_reserved_characters_survive() {
        let params: SearchIconsParams =
            serde_json::from_value(json!({ "query": "hot dog & bun", "styles": "solid,line" }))
                .unwrap();
        let pairs = to_query_pairs(&params).unwrap();
        assert_eq!(pairs[0], ("query".to_string(), "hot dog & bun".to_string()));
        assert_eq!(pairs[1], ("styles".to_string(), "solid,line".to_string()));
    }
}
