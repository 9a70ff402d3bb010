//! Upstream API error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for upstream API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while talking to The Noun Project API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The upstream service answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never produced a response (DNS, refused connection, timeout).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body could not be interpreted.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The request parameters could not be encoded or signed.
    #[error("Invalid request: {0}")]
    Request(String),
}

impl ApiError {
    /// Build an HTTP error from a status code and the raw response body.
    ///
    /// JSON string bodies are unwrapped, other JSON bodies are re-serialized
    /// compactly, and anything else is kept verbatim. An empty body falls back
    /// to the canonical reason phrase of the status.
    pub fn from_response(status: StatusCode, raw_body: &str) -> Self {
        let trimmed = raw_body.trim();
        let body = if trimmed.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Unknown status")
                .to_string()
        } else {
            match serde_json::from_str::<serde_json::Value>(trimmed) {
                Ok(serde_json::Value::String(text)) => text,
                Ok(value) => value.to_string(),
                Err(_) => trimmed.to_string(),
            }
        };

        Self::Http {
            status: status.as_u16(),
            body,
        }
    }

    /// Create a malformed-response error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Create a request construction error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }
}

impl From<serde_urlencoded::ser::Error> for ApiError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Self::request(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_object_body_is_compacted() {
        let err = ApiError::from_response(StatusCode::NOT_FOUND, "{ \"error\": \"not found\" }");
        assert_eq!(err.to_string(), r#"HTTP 404: {"error":"not found"}"#);
    }

    #[test]
    fn test_json_string_body_is_unwrapped() {
        let err = ApiError::from_response(StatusCode::FORBIDDEN, r#""quota exceeded""#);
        assert_eq!(err.to_string(), "HTTP 403: quota exceeded");
    }

    #[test]
    fn test_plain_text_body_is_verbatim() {
        let err = ApiError::from_response(StatusCode::BAD_GATEWAY, "upstream down\n");
        assert_eq!(err.to_string(), "HTTP 502: upstream down");
    }

    #[test]
    fn test_empty_body_uses_reason_phrase() {
        let err = ApiError::from_response(StatusCode::UNAUTHORIZED, "");
        assert_eq!(err.to_string(), "HTTP 401: Unauthorized");
    }
}
