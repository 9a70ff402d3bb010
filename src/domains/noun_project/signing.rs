//! Request signing for The Noun Project API.
//!
//! The API authenticates every call with two-legged OAuth 1.0a
//! (`HMAC-SHA1`, consumer key and secret, no access token). Signing is
//! exposed through the [`RequestSigner`] trait so the client does not
//! depend on the concrete scheme.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha1::Sha1;

use super::error::{ApiError, ApiResult};

/// RFC 3986 unreserved characters are the only ones left unescaped.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";

/// Percent-encode a value the way OAuth 1.0a requires.
pub fn oauth_encode(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// API key and secret used to sign upstream requests.
#[derive(Clone)]
pub struct Credentials {
    key: String,
    secret: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn secret(&self) -> &str {
        &self.secret
    }
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &"[REDACTED]")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// The parts of an outgoing request that take part in the signature.
#[derive(Debug, Clone, Copy)]
pub struct SigningRequest<'a> {
    /// HTTP verb, e.g. `GET`.
    pub method: &'a str,
    /// Absolute URL without query string.
    pub url: &'a str,
    /// Query parameters that will be sent with the request.
    pub query: &'a [(String, String)],
}

/// Extra material a signer wants attached to the request.
#[derive(Debug, Clone, Default)]
pub struct Authorization {
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
}

/// Produces the authentication material for one upstream request.
pub trait RequestSigner: Send + Sync {
    fn sign(
        &self,
        request: &SigningRequest<'_>,
        credentials: &Credentials,
    ) -> ApiResult<Authorization>;
}

/// Two-legged OAuth 1.0a signer sending its parameters in the
/// `Authorization` header.
#[derive(Debug, Clone, Copy, Default)]
pub struct OAuth1Signer;

impl OAuth1Signer {
    pub fn new() -> Self {
        Self
    }

    /// Sign with an explicit nonce and timestamp.
    pub fn sign_with(
        &self,
        request: &SigningRequest<'_>,
        credentials: &Credentials,
        nonce: &str,
        timestamp: i64,
    ) -> ApiResult<Authorization> {
        let timestamp = timestamp.to_string();
        let oauth_params = [
            ("oauth_consumer_key", credentials.key()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", SIGNATURE_METHOD),
            ("oauth_timestamp", timestamp.as_str()),
            ("oauth_version", OAUTH_VERSION),
        ];

        let base = signature_base_string(request, &oauth_params);
        let signing_key = format!("{}&", oauth_encode(credentials.secret()));

        let mut mac = Hmac::<Sha1>::new_from_slice(signing_key.as_bytes())
            .map_err(|e| ApiError::request(format!("invalid signing key: {e}")))?;
        mac.update(base.as_bytes());
        let signature = STANDARD.encode(mac.finalize().into_bytes());

        let mut header_params: Vec<String> = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, oauth_encode(v)))
            .collect();
        header_params.push(format!("oauth_signature=\"{}\"", oauth_encode(&signature)));
        header_params.sort();

        Ok(Authorization {
            headers: vec![(
                "Authorization".to_string(),
                format!("OAuth {}", header_params.join(", ")),
            )],
            query: Vec::new(),
        })
    }
}

impl RequestSigner for OAuth1Signer {
    fn sign(
        &self,
        request: &SigningRequest<'_>,
        credentials: &Credentials,
    ) -> ApiResult<Authorization> {
        let nonce = uuid::Uuid::new_v4().simple().to_string();
        let timestamp = chrono::Utc::now().timestamp();
        self.sign_with(request, credentials, &nonce, timestamp)
    }
}

/// Build `METHOD&url&params` with every component percent-encoded and the
/// parameters sorted by encoded name, then encoded value.
fn signature_base_string(request: &SigningRequest<'_>, oauth_params: &[(&str, &str)]) -> String {
    let mut pairs: Vec<(String, String)> = request
        .query
        .iter()
        .map(|(k, v)| (oauth_encode(k), oauth_encode(v)))
        .chain(
            oauth_params
                .iter()
                .map(|(k, v)| (oauth_encode(k), oauth_encode(v))),
        )
        .collect();
    pairs.sort();

    let normalized = pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        request.method.to_ascii_uppercase(),
        oauth_encode(request.url),
        oauth_encode(&normalized)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_query() -> Vec<(String, String)> {
        vec![
            ("query".to_string(), "dog".to_string()),
            ("limit".to_string(), "5".to_string()),
        ]
    }

    #[test]
    fn test_oauth_encode_reserved_characters() {
        assert_eq!(oauth_encode("solid,line"), "solid%2Cline");
        assert_eq!(oauth_encode("a b*"), "a%20b%2A");
        assert_eq!(oauth_encode("A-z_0.9~"), "A-z_0.9~");
    }

    #[test]
    fn test_signature_base_string_sorts_parameters() {
        let query = search_query();
        let request = SigningRequest {
            method: "get",
            url: "https://api.thenounproject.com/v2/icon",
            query: &query,
        };
        let base = signature_base_string(
            &request,
            &[
                ("oauth_consumer_key", "test-key"),
                ("oauth_nonce", "abc123"),
                ("oauth_signature_method", "HMAC-SHA1"),
                ("oauth_timestamp", "1700000000"),
                ("oauth_version", "1.0"),
            ],
        );
        assert_eq!(
            base,
            "GET&https%3A%2F%2Fapi.thenounproject.com%2Fv2%2Ficon&limit%3D5%26oauth_consumer_key%3Dtest-key%26oauth_nonce%3Dabc123%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1700000000%26oauth_version%3D1.0%26query%3Ddog"
        );
    }

    #[test]
    fn test_sign_with_known_vector() {
        let query = search_query();
        let request = SigningRequest {
            method: "GET",
            url: "https://api.thenounproject.com/v2/icon",
            query: &query,
        };
        let credentials = Credentials::new("test-key", "test-secret");
        let auth = OAuth1Signer::new()
            .sign_with(&request, &credentials, "abc123", 1_700_000_000)
            .unwrap();

        assert!(auth.query.is_empty());
        assert_eq!(auth.headers.len(), 1);
        let (name, value) = &auth.headers[0];
        assert_eq!(name, "Authorization");
        assert!(value.starts_with("OAuth "));
        assert!(value.contains("oauth_consumer_key=\"test-key\""));
        assert!(value.contains("oauth_signature=\"tOJ5%2FQyuqcOngU%2B%2FRNiLMNdjIlE%3D\""));
        assert!(!value.contains("test-secret"));
    }

    #[test]
    fn test_sign_uses_fresh_nonce() {
        let request = SigningRequest {
            method: "GET",
            url: "https://api.thenounproject.com/v2/client/usage",
            query: &[],
        };
        let credentials = Credentials::new("k", "s");
        let signer = OAuth1Signer::new();
        let first = signer.sign(&request, &credentials).unwrap();
        let second = signer.sign(&request, &credentials).unwrap();
        assert_ne!(first.headers[0].1, second.headers[0].1);
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = Credentials::new("visible_key", "super_secret");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret"));
        assert!(!debug_str.contains("visible_key"));
    }
}
