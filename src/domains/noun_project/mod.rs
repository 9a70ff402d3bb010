//! Noun Project domain module.
//!
//! Everything needed to talk to The Noun Project API v2:
//!
//! - `client.rs` - The [`IconApi`] trait and its HTTP implementation
//! - `params.rs` - Typed parameter objects, one per operation
//! - `signing.rs` - OAuth 1.0a request signing
//! - `error.rs` - Upstream error types

mod client;
mod error;
pub mod params;
pub mod signing;

pub use client::{DEFAULT_BASE_URL, IconApi, NounProjectClient};
pub use error::{ApiError, ApiResult};
pub use signing::{Credentials, OAuth1Signer, RequestSigner};
