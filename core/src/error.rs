//! Error types for the Studing client core.
//!
//! # Design
//! The network taxonomy is deliberately flat: a payload that cannot be
//! flattened before dispatch is `UrlEncoding`, everything else (transport
//! failure, non-2xx status, undecodable body, missing `data`) is `Unknown`.
//! The carried string is for logs only; callers branch on the variant.

use thiserror::Error;

use crate::signup::DraftField;

/// Errors returned by every repository and dispatcher call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The request payload could not be converted to key/value form.
    #[error("payload could not be encoded: {0}")]
    UrlEncoding(String),

    /// Any failure after the request left the builder.
    #[error("request failed: {0}")]
    Unknown(String),
}

/// Raised by a `Transport` when no HTTP response could be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

impl From<TransportError> for NetworkError {
    fn from(err: TransportError) -> Self {
        NetworkError::Unknown(err.to_string())
    }
}

/// Sign-in failures.
///
/// Only [`StubSignInRepository`](crate::stub::StubSignInRepository) reports
/// `InvalidCredentials`. The live repository keeps the flat taxonomy: a
/// rejected sign-in (401 or any other non-2xx) arrives as
/// `Network(NetworkError::Unknown)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid login id or password")]
    InvalidCredentials,

    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// Token store failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenStoreError {
    #[error("token slot `{0}` could not be written")]
    WriteFailed(&'static str),

    #[error("token slot `{slot}` holds an unreadable value: {reason}")]
    Corrupt { slot: &'static str, reason: String },

    #[error("value for slot `{slot}` could not be serialized: {reason}")]
    Serialization { slot: &'static str, reason: String },
}

/// Signup draft validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("signup draft is missing `{0}`")]
    MissingField(DraftField),
}

/// Configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("base url `{0}` must start with http:// or https://")]
    InvalidBaseUrl(String),
}
