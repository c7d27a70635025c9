//! Error types for the LGL client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Errors split into two families: local input errors raised before any
//! network I/O (invalid parameter names, oversized values, over-deep
//! payloads) and remote errors classified from HTTP responses. Remote
//! errors carry an [`ApiFailure`] whose URL and payload are sanitized at
//! construction so credentials never leak through error output.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::redact;

/// Details of a failed API call.
///
/// The URL is stored with its query string stripped and the payload with
/// sensitive fields masked. Sanitization happens in [`ApiFailure::new`];
/// the stored values are never the raw ones.
#[derive(Debug, Clone)]
pub struct ApiFailure {
    /// Human-readable message extracted from the response body.
    pub message: String,
    /// HTTP status code, or 0 when the request never completed.
    pub status: u16,
    /// Request URL with query parameters removed.
    pub url: String,
    /// Masked copy of the request payload, if one was sent.
    pub payload: Option<Value>,
}

impl ApiFailure {
    /// Build a failure record, sanitizing the URL and payload.
    pub fn new(
        message: impl Into<String>,
        status: u16,
        url: impl AsRef<str>,
        payload: Option<&Value>,
    ) -> Self {
        Self {
            message: message.into(),
            status,
            url: redact::sanitize_url(url.as_ref()),
            payload: payload.map(redact::mask_payload),
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HTTP {} at {})", self.message, self.status, self.url)
    }
}

/// The main error type for the LGL client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Validation Errors (raised before any network I/O)
    // ============================================================================
    #[error("Invalid parameter name: {name}")]
    InvalidName { name: String },

    #[error("String parameter too long: {length} characters")]
    StringTooLong { length: usize },

    #[error("List parameter too long: {length} items")]
    ListTooLong { length: usize },

    #[error("Too many keys in object: {count}")]
    TooManyKeys { count: usize },

    #[error("Integer value too large: {value}")]
    IntegerTooLarge { value: i128 },

    #[error("Payload too large: {length} characters")]
    PayloadTooLarge { length: usize },

    #[error("Payload nesting too deep: {depth} levels")]
    NestingTooDeep { depth: usize },

    #[error("Payload must be a JSON object")]
    PayloadNotObject,

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // API Errors (classified from HTTP responses)
    // ============================================================================
    /// 401: missing or invalid API key.
    #[error("{0}")]
    Unauthorized(ApiFailure),

    /// 404: resource does not exist.
    #[error("{0}")]
    NotFound(ApiFailure),

    /// 422: the server rejected the request semantics.
    #[error("{0}")]
    Validation(ApiFailure),

    /// Any other failed call: unexpected status, unparseable body, or a
    /// transport-level failure (status 0).
    #[error("{0}")]
    Api(ApiFailure),

    // ============================================================================
    // Record Errors
    // ============================================================================
    #[error("Failed to decode record: {message}")]
    Decode { message: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid parameter name error
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    /// Create a record decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Classify a failed API call by HTTP status code.
    pub fn from_status(
        status: u16,
        message: impl Into<String>,
        url: impl AsRef<str>,
        payload: Option<&Value>,
    ) -> Self {
        let failure = ApiFailure::new(message, status, url, payload);
        match status {
            401 => Self::Unauthorized(failure),
            404 => Self::NotFound(failure),
            422 => Self::Validation(failure),
            _ => Self::Api(failure),
        }
    }

    /// Check if this error was raised by local input validation, before
    /// any request left the process.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidName { .. }
                | Error::StringTooLong { .. }
                | Error::ListTooLong { .. }
                | Error::TooManyKeys { .. }
                | Error::IntegerTooLarge { .. }
                | Error::PayloadTooLarge { .. }
                | Error::NestingTooDeep { .. }
                | Error::PayloadNotObject
        )
    }

    /// The failure record for API errors, if this is one.
    pub fn api_failure(&self) -> Option<&ApiFailure> {
        match self {
            Error::Unauthorized(f) | Error::NotFound(f) | Error::Validation(f) | Error::Api(f) => {
                Some(f)
            }
            _ => None,
        }
    }

    /// The HTTP status code for API errors (0 when the request never
    /// completed), `None` for local errors.
    pub fn status(&self) -> Option<u16> {
        self.api_failure().map(|f| f.status)
    }
}

/// Result type alias for the LGL client
pub type Result<T> = std::result::Result<T, Error>;
