//! HTTP client module
//!
//! Provides the synchronous transport underneath every resource API.
//!
//! # Features
//!
//! - **Bearer authentication**: Credential installed as a default header
//! - **Input validation**: Parameter names, values and payloads checked before any request
//! - **Error classification**: Status codes mapped onto the error taxonomy
//! - **Redacted tracing**: Optional debug logging with credentials and sensitive fields masked

mod query;
mod transport;

pub use query::Query;
pub use transport::{
    ClientConfig, ClientConfigBuilder, Transport, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
};

#[cfg(test)]
mod tests;
