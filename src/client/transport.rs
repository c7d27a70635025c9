//! HTTP transport implementation

use std::fmt;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::client::Query;
use crate::error::{ApiFailure, Error, Result};
use crate::redact;
use crate::validate;

// ============================================================================
// Constants
// ============================================================================

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.littlegreenlight.com/api/v1/";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// Configuration
// ============================================================================

/// Connection settings for a [`Transport`].
///
/// Immutable after construction. The API key is masked in the `Debug`
/// form so configs can be logged safely.
#[derive(Clone)]
pub struct ClientConfig {
    /// Bearer credential for the `Authorization` header
    pub api_key: String,
    /// Service endpoint, normalized to end with a slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// `User-Agent` header value
    pub user_agent: String,
    /// Emit redacted request traces at debug level
    pub debug: bool,
}

impl ClientConfig {
    /// Create a config with production defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("lgl-client/{}", env!("CARGO_PKG_VERSION")),
            debug: false,
        }
    }

    /// Create a builder seeded with production defaults.
    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(api_key),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &redact::mask_credential(&self.api_key))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("debug", &self.debug)
            .finish()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Override the service endpoint.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Toggle redacted request tracing.
    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Finish building the config.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

// ============================================================================
// Transport
// ============================================================================

/// Synchronous JSON transport for the Little Green Light API.
///
/// Owns a persistent connection pool with the bearer credential
/// installed as a default header. Every outgoing parameter set and
/// payload is validated before it touches the wire, and every error
/// record carries only sanitized URLs and masked payloads.
pub struct Transport {
    client: Client,
    base_url: Url,
    headers: HeaderMap,
    debug: bool,
}

impl Transport {
    /// Build a transport from connection settings.
    ///
    /// Fails on an empty or non-ASCII credential and on an unparseable
    /// base URL. Network reachability is not checked here.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::config("API key must not be empty"));
        }

        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| Error::config(format!("invalid API key: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers.clone())
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            headers,
            debug: config.debug,
        })
    }

    /// GET a resource. Parameter names and values are validated first;
    /// the request is never sent when validation fails.
    pub fn get(&self, path: &str, query: &Query) -> Result<Value> {
        let query = validate::validate_params(query)?;
        let url = self.build_url(path)?;
        self.trace_request("GET", &url, Some(&query), None);
        let response = self.send(Method::GET, &url, Some(&query), None)?;
        classify_response(response, None)
    }

    /// POST a JSON payload. The payload is validated first; the request
    /// is never sent when validation fails.
    pub fn post(&self, path: &str, payload: &Value) -> Result<Value> {
        let payload = validate::validate_payload(payload)?;
        let url = self.build_url(path)?;
        self.trace_request("POST", &url, None, Some(&payload));
        let response = self.send(Method::POST, &url, None, Some(&payload))?;
        classify_response(response, Some(&payload))
    }

    /// PATCH a resource with a JSON payload. Validated like [`post`].
    ///
    /// [`post`]: Transport::post
    pub fn patch(&self, path: &str, payload: &Value) -> Result<Value> {
        let payload = validate::validate_payload(payload)?;
        let url = self.build_url(path)?;
        self.trace_request("PATCH", &url, None, Some(&payload));
        let response = self.send(Method::PATCH, &url, None, Some(&payload))?;
        classify_response(response, Some(&payload))
    }

    /// DELETE a resource. The response body is discarded on success.
    pub fn delete(&self, path: &str) -> Result<()> {
        let url = self.build_url(path)?;
        self.trace_request("DELETE", &url, None, None);
        let response = self.send(Method::DELETE, &url, None, None)?;
        if response.status().is_success() {
            return Ok(());
        }
        classify_response(response, None).map(|_| ())
    }

    /// Resolve a request path against the base URL.
    pub(crate) fn build_url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Consume the transport, dropping its connection pool.
    pub fn close(self) {}

    fn send(
        &self,
        method: Method,
        url: &Url,
        query: Option<&Query>,
        payload: Option<&Value>,
    ) -> Result<Response> {
        let mut request = self.client.request(method, url.clone());
        if let Some(query) = query {
            if !query.is_empty() {
                request = request.query(&query.pairs());
            }
        }
        if let Some(payload) = payload {
            request = request.json(payload);
        }
        request
            .send()
            .map_err(|e| transport_error(&e, url, payload))
    }

    /// Log the outgoing request with credentials and sensitive fields
    /// masked. No-op unless the debug flag is set.
    fn trace_request(&self, method: &str, url: &Url, query: Option<&Query>, payload: Option<&Value>) {
        if !self.debug {
            return;
        }
        debug!("Request: {method} {url}");
        let headers: Vec<String> = self
            .headers
            .iter()
            .map(|(name, value)| {
                let text = value.to_str().unwrap_or("<binary>");
                if redact::is_credential_header(name.as_str()) {
                    format!("{name}: {}", redact::mask_credential(text))
                } else {
                    format!("{name}: {text}")
                }
            })
            .collect();
        debug!("Headers: {}", headers.join(", "));
        if let Some(query) = query {
            if !query.is_empty() {
                debug!("Query params: {}", redact::mask_payload(&query.to_value()));
            }
        }
        if let Some(payload) = payload {
            debug!("Body: {}", redact::mask_payload(payload));
        }
    }
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url.as_str())
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Response classification
// ============================================================================

/// Turn an HTTP response into a result.
///
/// The body is parsed before the status is examined: a body that is not
/// JSON produces a generic API error no matter what the status code
/// says. A 2xx status returns the parsed body; anything else maps onto
/// the error taxonomy by status code, with the message extracted from
/// the error envelope when one is present.
fn classify_response(response: Response, payload: Option<&Value>) -> Result<Value> {
    let status = response.status();
    let url = response.url().to_string();
    let body: Value = match response.json() {
        Ok(body) => body,
        Err(e) => {
            warn!("Response from {url} was not valid JSON: {e}");
            return Err(Error::Api(ApiFailure::new(
                format!("Invalid JSON response: {e}"),
                status.as_u16(),
                &url,
                payload,
            )));
        }
    };
    if status.is_success() {
        return Ok(body);
    }
    let message = error_message(&body, status.as_u16());
    warn!("Request to {url} failed with status {status}: {message}");
    Err(Error::from_status(status.as_u16(), message, &url, payload))
}

/// Extract a human message from an error envelope: the `error` field
/// (joined with `description` when present), else `message`, else a
/// generic status line.
fn error_message(body: &Value, status: u16) -> String {
    if let Some(error) = body.get("error").and_then(Value::as_str) {
        return match body.get("description").and_then(Value::as_str) {
            Some(description) => format!("{error}: {description}"),
            None => error.to_string(),
        };
    }
    if let Some(message) = body.get("message").and_then(Value::as_str) {
        return message.to_string();
    }
    format!("HTTP {status}")
}

/// Wrap a connection-level failure (refused, timed out, bad framing)
/// as a generic API error so callers never see a raw transport error.
fn transport_error(err: &reqwest::Error, url: &Url, payload: Option<&Value>) -> Error {
    let status = err.status().map_or(0, |s| s.as_u16());
    warn!("Request to {url} failed: {err}");
    Error::Api(ApiFailure::new(
        format!("HTTP error: {err}"),
        status,
        url.as_str(),
        payload,
    ))
}
