//! Input validation for request parameters and payloads
//!
//! Every outgoing request passes through here before any network I/O:
//! query parameters for GET, the JSON body for POST and PATCH. Hard
//! checks (name pattern, length and depth caps, integer range) reject
//! the request locally with an input error and nothing is sent.
//! Suspicious-looking string values are logged for monitoring but never
//! rejected; that asymmetry is intentional and load-bearing, since
//! legitimate data can resemble an attack string.

mod params;
mod payload;

pub use params::{is_safe_name, sanitize_value, validate_params};
pub use payload::validate_payload;

/// Upper bound on parameter and key name length.
pub const MAX_NAME_LEN: usize = 100;
/// Upper bound on a single string value, in characters.
pub const MAX_STRING_CHARS: usize = 1000;
/// Upper bound on list length and on keys per object level.
pub const MAX_COLLECTION_LEN: usize = 100;
/// Integers beyond this absolute value are rejected.
pub const MAX_INTEGER: u64 = 1 << 31;
/// Maximum nesting depth for request bodies.
pub const MAX_DEPTH: usize = 5;
/// Serialized size cap for a whole request body, in characters.
pub const MAX_PAYLOAD_CHARS: usize = 10_000;
