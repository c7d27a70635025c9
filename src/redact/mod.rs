//! Masking of sensitive data in diagnostics
//!
//! Every diagnostic surface (debug traces, error records) passes through
//! these rules before anything is formatted. Field names are matched
//! against a fixed vocabulary of sensitive substrings; matching values are
//! partially masked so an operator can still recognize them without the
//! secret being exposed. URLs lose their entire query string.

mod mask;

pub use mask::{
    is_credential_header, is_sensitive_name, mask_credential, mask_field, mask_payload,
    mask_value, sanitize_url,
};

#[cfg(test)]
mod tests;
