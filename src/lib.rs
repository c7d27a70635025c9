// Allow clippy pedantic lints that aren't worth fighting in this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::match_same_arms)]

//! # Little Green Light API Client
//!
//! Typed client for the Little Green Light CRM REST API.
//!
//! ## Features
//!
//! - **Typed resources**: appeals, campaigns, categories, constituents,
//!   events, funds, gifts and payment types
//! - **Automatic pagination**: offset walks with short-page detection and
//!   bare-array handling
//! - **Input validation**: parameter names and payloads vetted before any
//!   request leaves the process
//! - **Credential redaction**: API keys and sensitive payload fields never
//!   reach logs or error messages
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lgl_client::Lgl;
//!
//! fn main() -> lgl_client::Result<()> {
//!     let lgl = Lgl::new(std::env::var("LGL_API_KEY").expect("key"))?;
//!
//!     // Find constituents and their giving history
//!     let matches = lgl.constituents().search_by_name("brady")?;
//!     for constituent in &matches {
//!         let gifts = lgl.gifts().fetch_all(constituent.id)?;
//!         println!("{}: {} gifts", constituent.last_name, gifts.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Lgl client                          │
//! │   appeals() campaigns() categories() constituents() ...     │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌────────────┬────────────────┴───┬──────────────┬────────────┐
//! │  Validate  │     Transport      │   Paginate   │   Model    │
//! ├────────────┼────────────────────┼──────────────┼────────────┤
//! │ Names      │ Bearer auth        │ Offset walk  │ Records    │
//! │ Payloads   │ Status taxonomy    │ Short pages  │ Dates      │
//! │ Depth/size │ Redacted tracing   │ Bare arrays  │ Money      │
//! └────────────┴────────────────────┴──────────────┴────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error taxonomy for the client
pub mod error;

/// Input validation and sanitization
pub mod validate;

/// Credential and payload redaction
pub mod redact;

/// HTTP transport, configuration and query building
pub mod client;

/// Offset pagination
pub mod paginate;

/// API data records
pub mod model;

/// Resource clients
pub mod api;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{ApiFailure, Error, Result};
pub use model::*;

// Re-export commonly used types
pub use api::{
    AppealsApi, CampaignsApi, CategoriesApi, ConstituentSearch, ConstituentsApi, EventsApi,
    FundsApi, GiftSearch, GiftsApi, Lgl, PaymentTypesApi,
};
pub use client::{
    ClientConfig, ClientConfigBuilder, Query, Transport, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
};
pub use paginate::{Page, PageBody, Pages, DEFAULT_PAGE_LIMIT};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
