//! Resource APIs module
//!
//! One thin client per API resource, all sharing a single [`Transport`].
//!
//! # Features
//!
//! - **CRUD per resource**: list, fetch-all, retrieve, create, update, delete
//! - **Search endpoints**: constituent and gift search with typed filter builders
//! - **Automatic pagination**: `fetch_all` and `search_all` walk every page
//! - **Typed results**: responses decode into the records in [`crate::model`]

mod appeals;
mod campaigns;
mod categories;
mod constituents;
mod events;
mod funds;
mod gifts;
mod payment_types;

pub use appeals::AppealsApi;
pub use campaigns::CampaignsApi;
pub use categories::CategoriesApi;
pub use constituents::{ConstituentSearch, ConstituentsApi};
pub use events::EventsApi;
pub use funds::FundsApi;
pub use gifts::{GiftSearch, GiftsApi};
pub use payment_types::PaymentTypesApi;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::{ClientConfig, Query, Transport};
use crate::error::{Error, Result};
use crate::paginate::{self, Page, PageBody};


// ============================================================================
// Aggregate client
// ============================================================================

/// Aggregate client for the Little Green Light API.
///
/// Owns the transport; each accessor hands out a lightweight resource
/// client borrowing it, so one `Lgl` serves any number of sequential
/// calls across resources.
///
/// ```no_run
/// use lgl_client::Lgl;
///
/// # fn main() -> lgl_client::Result<()> {
/// let lgl = Lgl::new("api-key-from-your-account")?;
/// let funds = lgl.funds().fetch_all()?;
/// println!("{} funds", funds.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Lgl {
    transport: Transport,
}

impl Lgl {
    /// Build a client with production defaults.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(&ClientConfig::new(api_key))
    }

    /// Build a client from explicit connection settings.
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Appeals resource.
    pub fn appeals(&self) -> AppealsApi<'_> {
        AppealsApi::new(&self.transport)
    }

    /// Campaigns resource.
    pub fn campaigns(&self) -> CampaignsApi<'_> {
        CampaignsApi::new(&self.transport)
    }

    /// Categories resource.
    pub fn categories(&self) -> CategoriesApi<'_> {
        CategoriesApi::new(&self.transport)
    }

    /// Constituents resource.
    pub fn constituents(&self) -> ConstituentsApi<'_> {
        ConstituentsApi::new(&self.transport)
    }

    /// Events resource.
    pub fn events(&self) -> EventsApi<'_> {
        EventsApi::new(&self.transport)
    }

    /// Funds resource.
    pub fn funds(&self) -> FundsApi<'_> {
        FundsApi::new(&self.transport)
    }

    /// Gifts resource.
    pub fn gifts(&self) -> GiftsApi<'_> {
        GiftsApi::new(&self.transport)
    }

    /// Payment types resource.
    pub fn payment_types(&self) -> PaymentTypesApi<'_> {
        PaymentTypesApi::new(&self.transport)
    }

    /// The underlying transport, for raw requests.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Consume the client and release its connection.
    pub fn close(self) {
        self.transport.close();
    }
}

// ============================================================================
// Shared plumbing
// ============================================================================

/// Decode a response body into a typed record.
fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| Error::decode(e.to_string()))
}

/// Fetch one page of a listing and return its items, whatever shape
/// the endpoint used.
fn get_items(transport: &Transport, path: &str, query: &Query) -> Result<Vec<Value>> {
    let body = transport.get(path, query)?;
    Ok(match PageBody::classify(body) {
        PageBody::Envelope(page) => page.items,
        PageBody::Direct(items) => items,
        PageBody::Other(_) => Vec::new(),
    })
}

/// Decode every item of a listing page.
fn list_decoded<T: DeserializeOwned>(
    transport: &Transport,
    path: &str,
    limit: u32,
    offset: u32,
) -> Result<Vec<T>> {
    let query = Query::new().param("limit", limit).param("offset", offset);
    get_items(transport, path, &query)?
        .into_iter()
        .map(decode)
        .collect()
}

/// Walk every page of a listing and decode every item.
fn fetch_all_decoded<T: DeserializeOwned>(transport: &Transport, path: &str) -> Result<Vec<T>> {
    paginate::fetch_all(|limit, offset| {
        let query = Query::new().param("limit", limit).param("offset", offset);
        transport.get(path, &query)
    })?
    .into_iter()
    .map(decode)
    .collect()
}

/// Issue a search request and return the page envelope.
fn search_page(transport: &Transport, path: &str, query: Query) -> Result<Page> {
    let body = transport.get(path, &query)?;
    decode(body)
}
