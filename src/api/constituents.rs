//! Constituents resource

use serde_json::Value;

use crate::client::{Query, Transport};
use crate::error::Result;
use crate::model::Constituent;
use crate::paginate::{self, Page};

const RESOURCE: &str = "constituents";
const SEARCH: &str = "constituents/search";

// ============================================================================
// Search filters
// ============================================================================

/// Filters for constituent search.
///
/// Terms use the server's `field=value` syntax (`"name=brady"`,
/// `"eaddr=kelly@example.com"`) and repeat the `q` parameter once per
/// term; multiple terms narrow the result.
#[derive(Debug, Clone, Default)]
pub struct ConstituentSearch {
    terms: Vec<String>,
    expand: Option<String>,
    sort: Option<String>,
}

impl ConstituentSearch {
    /// Start an empty search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one `field=value` term.
    #[must_use]
    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.terms.push(term.into());
        self
    }

    /// Inline a nested collection, e.g. `"class_affiliations"`.
    #[must_use]
    pub fn expand(mut self, expand: impl Into<String>) -> Self {
        self.expand = Some(expand.into());
        self
    }

    /// Sort key, e.g. `"name"` (append `!` to reverse).
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    fn to_query(&self) -> Query {
        let mut query = Query::new();
        if !self.terms.is_empty() {
            query.insert("q", self.terms.clone());
        }
        query
            .maybe_param("expand", self.expand.clone())
            .maybe_param("sort", self.sort.clone())
    }
}

// ============================================================================
// Resource client
// ============================================================================

/// Client for the `constituents` resource.
///
/// Constituents are the people and organizations a gift ledger hangs
/// off of. Search goes through the dedicated `constituents/search`
/// endpoint; plain listing pages through the collection route.
#[derive(Debug)]
pub struct ConstituentsApi<'a> {
    transport: &'a Transport,
}

impl<'a> ConstituentsApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List one page of constituents.
    pub fn list(&self, limit: u32, offset: u32) -> Result<Vec<Constituent>> {
        super::list_decoded(self.transport, RESOURCE, limit, offset)
    }

    /// Fetch every constituent, walking pages automatically.
    pub fn fetch_all(&self) -> Result<Vec<Constituent>> {
        super::fetch_all_decoded(self.transport, RESOURCE)
    }

    /// Retrieve one constituent by id.
    pub fn retrieve(&self, constituent_id: i64) -> Result<Constituent> {
        let body = self
            .transport
            .get(&format!("{RESOURCE}/{constituent_id}"), &Query::new())?;
        super::decode(body)
    }

    /// Create a constituent from a JSON payload.
    pub fn create(&self, payload: &Value) -> Result<Constituent> {
        let body = self.transport.post(RESOURCE, payload)?;
        super::decode(body)
    }

    /// Update a constituent.
    pub fn update(&self, constituent_id: i64, payload: &Value) -> Result<Constituent> {
        let body = self
            .transport
            .patch(&format!("{RESOURCE}/{constituent_id}"), payload)?;
        super::decode(body)
    }

    /// Delete a constituent.
    pub fn delete(&self, constituent_id: i64) -> Result<()> {
        self.transport
            .delete(&format!("{RESOURCE}/{constituent_id}"))
    }

    /// Fetch one page of search results as the raw envelope.
    pub fn search(&self, search: &ConstituentSearch, limit: u32, offset: u32) -> Result<Page> {
        let query = search
            .to_query()
            .param("limit", limit)
            .param("offset", offset);
        super::search_page(self.transport, SEARCH, query)
    }

    /// Fetch every constituent matching a search, walking pages
    /// automatically.
    pub fn search_all(&self, search: &ConstituentSearch) -> Result<Vec<Constituent>> {
        paginate::fetch_all(|limit, offset| {
            let query = search
                .to_query()
                .param("limit", limit)
                .param("offset", offset);
            self.transport.get(SEARCH, &query)
        })?
        .into_iter()
        .map(super::decode)
        .collect()
    }

    /// Find every constituent matching a name term.
    pub fn search_by_name(&self, name: &str) -> Result<Vec<Constituent>> {
        self.search_all(&ConstituentSearch::new().term(format!("name={name}")))
    }

    /// Find every constituent holding an email address.
    pub fn search_by_email(&self, email: &str) -> Result<Vec<Constituent>> {
        self.search_all(&ConstituentSearch::new().term(format!("eaddr={email}")))
    }
}
