//! Gifts resource

use chrono::NaiveDate;
use serde_json::Value;

use crate::client::{Query, Transport};
use crate::error::Result;
use crate::model::{format_date, Gift};
use crate::paginate::{self, Page};

const RESOURCE: &str = "gifts";
const SEARCH: &str = "gifts/search";

// ============================================================================
// Search filters
// ============================================================================

/// Filters for gift search.
///
/// Every filter is optional and unset filters stay off the wire. Date
/// bounds serialize as `YYYY-MM-DD`.
#[derive(Debug, Clone, Default)]
pub struct GiftSearch {
    constituent_id: Option<i64>,
    gift_type_id: Option<i64>,
    payment_type_id: Option<i64>,
    campaign_id: Option<i64>,
    fund_id: Option<i64>,
    appeal_id: Option<i64>,
    event_id: Option<i64>,
    amount_from: Option<f64>,
    amount_to: Option<f64>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    acknowledged: Option<bool>,
    external_gift_id: Option<String>,
    check_number: Option<String>,
    note: Option<String>,
    sort: Option<String>,
}

impl GiftSearch {
    /// Start an empty search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one constituent.
    #[must_use]
    pub fn constituent_id(mut self, id: i64) -> Self {
        self.constituent_id = Some(id);
        self
    }

    /// Restrict to one gift type.
    #[must_use]
    pub fn gift_type_id(mut self, id: i64) -> Self {
        self.gift_type_id = Some(id);
        self
    }

    /// Restrict to one payment type.
    #[must_use]
    pub fn payment_type_id(mut self, id: i64) -> Self {
        self.payment_type_id = Some(id);
        self
    }

    /// Restrict to one campaign.
    #[must_use]
    pub fn campaign_id(mut self, id: i64) -> Self {
        self.campaign_id = Some(id);
        self
    }

    /// Restrict to one fund.
    #[must_use]
    pub fn fund_id(mut self, id: i64) -> Self {
        self.fund_id = Some(id);
        self
    }

    /// Restrict to one appeal.
    #[must_use]
    pub fn appeal_id(mut self, id: i64) -> Self {
        self.appeal_id = Some(id);
        self
    }

    /// Restrict to one event.
    #[must_use]
    pub fn event_id(mut self, id: i64) -> Self {
        self.event_id = Some(id);
        self
    }

    /// Lower amount bound, inclusive.
    #[must_use]
    pub fn amount_from(mut self, amount: f64) -> Self {
        self.amount_from = Some(amount);
        self
    }

    /// Upper amount bound, inclusive.
    #[must_use]
    pub fn amount_to(mut self, amount: f64) -> Self {
        self.amount_to = Some(amount);
        self
    }

    /// Earliest gift date, inclusive.
    #[must_use]
    pub fn date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    /// Latest gift date, inclusive.
    #[must_use]
    pub fn date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Match only acknowledged (or only unacknowledged) gifts.
    #[must_use]
    pub fn acknowledged(mut self, acknowledged: bool) -> Self {
        self.acknowledged = Some(acknowledged);
        self
    }

    /// Match an external gift id.
    #[must_use]
    pub fn external_gift_id(mut self, id: impl Into<String>) -> Self {
        self.external_gift_id = Some(id.into());
        self
    }

    /// Match a check number.
    #[must_use]
    pub fn check_number(mut self, number: impl Into<String>) -> Self {
        self.check_number = Some(number.into());
        self
    }

    /// Match text in the gift note.
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Sort key, e.g. `"date"` (append `!` to reverse).
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    fn to_query(&self) -> Query {
        Query::new()
            .maybe_param("constituent_id", self.constituent_id)
            .maybe_param("gift_type_id", self.gift_type_id)
            .maybe_param("payment_type_id", self.payment_type_id)
            .maybe_param("campaign_id", self.campaign_id)
            .maybe_param("fund_id", self.fund_id)
            .maybe_param("appeal_id", self.appeal_id)
            .maybe_param("event_id", self.event_id)
            .maybe_param("amount_from", self.amount_from)
            .maybe_param("amount_to", self.amount_to)
            .maybe_param("date_from", self.date_from.map(format_date))
            .maybe_param("date_to", self.date_to.map(format_date))
            .maybe_param("acknowledged", self.acknowledged)
            .maybe_param("external_gift_id", self.external_gift_id.clone())
            .maybe_param("check_number", self.check_number.clone())
            .maybe_param("note", self.note.clone())
            .maybe_param("sort", self.sort.clone())
    }
}

// ============================================================================
// Resource client
// ============================================================================

/// Client for the `gifts` resource.
///
/// Gifts are listed and created under the owning constituent
/// (`constituents/{id}/gifts`); retrieval, update and delete address
/// the gift directly.
#[derive(Debug)]
pub struct GiftsApi<'a> {
    transport: &'a Transport,
}

impl<'a> GiftsApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List one page of a constituent's gifts.
    pub fn list(&self, constituent_id: i64, limit: u32, offset: u32) -> Result<Vec<Gift>> {
        let path = format!("constituents/{constituent_id}/gifts");
        super::list_decoded(self.transport, &path, limit, offset)
    }

    /// Fetch every gift recorded for one constituent.
    pub fn fetch_all(&self, constituent_id: i64) -> Result<Vec<Gift>> {
        let path = format!("constituents/{constituent_id}/gifts");
        super::fetch_all_decoded(self.transport, &path)
    }

    /// Retrieve one gift by id.
    pub fn retrieve(&self, gift_id: i64) -> Result<Gift> {
        let body = self
            .transport
            .get(&format!("{RESOURCE}/{gift_id}"), &Query::new())?;
        super::decode(body)
    }

    /// Record a gift against a constituent.
    pub fn create(&self, constituent_id: i64, payload: &Value) -> Result<Gift> {
        let path = format!("constituents/{constituent_id}/gifts");
        let body = self.transport.post(&path, payload)?;
        super::decode(body)
    }

    /// Update a gift.
    pub fn update(&self, gift_id: i64, payload: &Value) -> Result<Gift> {
        let body = self
            .transport
            .patch(&format!("{RESOURCE}/{gift_id}"), payload)?;
        super::decode(body)
    }

    /// Delete a gift.
    pub fn delete(&self, gift_id: i64) -> Result<()> {
        self.transport.delete(&format!("{RESOURCE}/{gift_id}"))
    }

    /// Fetch one page of search results as the raw envelope.
    pub fn search(&self, search: &GiftSearch, limit: u32, offset: u32) -> Result<Page> {
        let query = search
            .to_query()
            .param("limit", limit)
            .param("offset", offset);
        super::search_page(self.transport, SEARCH, query)
    }

    /// Fetch every gift matching a search, walking pages automatically.
    pub fn search_all(&self, search: &GiftSearch) -> Result<Vec<Gift>> {
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
}
