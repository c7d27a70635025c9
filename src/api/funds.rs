//! Funds resource

use serde_json::Value;

use crate::client::{Query, Transport};
use crate::error::Result;
use crate::model::Fund;

const RESOURCE: &str = "funds";

/// Client for the `funds` resource.
///
/// Funds are designated accounts or purposes for donations, such as
/// building funds or endowments.
#[derive(Debug)]
pub struct FundsApi<'a> {
    transport: &'a Transport,
}

impl<'a> FundsApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List one page of funds.
    pub fn list(&self, limit: u32, offset: u32) -> Result<Vec<Fund>> {
        super::list_decoded(self.transport, RESOURCE, limit, offset)
    }

    /// Fetch every fund, walking pages automatically.
    pub fn fetch_all(&self) -> Result<Vec<Fund>> {
        super::fetch_all_decoded(self.transport, RESOURCE)
    }

    /// Retrieve one fund by id.
    pub fn retrieve(&self, fund_id: i64) -> Result<Fund> {
        let body = self
            .transport
            .get(&format!("{RESOURCE}/{fund_id}"), &Query::new())?;
        super::decode(body)
    }

    /// Create a fund from a JSON payload.
    pub fn create(&self, payload: &Value) -> Result<Fund> {
        let body = self.transport.post(RESOURCE, payload)?;
        super::decode(body)
    }

    /// Update a fund.
    pub fn update(&self, fund_id: i64, payload: &Value) -> Result<Fund> {
        let body = self
            .transport
            .patch(&format!("{RESOURCE}/{fund_id}"), payload)?;
        super::decode(body)
    }

    /// Delete a fund.
    pub fn delete(&self, fund_id: i64) -> Result<()> {
        self.transport.delete(&format!("{RESOURCE}/{fund_id}"))
    }
}
