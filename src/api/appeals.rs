//! Appeals resource

use serde_json::Value;

use crate::client::{Query, Transport};
use crate::error::Result;
use crate::model::Appeal;

const RESOURCE: &str = "appeals";

/// Client for the `appeals` resource.
///
/// Appeals are solicitation efforts targeting a set of constituents.
#[derive(Debug)]
pub struct AppealsApi<'a> {
    transport: &'a Transport,
}

impl<'a> AppealsApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List one page of appeals.
    pub fn list(&self, limit: u32, offset: u32) -> Result<Vec<Appeal>> {
        super::list_decoded(self.transport, RESOURCE, limit, offset)
    }

    /// Fetch every appeal, walking pages automatically.
    pub fn fetch_all(&self) -> Result<Vec<Appeal>> {
        super::fetch_all_decoded(self.transport, RESOURCE)
    }

    /// Retrieve one appeal by id.
    pub fn retrieve(&self, appeal_id: i64) -> Result<Appeal> {
        let body = self
            .transport
            .get(&format!("{RESOURCE}/{appeal_id}"), &Query::new())?;
        super::decode(body)
    }

    /// Create an appeal from a JSON payload.
    pub fn create(&self, payload: &Value) -> Result<Appeal> {
        let body = self.transport.post(RESOURCE, payload)?;
        super::decode(body)
    }

    /// Update an appeal.
    pub fn update(&self, appeal_id: i64, payload: &Value) -> Result<Appeal> {
        let body = self
            .transport
            .patch(&format!("{RESOURCE}/{appeal_id}"), payload)?;
        super::decode(body)
    }

    /// Delete an appeal.
    pub fn delete(&self, appeal_id: i64) -> Result<()> {
        self.transport.delete(&format!("{RESOURCE}/{appeal_id}"))
    }
}
