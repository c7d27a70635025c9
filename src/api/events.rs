//! Events resource

use serde_json::Value;

use crate::client::{Query, Transport};
use crate::error::Result;
use crate::model::Event;

const RESOURCE: &str = "events";

/// Client for the `events` resource.
#[derive(Debug)]
pub struct EventsApi<'a> {
    transport: &'a Transport,
}

impl<'a> EventsApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List one page of events.
    pub fn list(&self, limit: u32, offset: u32) -> Result<Vec<Event>> {
        super::list_decoded(self.transport, RESOURCE, limit, offset)
    }

    /// Fetch every event, walking pages automatically.
    pub fn fetch_all(&self) -> Result<Vec<Event>> {
        super::fetch_all_decoded(self.transport, RESOURCE)
    }

    /// Retrieve one event by id.
    pub fn retrieve(&self, event_id: i64) -> Result<Event> {
        let body = self
            .transport
            .get(&format!("{RESOURCE}/{event_id}"), &Query::new())?;
        super::decode(body)
    }

    /// Create an event from a JSON payload.
    pub fn create(&self, payload: &Value) -> Result<Event> {
        let body = self.transport.post(RESOURCE, payload)?;
        super::decode(body)
    }

    /// Update an event.
    pub fn update(&self, event_id: i64, payload: &Value) -> Result<Event> {
        let body = self
            .transport
            .patch(&format!("{RESOURCE}/{event_id}"), payload)?;
        super::decode(body)
    }

    /// Delete an event.
    pub fn delete(&self, event_id: i64) -> Result<()> {
        self.transport.delete(&format!("{RESOURCE}/{event_id}"))
    }
}
