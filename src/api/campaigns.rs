//! Campaigns resource

use serde_json::Value;

use crate::client::{Query, Transport};
use crate::error::Result;
use crate::model::Campaign;

const RESOURCE: &str = "campaigns";

/// Client for the `campaigns` resource.
///
/// Campaigns are fundraising drives spanning multiple appeals.
#[derive(Debug)]
pub struct CampaignsApi<'a> {
    transport: &'a Transport,
}

impl<'a> CampaignsApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List one page of campaigns.
    pub fn list(&self, limit: u32, offset: u32) -> Result<Vec<Campaign>> {
        super::list_decoded(self.transport, RESOURCE, limit, offset)
    }

    /// Fetch every campaign, walking pages automatically.
    pub fn fetch_all(&self) -> Result<Vec<Campaign>> {
        super::fetch_all_decoded(self.transport, RESOURCE)
    }

    /// Retrieve one campaign by id.
    pub fn retrieve(&self, campaign_id: i64) -> Result<Campaign> {
        let body = self
            .transport
            .get(&format!("{RESOURCE}/{campaign_id}"), &Query::new())?;
        super::decode(body)
    }

    /// Create a campaign from a JSON payload.
    pub fn create(&self, payload: &Value) -> Result<Campaign> {
        let body = self.transport.post(RESOURCE, payload)?;
        super::decode(body)
    }

    /// Update a campaign.
    pub fn update(&self, campaign_id: i64, payload: &Value) -> Result<Campaign> {
        let body = self
            .transport
            .patch(&format!("{RESOURCE}/{campaign_id}"), payload)?;
        super::decode(body)
    }

    /// Delete a campaign.
    pub fn delete(&self, campaign_id: i64) -> Result<()> {
        self.transport.delete(&format!("{RESOURCE}/{campaign_id}"))
    }
}
