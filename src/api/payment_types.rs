//! Payment types resource

use crate::client::Transport;
use crate::error::Result;
use crate::model::PaymentType;

const RESOURCE: &str = "payment_types";

/// Client for the `payment_types` resource.
///
/// Payment types are read-only lookup data. The endpoint may answer
/// with a bare array instead of the usual page envelope; the
/// pagination layer treats that as a single page.
#[derive(Debug)]
pub struct PaymentTypesApi<'a> {
    transport: &'a Transport,
}

impl<'a> PaymentTypesApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List one page of payment types.
    pub fn list(&self, limit: u32, offset: u32) -> Result<Vec<PaymentType>> {
        super::list_decoded(self.transport, RESOURCE, limit, offset)
    }

    /// Fetch every payment type.
    pub fn fetch_all(&self) -> Result<Vec<PaymentType>> {
        super::fetch_all_decoded(self.transport, RESOURCE)
    }
}
