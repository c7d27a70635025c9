//! Categories resource

use serde_json::Value;

use crate::client::{Query, Transport};
use crate::error::Result;
use crate::model::{Category, CategoryItemType};

const RESOURCE: &str = "categories";

/// Client for the `categories` resource.
///
/// Categories organize constituents, gifts and volunteer time into
/// keyword facets.
#[derive(Debug)]
pub struct CategoriesApi<'a> {
    transport: &'a Transport,
}

impl<'a> CategoriesApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List one page of categories.
    pub fn list(&self, limit: u32, offset: u32) -> Result<Vec<Category>> {
        super::list_decoded(self.transport, RESOURCE, limit, offset)
    }

    /// List one page of categories of a single kind.
    pub fn list_by_type(
        &self,
        item_type: CategoryItemType,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Category>> {
        let query = Query::new()
            .param("item_type", item_type.as_str())
            .param("limit", limit)
            .param("offset", offset);
        super::get_items(self.transport, RESOURCE, &query)?
            .into_iter()
            .map(super::decode)
            .collect()
    }

    /// Fetch every category, walking pages automatically.
    pub fn fetch_all(&self) -> Result<Vec<Category>> {
        super::fetch_all_decoded(self.transport, RESOURCE)
    }

    /// Retrieve one category by id.
    pub fn retrieve(&self, category_id: i64) -> Result<Category> {
        let body = self
            .transport
            .get(&format!("{RESOURCE}/{category_id}"), &Query::new())?;
        super::decode(body)
    }

    /// Create a category from a JSON payload.
    pub fn create(&self, payload: &Value) -> Result<Category> {
        let body = self.transport.post(RESOURCE, payload)?;
        super::decode(body)
    }

    /// Update a category.
    pub fn update(&self, category_id: i64, payload: &Value) -> Result<Category> {
        let body = self
            .transport
            .patch(&format!("{RESOURCE}/{category_id}"), payload)?;
        super::decode(body)
    }

    /// Delete a category.
    pub fn delete(&self, category_id: i64) -> Result<()> {
        self.transport.delete(&format!("{RESOURCE}/{category_id}"))
    }

    /// List the categories applied to one constituent.
    pub fn list_for_constituent(
        &self,
        constituent_id: i64,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Category>> {
        let path = format!("constituents/{constituent_id}/categories");
        super::list_decoded(self.transport, &path, limit, offset)
    }
}
