//! The offset walk

use serde_json::Value;

use crate::error::Result;

use super::types::{is_meaningful, PageBody};

/// Default page size requested from the API.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Lazy iterator over every item of a paginated listing.
///
/// Generic over a page-fetch closure `(limit, offset) -> body`. Pages
/// are requested one at a time as items are consumed; dropping the
/// iterator abandons the walk. A fetch error is yielded once and the
/// iterator then stays exhausted. The walk is forward-only and not
/// resumable; restarting means a fresh iterator.
pub struct Pages<F> {
    fetch: F,
    limit: u32,
    offset: u32,
    buffer: std::vec::IntoIter<Value>,
    done: bool,
}

impl<F> Pages<F>
where
    F: FnMut(u32, u32) -> Result<Value>,
{
    /// Start a walk with the default page limit.
    pub fn new(fetch: F) -> Self {
        Self::with_limit(fetch, DEFAULT_PAGE_LIMIT)
    }

    /// Start a walk requesting `limit` items per page.
    pub fn with_limit(fetch: F, limit: u32) -> Self {
        Self {
            fetch,
            limit,
            offset: 0,
            buffer: Vec::new().into_iter(),
            done: false,
        }
    }

    /// Fetch the next page into the buffer, deciding whether the walk
    /// may continue past it.
    fn advance(&mut self) -> Result<()> {
        let body = (self.fetch)(self.limit, self.offset)?;

        match PageBody::classify(body) {
            PageBody::Envelope(page) => {
                if page.items.is_empty() {
                    self.done = true;
                    return Ok(());
                }
                // A short page is authoritative: stop even when the
                // reported total claims more data remains.
                if page.counted_items() < self.limit as usize
                    || self.offset as usize + page.counted_items() >= page.reported_total()
                {
                    self.done = true;
                }
                self.offset += page.items.len() as u32;
                self.buffer = page.items.into_iter();
            }
            PageBody::Direct(items) => {
                // A bare array is one page no matter its length
                self.done = true;
                self.buffer = items.into_iter();
            }
            PageBody::Other(value) => {
                self.done = true;
                if is_meaningful(&value) {
                    self.buffer = vec![value].into_iter();
                }
            }
        }
        Ok(())
    }
}

impl<F> Iterator for Pages<F>
where
    F: FnMut(u32, u32) -> Result<Value>,
{
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.next() {
                return Some(Ok(item));
            }
            if self.done {
                return None;
            }
            if let Err(err) = self.advance() {
                self.done = true;
                return Some(Err(err));
            }
        }
    }
}

/// Collect a whole walk into memory, stopping at the first error.
pub fn fetch_all<F>(fetch: F) -> Result<Vec<Value>>
where
    F: FnMut(u32, u32) -> Result<Value>,
{
    Pages::new(fetch).collect()
}
