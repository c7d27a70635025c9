//! Offset pagination
//!
//! Turns a single "fetch one page" operation into a lazy, ordered
//! iterator over every item the server holds. The walk drives the fetch
//! closure with increasing offsets, reads the response envelope's
//! counters to decide whether more data remains, and flattens all pages
//! into one sequence. Direct-array resources (bare JSON arrays) are a
//! single page by definition; a second call is never issued for them.

mod types;
mod walker;

pub use types::{Page, PageBody};
pub use walker::{fetch_all, Pages, DEFAULT_PAGE_LIMIT};

#[cfg(test)]
mod tests;
