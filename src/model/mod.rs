//! Resource records module
//!
//! Typed views over the JSON the API returns, plus the date handling
//! shared by every resource.
//!
//! # Features
//!
//! - **Lenient dates**: `YYYY-MM-DD` fields fall back to the date part of an ISO datetime; malformed optional dates become `None`
//! - **Tolerant decoding**: unknown response fields are ignored, money fields accept numbers and numeric strings
//! - **Stable output**: optional fields are omitted when absent, dates serialize back in API form

mod common;
mod records;

pub use common::{
    format_date, parse_date, parse_datetime, CustomAttribute, CustomField, CustomValue, Keyword,
};
pub use records::{
    Appeal, Campaign, Category, CategoryItemType, Constituent, EmailAddress, Event, FacetType,
    Fund, Gift, PaymentType, PhoneNumber, StreetAddress, Tribute,
};
