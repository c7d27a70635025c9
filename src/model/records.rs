//! Typed resource records
//!
//! Field layouts mirror the wire format. Unknown response fields are
//! ignored for forward compatibility, optional fields are omitted from
//! serialized output, and date fields parse leniently (malformed input
//! becomes `None` on optional fields).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::common::{self, CustomAttribute, Keyword};

// ============================================================================
// Fundraising resources
// ============================================================================

/// A solicitation effort targeting a set of constituents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appeal {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "common::opt_date", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "common::opt_decimal", skip_serializing_if = "Option::is_none")]
    pub financial_goal: Option<f64>,
    #[serde(default, deserialize_with = "common::opt_decimal", skip_serializing_if = "Option::is_none")]
    pub projected_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// A fundraising drive spanning multiple appeals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "common::opt_decimal", skip_serializing_if = "Option::is_none")]
    pub financial_goal: Option<f64>,
    #[serde(default, deserialize_with = "common::opt_date", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "common::opt_date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "common::opt_decimal", skip_serializing_if = "Option::is_none")]
    pub goal: Option<f64>,
    #[serde(default, deserialize_with = "common::opt_datetime", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "common::opt_datetime", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A fundraising event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "common::opt_date", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "common::opt_date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "common::opt_decimal", skip_serializing_if = "Option::is_none")]
    pub financial_goal: Option<f64>,
    #[serde(default, deserialize_with = "common::opt_decimal", skip_serializing_if = "Option::is_none")]
    pub projected_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// A designated account or purpose for donations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "common::opt_date", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "common::opt_date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "common::opt_decimal", skip_serializing_if = "Option::is_none")]
    pub financial_goal: Option<f64>,
}

/// A method of payment for gifts (cash, check, card, stock).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentType {
    pub id: i64,
    pub name: String,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<i64>,
}

// ============================================================================
// Categories
// ============================================================================

/// Resource kind a category applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryItemType {
    Constituent,
    Gift,
    VolunteerTime,
}

impl CategoryItemType {
    /// Wire form of the variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Constituent => "Constituent",
            Self::Gift => "Gift",
            Self::VolunteerTime => "VolunteerTime",
        }
    }
}

/// Single-value or list-valued category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetType {
    Single,
    List,
}

/// A categorization facet with its keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub item_type: CategoryItemType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facet_type: Option<FacetType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_format: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<Keyword>,
}

// ============================================================================
// Constituents
// ============================================================================

/// Email address attached to a constituent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub id: i64,
    pub address: String,
    pub email_address_type_id: i64,
    pub email_type_name: String,
    #[serde(default)]
    pub is_preferred: bool,
    #[serde(default)]
    pub not_current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(deserialize_with = "common::req_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "common::req_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Phone number attached to a constituent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub id: i64,
    pub number: String,
    pub phone_number_type_id: i64,
    pub phone_type_name: String,
    #[serde(default)]
    pub is_preferred: bool,
    #[serde(default)]
    pub not_current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_number: Option<String>,
    #[serde(deserialize_with = "common::req_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "common::req_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Street address attached to a constituent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreetAddress {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    pub street_address_type_id: i64,
    pub street_type_name: String,
    #[serde(default)]
    pub is_preferred: bool,
    #[serde(default)]
    pub not_current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasonal_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasonal_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasonal: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip5: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, deserialize_with = "common::opt_datetime", skip_serializing_if = "Option::is_none")]
    pub verified_on: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "common::req_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "common::req_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// An individual or organization in the CRM.
///
/// Contact lists, categories and custom attributes are populated only
/// when the server expands them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constituent {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_constituent_id: Option<String>,
    #[serde(default)]
    pub is_org: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constituent_contact_type_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constituent_contact_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addressee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constituent_interest_level_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constituent_interest_level_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constituent_rating_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constituent_rating_name: Option<String>,
    #[serde(default)]
    pub is_deceased: bool,
    #[serde(default, deserialize_with = "common::opt_date", skip_serializing_if = "Option::is_none")]
    pub deceased_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_report_name: Option<String>,
    #[serde(default, deserialize_with = "common::opt_date", skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maiden_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse_nick_name: Option<String>,
    #[serde(default, deserialize_with = "common::opt_date", skip_serializing_if = "Option::is_none")]
    pub date_added: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_salutation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_addressee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honorary_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status_name: Option<String>,
    #[serde(default)]
    pub is_anon: bool,
    #[serde(deserialize_with = "common::req_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "common::req_datetime")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub street_addresses: Vec<StreetAddress>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phone_numbers: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub email_addresses: Vec<EmailAddress>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_attrs: Vec<CustomAttribute>,
}

// ============================================================================
// Gifts
// ============================================================================

/// Tribute information attached to a gift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tribute {
    pub tribute_name: String,
    pub tribute_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tribute_note: Option<String>,
}

/// A financial contribution from a constituent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gift {
    pub id: i64,
    pub constituent_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constituent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_gift_id: Option<String>,
    pub gift_type_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift_category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift_category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_type_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fund_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fund_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appeal_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appeal_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(deserialize_with = "common::req_decimal")]
    pub amount: f64,
    #[serde(default, deserialize_with = "common::opt_decimal", skip_serializing_if = "Option::is_none")]
    pub deductible_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_number: Option<String>,
    #[serde(default, deserialize_with = "common::opt_date", skip_serializing_if = "Option::is_none")]
    pub check_date: Option<NaiveDate>,
    #[serde(deserialize_with = "common::req_date")]
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "common::opt_date", skip_serializing_if = "Option::is_none")]
    pub date_deposited: Option<NaiveDate>,
    #[serde(default)]
    pub acknowledged: bool,
    #[serde(default, deserialize_with = "common::opt_date", skip_serializing_if = "Option::is_none")]
    pub acknowledged_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_gift_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment_frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_installments: Option<i64>,
    #[serde(deserialize_with = "common::req_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "common::req_datetime")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_attrs: Vec<CustomAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tribute: Option<Tribute>,
}
