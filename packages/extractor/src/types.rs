//! Core data types for the extractor.
//!
//! These types model one normalized trademark registration record. Source
//! documents are inconsistently populated, so every field is optional:
//! absence is a legitimate value, not an error, and is kept distinguishable
//! from "present and empty" at the type level.

use serde::{Deserialize, Serialize};

/// The root output: one normalized trademark registration record.
///
/// Produced once per parse call from an immutable XML input; a value with
/// no further mutation or identity beyond that call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrademarkRecord {
    /// Registration/application identifiers and basic descriptors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_info: Option<BasicInfo>,

    /// Normalized lifecycle dates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<DateSet>,

    /// The owning party.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,

    /// The correspondence party.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correspondent: Option<Correspondent>,

    /// The attorney of record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attorney: Option<Attorney>,

    /// The mark's textual/visual descriptor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark: Option<MarkDescriptor>,

    /// Goods/services classification entries, in document order.
    pub goods_services: Vec<GoodsServiceEntry>,

    /// Filing basis flags (current and original).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filing_basis: Option<FilingBasis>,

    /// Cross-references to related international filings, in document order.
    pub international_associations: Vec<Association>,

    /// Prosecution events, sorted descending by date (undated trailing).
    pub prosecution_history: Vec<ProsecutionEvent>,

    /// Current status record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusInfo>,
}

/// Registration identifiers and basic descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfo {
    /// Registration number assigned at grant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,

    /// Application (serial) number assigned at filing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_number: Option<String>,

    /// Office that holds the registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_office: Option<String>,

    /// Place of filing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filing_place: Option<String>,

    /// Category of the mark (e.g. individual, collective).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_category: Option<String>,
}

impl BasicInfo {
    /// Whether no field was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registration_number.is_none()
            && self.application_number.is_none()
            && self.registration_office.is_none()
            && self.filing_place.is_none()
            && self.mark_category.is_none()
    }
}

/// Lifecycle dates, each normalized to `YYYY-MM-DD` where recognized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_use_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_use_in_commerce_date: Option<String>,
}

impl DateSet {
    /// Whether no date was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.application_date.is_none()
            && self.registration_date.is_none()
            && self.status_date.is_none()
            && self.publication_date.is_none()
            && self.first_use_date.is_none()
            && self.first_use_in_commerce_date.is_none()
    }
}

/// A postal address.
///
/// `lines` preserves source order and is never reordered or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Address lines in document order; may be empty.
    pub lines: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_or_region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// The owning party of the registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub incorporation_state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub incorporation_country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// The correspondence party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correspondent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// The attorney of record. The source schema models no address for this
/// party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attorney {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub docket_number: Option<String>,
}

/// The mark's textual/visual descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkDescriptor {
    /// Verbal element of the mark.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// True only when the source indicator is exactly the truthy literal.
    pub is_standard_character: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
}

/// One goods/services classification entry.
///
/// The list preserves document order; duplicates are not merged, and an
/// entry with no locatable classification still appears with absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodsServiceEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nice_class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Filing basis for the registration.
///
/// An absent half means "basis not stated", which is distinct from a
/// present half with all flags false ("basis stated as not applicable").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingBasis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<BasisFlags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<BasisFlags>,
}

/// The three boolean indicators of one filing-basis sub-record.
///
/// Each flag is true only for an exact truthy-literal match; missing
/// indicators default to false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasisFlags {
    /// Use in commerce. (`use` is a Rust keyword; serialized as `"use"`.)
    #[serde(rename = "use")]
    pub use_basis: bool,

    pub intent_to_use: bool,

    pub foreign: bool,
}

/// Cross-reference to a related (usually international) filing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Association {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub international_number: Option<String>,
}

/// One prosecution event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProsecutionEvent {
    /// Normalized event date, or absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_number: Option<String>,
}

/// The current status record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Normalized status date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
