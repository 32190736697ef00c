//! MerkRecht Extractor - Parse trademark registration XML into normalized records.
//!
//! This crate converts government-issued trademark registration documents -
//! XML under an ambiguous, inconsistently applied namespace scheme - into a
//! normalized [`TrademarkRecord`]. Extraction is tolerant by design: every
//! section and field is optional, absence is never an error, and the only
//! fatal condition is input that is not well-formed XML.
//!
//! # Example
//!
//! ```
//! use merkrecht_extractor::parse;
//!
//! let xml = r#"<TradeMark>
//!   <RegistrationNumber>1234567</RegistrationNumber>
//!   <RegistrationDate>20200101</RegistrationDate>
//! </TradeMark>"#;
//!
//! let record = parse(xml).unwrap();
//! assert_eq!(
//!     record.basic_info.unwrap().registration_number.as_deref(),
//!     Some("1234567")
//! );
//! assert_eq!(
//!     record.dates.unwrap().registration_date.as_deref(),
//!     Some("2020-01-01")
//! );
//! ```
//!
//! # Architecture
//!
//! The extractor is organized into several modules:
//!
//! - [`config`]: Schema-quirk constants (namespace prefixes, role markers)
//! - [`types`]: The normalized record types
//! - [`error`]: Error types and Result alias
//! - [`xml`]: roxmltree node utilities
//! - [`selector`]: Field-to-candidate-tag resolution
//! - [`dates`]: Date normalization
//! - [`address`]: Postal address extraction
//! - [`parties`]: Owner, correspondent and attorney extraction
//! - [`mark`]: Mark descriptor and goods/services extraction
//! - [`basis`]: Filing basis extraction
//! - [`history`]: Prosecution history, status and associations
//! - [`extractor`]: The `parse` entry point

pub mod address;
pub mod basis;
pub mod config;
pub mod dates;
pub mod error;
pub mod extractor;
pub mod history;
pub mod mark;
pub mod parties;
pub mod selector;
pub mod types;
pub mod xml;

// Re-export the main entry point
pub use extractor::parse;

// Re-export commonly used items
pub use error::{ParseError, Result};
pub use types::{
    Address, Association, Attorney, BasicInfo, BasisFlags, Correspondent, DateSet, FilingBasis,
    GoodsServiceEntry, MarkDescriptor, Owner, ProsecutionEvent, StatusInfo, TrademarkRecord,
};
