//! Configuration constants for the extractor.
//!
//! Everything here is process-wide, immutable configuration describing the
//! source schema's observed quirks: which namespace prefixes occur in real
//! documents, which literal marks a boolean indicator as set, and which
//! free-text tokens identify the owning party.

/// Namespace prefixes observed in real registration documents, most common
/// first.
///
/// The source schema is versioned and inconsistently prefixed: the same
/// element appears as `ns1:RegistrationNumber`, `ns2:RegistrationNumber`,
/// `tm:RegistrationNumber` or plain `RegistrationNumber` depending on which
/// upstream subsystem produced the document. The selector expands every
/// field spelling across this table (and the bare, unprefixed form) in
/// order, so precedence is deterministic and auditable.
pub const NAMESPACE_PREFIXES: &[&str] = &["ns1", "ns2", "tm"];

/// The exact literal that marks a boolean indicator element as set.
///
/// Anything else (including `"TRUE"`, `"yes"`, `"1"`) reads as false.
pub const TRUTHY_INDICATOR: &str = "true";

/// Free-text tokens identifying the owner among several applicant entries.
///
/// The source format has no structured role attribute; the role is only
/// discoverable from descriptive text embedded in the applicant element.
/// Matching is case-sensitive and literal. Documents using other phrasing
/// fall back to the first applicant in document order.
pub const OWNER_ROLE_MARKERS: &[&str] = &["ORIGINAL REGISTRANT", "OWNER"];

/// Kind code marking a goods/services classification as the primary one.
pub const PRIMARY_CLASSIFICATION_KIND: &str = "Primary";

/// Kind code marking a goods/services classification as the Nice variant.
pub const NICE_CLASSIFICATION_KIND: &str = "Nice";
