//! Field selector resolution.
//!
//! The source schema is versioned and inconsistently prefixed across
//! real-world documents: a strict single-selector lookup would silently
//! under-extract. Instead, every semantic field maps - via a static
//! configuration table - to an ordered list of tag-name spellings, and each
//! spelling is expanded across the known namespace prefixes plus the bare
//! unprefixed form. One shared lookup routine walks the candidates in order
//! and the first match wins, which keeps precedence deterministic and
//! auditable without coupling the extractors to namespace plumbing.

use roxmltree::Node;

use crate::config::NAMESPACE_PREFIXES;
use crate::xml::{get_text, in_scope_prefix, local_name};

/// Semantic field identifiers.
///
/// Each variant names one logical field or container of the registration
/// document; [`field_spellings`] maps it to the tag-name spellings observed
/// in real documents, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    // Root and section containers
    RegistrationRoot,
    ApplicantContainer,
    CorrespondentContainer,
    AttorneyContainer,
    AddressContainer,
    MarkContainer,
    GoodsServicesContainer,
    ClassificationContainer,
    FilingBasisContainer,
    CurrentBasisContainer,
    OriginalBasisContainer,
    EventContainer,
    AssociationContainer,

    // Basic info
    RegistrationNumber,
    ApplicationNumber,
    RegistrationOffice,
    FilingPlace,
    MarkCategory,

    // Dates
    ApplicationDate,
    RegistrationDate,
    StatusDate,
    PublicationDate,
    FirstUseDate,
    FirstUseInCommerceDate,

    // Address
    AddressLine,
    AddressCity,
    AddressRegion,
    AddressCountry,
    AddressPostcode,

    // Owner
    OwnerName,
    OwnerLegalEntity,
    OwnerIncorporationState,
    OwnerIncorporationCountry,

    // Correspondent
    CorrespondentName,
    CorrespondentOrganization,
    CorrespondentEmail,
    CorrespondentPhone,

    // Attorney
    AttorneyName,
    AttorneyDocketNumber,

    // Mark
    MarkText,
    StandardCharacterIndicator,
    MarkDescription,
    MarkDisclaimer,

    // Goods/services
    ClassificationKindCode,
    ClassNumber,
    GoodsServicesDescription,

    // Filing basis indicators
    BasisUseIndicator,
    BasisIntentToUseIndicator,
    BasisForeignIndicator,

    // Prosecution history
    EventDate,
    EventCode,
    EventDescription,
    EventEntryNumber,

    // Status
    StatusCode,
    StatusDescription,

    // Associations
    AssociationCategory,
    AssociationApplicationNumber,
    InternationalRegistrationNumber,
}

/// Tag-name spellings for a field, most common variant first.
///
/// This is the auditable half of the candidate list; the other half is the
/// prefix expansion across [`NAMESPACE_PREFIXES`].
#[must_use]
pub fn field_spellings(field: FieldId) -> &'static [&'static str] {
    match field {
        FieldId::RegistrationRoot => &["TradeMark", "Trademark", "MarkRegistration"],
        FieldId::ApplicantContainer => &["Applicant", "Holder"],
        FieldId::CorrespondentContainer => &["Correspondent", "CorrespondenceAddress"],
        FieldId::AttorneyContainer => &["NationalRepresentative", "RecordAttorney", "Attorney"],
        FieldId::AddressContainer => &["FormattedAddress", "FreeFormatAddress", "Address"],
        FieldId::MarkContainer => &["MarkRepresentation", "WordMarkSpecification"],
        FieldId::GoodsServicesContainer => &["GoodsServices", "ClassDescription"],
        FieldId::ClassificationContainer => &["GoodsServicesClassification", "Classification"],
        FieldId::FilingBasisContainer => &["FilingBasis", "ApplicationBasis"],
        FieldId::CurrentBasisContainer => &["CurrentBasis"],
        FieldId::OriginalBasisContainer => &["OriginalBasis"],
        FieldId::EventContainer => &["MarkEvent", "ProsecutionHistoryEntry"],
        FieldId::AssociationContainer => &["AssociatedMark", "InternationalAssociation"],

        FieldId::RegistrationNumber => &["RegistrationNumber"],
        FieldId::ApplicationNumber => &["ApplicationNumber", "ApplicationNumberText"],
        FieldId::RegistrationOffice => &["RegistrationOfficeCode", "ReceivingOfficeCode"],
        FieldId::FilingPlace => &["FilingPlace", "ReceivingOfficeName"],
        FieldId::MarkCategory => &["MarkCategory", "KindMark"],

        FieldId::ApplicationDate => &["ApplicationDate", "FilingDate"],
        FieldId::RegistrationDate => &["RegistrationDate"],
        FieldId::StatusDate => &["MarkCurrentStatusDate", "StatusDate"],
        FieldId::PublicationDate => &["PublicationDate", "MarkPublicationDate"],
        FieldId::FirstUseDate => &["FirstUseDate", "MarkFirstUseDate"],
        FieldId::FirstUseInCommerceDate => &["FirstUseCommerceDate", "FirstUseInCommerceDate"],

        FieldId::AddressLine => &["AddressLine", "FreeFormatAddressLine", "AddressStreet"],
        FieldId::AddressCity => &["AddressCity", "CityName"],
        FieldId::AddressRegion => &["AddressState", "GeographicRegionName"],
        FieldId::AddressCountry => &["AddressCountryCode", "CountryCode", "AddressCountry"],
        FieldId::AddressPostcode => &["AddressPostcode", "PostalCode"],

        FieldId::OwnerName => &["ApplicantName", "FullName", "EntityName"],
        FieldId::OwnerLegalEntity => &["LegalEntityName", "ApplicantLegalEntity"],
        FieldId::OwnerIncorporationState => &["IncorporationState", "ApplicantIncorporationState"],
        FieldId::OwnerIncorporationCountry => {
            &["IncorporationCountryCode", "ApplicantIncorporationCountryCode"]
        }

        FieldId::CorrespondentName => &["CorrespondentName", "FullName"],
        FieldId::CorrespondentOrganization => &["OrganizationName", "OrganizationStandardName"],
        FieldId::CorrespondentEmail => &["EmailAddress", "Email"],
        FieldId::CorrespondentPhone => &["PhoneNumber", "Phone"],

        FieldId::AttorneyName => &["AttorneyName", "FullName"],
        FieldId::AttorneyDocketNumber => &["AttorneyDocketNumber", "DocketNumber"],

        FieldId::MarkText => &["MarkVerbalElementText", "MarkSignificantVerbalElementText"],
        FieldId::StandardCharacterIndicator => {
            &["MarkStandardCharacterIndicator", "StandardCharacterIndicator"]
        }
        FieldId::MarkDescription => &["MarkDescriptionText", "MarkImageDescriptionText"],
        FieldId::MarkDisclaimer => &["MarkDisclaimerText", "DisclaimerText"],

        FieldId::ClassificationKindCode => &["ClassificationKindCode", "KindCode"],
        FieldId::ClassNumber => &["ClassNumber", "ClassificationClassNumber"],
        FieldId::GoodsServicesDescription => {
            &["GoodsServicesDescriptionText", "GoodsServicesDescription"]
        }

        FieldId::BasisUseIndicator => &["BasisUseIndicator", "UseIndicator"],
        FieldId::BasisIntentToUseIndicator => {
            &["BasisIntentToUseIndicator", "IntentToUseIndicator"]
        }
        FieldId::BasisForeignIndicator => {
            &["BasisForeignApplicationIndicator", "ForeignApplicationIndicator"]
        }

        FieldId::EventDate => &["MarkEventDate", "EventDate"],
        FieldId::EventCode => &["MarkEventCode", "EventCode"],
        FieldId::EventDescription => &["MarkEventDescriptionText", "EventDescriptionText"],
        FieldId::EventEntryNumber => &["MarkEventEntryNumber", "EventEntryNumber"],

        FieldId::StatusCode => &["MarkCurrentStatusCode", "StatusCode"],
        FieldId::StatusDescription => {
            &["MarkCurrentStatusExternalDescriptionText", "MarkCurrentStatusDescriptionText"]
        }

        FieldId::AssociationCategory => &["AssociationCategory", "AssociationTypeCode"],
        FieldId::AssociationApplicationNumber => {
            &["AssociationApplicationNumber", "ApplicationNumber"]
        }
        FieldId::InternationalRegistrationNumber => {
            &["InternationalRegistrationNumber", "InternationalApplicationNumber"]
        }
    }
}

/// Expand a field's spellings into (prefix, local-name) candidates.
///
/// For each spelling: every known prefix in table order, then the bare
/// unprefixed form.
fn candidates(field: FieldId) -> impl Iterator<Item = (Option<&'static str>, &'static str)> {
    field_spellings(field).iter().flat_map(|&local| {
        NAMESPACE_PREFIXES
            .iter()
            .map(|&prefix| Some(prefix))
            .chain(std::iter::once(None))
            .map(move |prefix| (prefix, local))
    })
}

/// Whether an element matches one candidate.
///
/// The local name must equal the spelling and the element's in-scope prefix
/// must equal the candidate's; bare candidates match elements that read as
/// unprefixed in the source document.
fn matches_candidate(node: Node<'_, '_>, prefix: Option<&str>, local: &str) -> bool {
    node.is_element() && local_name(node) == local && in_scope_prefix(node) == prefix
}

/// Whether a node itself matches any candidate of a field.
#[must_use]
pub fn matches_field(node: Node<'_, '_>, field: FieldId) -> bool {
    candidates(field).any(|(prefix, local)| matches_candidate(node, prefix, local))
}

/// Resolve a field to its text content within a context node.
///
/// Searches the context's descendants for each candidate in order. An
/// element with empty (after trimming) text is no match; the first
/// non-empty text found wins. Returns `None` when nothing matches - absence
/// is never an error.
#[must_use]
pub fn resolve(context: Node<'_, '_>, field: FieldId) -> Option<String> {
    for (prefix, local) in candidates(field) {
        for node in context
            .descendants()
            .skip(1)
            .filter(|n| matches_candidate(*n, prefix, local))
        {
            let text = get_text(node);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Resolve a field to every matching element, in document order.
///
/// Returns the matches of the first candidate that yields at least one
/// element; an empty vector when no candidate matches.
#[must_use]
pub fn resolve_all<'a, 'input>(context: Node<'a, 'input>, field: FieldId) -> Vec<Node<'a, 'input>> {
    for (prefix, local) in candidates(field) {
        let nodes: Vec<_> = context
            .descendants()
            .skip(1)
            .filter(|n| matches_candidate(*n, prefix, local))
            .collect();
        if !nodes.is_empty() {
            return nodes;
        }
    }
    Vec::new()
}

/// Resolve a field to its first matching element.
#[must_use]
pub fn resolve_element<'a, 'input>(
    context: Node<'a, 'input>,
    field: FieldId,
) -> Option<Node<'a, 'input>> {
    for (prefix, local) in candidates(field) {
        let found = context
            .descendants()
            .skip(1)
            .find(|n| matches_candidate(*n, prefix, local));
        if found.is_some() {
            return found;
        }
    }
    None
}

/// Resolve a boolean indicator field.
///
/// True only when the resolved text is exactly the truthy literal; absent
/// or any other value reads as false.
#[must_use]
pub fn resolve_flag(context: Node<'_, '_>, field: FieldId) -> bool {
    resolve(context, field).as_deref() == Some(crate::config::TRUTHY_INDICATOR)
}
