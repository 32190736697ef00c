//! Party extraction: owner, correspondent, attorney.
//!
//! Parties are nested under containers whose tags vary across documents,
//! and the owner's role is only discoverable from free text embedded in the
//! applicant entries - the source format has no structured role attribute.

use roxmltree::Node;

use crate::address::extract_address;
use crate::config::OWNER_ROLE_MARKERS;
use crate::selector::{resolve, resolve_all, resolve_element, FieldId};
use crate::types::{Attorney, Correspondent, Owner};
use crate::xml::text_content;

/// Extract the owning party.
///
/// Several applicant entries may be present (original vs. current
/// registrant, or joint owners); [`select_owner_node`] decides which one is
/// the owner.
#[must_use]
pub fn extract_owner(context: Node<'_, '_>) -> Option<Owner> {
    let applicants = resolve_all(context, FieldId::ApplicantContainer);
    let node = select_owner_node(&applicants)?;

    Some(Owner {
        name: resolve(node, FieldId::OwnerName),
        legal_entity_name: resolve(node, FieldId::OwnerLegalEntity),
        incorporation_state: resolve(node, FieldId::OwnerIncorporationState),
        incorporation_country: resolve(node, FieldId::OwnerIncorporationCountry),
        address: extract_address(node),
    })
}

/// Select the owner among the applicant entries.
///
/// Picks the first entry whose full text content contains a role-marker
/// token (case-sensitive literal match); when none matches, falls back to
/// the first entry in document order. Only the two English markers are
/// recognized - other phrasings silently take the fallback path.
fn select_owner_node<'a, 'input>(applicants: &[Node<'a, 'input>]) -> Option<Node<'a, 'input>> {
    let marked = applicants.iter().copied().find(|node| {
        let content = text_content(*node);
        OWNER_ROLE_MARKERS.iter().any(|marker| content.contains(marker))
    });

    if marked.is_none() && applicants.len() > 1 {
        tracing::debug!(
            candidates = applicants.len(),
            "no applicant entry carries a role marker, falling back to first"
        );
    }

    marked.or_else(|| applicants.first().copied())
}

/// Extract the correspondence party.
#[must_use]
pub fn extract_correspondent(context: Node<'_, '_>) -> Option<Correspondent> {
    let node = resolve_element(context, FieldId::CorrespondentContainer)?;

    Some(Correspondent {
        name: resolve(node, FieldId::CorrespondentName),
        organization: resolve(node, FieldId::CorrespondentOrganization),
        email: resolve(node, FieldId::CorrespondentEmail),
        phone: resolve(node, FieldId::CorrespondentPhone),
        address: extract_address(node),
    })
}

/// Extract the attorney of record.
///
/// Name and docket number only; the source schema models no address for
/// this party.
#[must_use]
pub fn extract_attorney(context: Node<'_, '_>) -> Option<Attorney> {
    let node = resolve_element(context, FieldId::AttorneyContainer)?;

    Some(Attorney {
        name: resolve(node, FieldId::AttorneyName),
        docket_number: resolve(node, FieldId::AttorneyDocketNumber),
    })
}
