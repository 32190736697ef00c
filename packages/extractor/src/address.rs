//! Postal address extraction.
//!
//! Shared by every party extractor; has no party-specific logic.

use roxmltree::Node;

use crate::selector::{resolve, resolve_all, resolve_element, FieldId};
use crate::types::Address;
use crate::xml::get_text;

/// Extract the postal address nested under a node.
///
/// Locates the nearest address container among the candidate container
/// tags; many parties have no address on file, so an absent container
/// yields `None` rather than an error. Address lines are collected in
/// document order; city, region, country and postal code are resolved
/// independently, each defaulting to absent.
#[must_use]
pub fn extract_address(node: Node<'_, '_>) -> Option<Address> {
    let container = resolve_element(node, FieldId::AddressContainer)?;

    let lines = resolve_all(container, FieldId::AddressLine)
        .into_iter()
        .map(get_text)
        .filter(|line| !line.is_empty())
        .collect();

    Some(Address {
        lines,
        city: resolve(container, FieldId::AddressCity),
        state_or_region: resolve(container, FieldId::AddressRegion),
        country: resolve(container, FieldId::AddressCountry),
        postal_code: resolve(container, FieldId::AddressPostcode),
    })
}
