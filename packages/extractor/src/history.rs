//! Prosecution history, current status, and association extraction.

use std::cmp::Ordering;

use roxmltree::Node;

use crate::dates::{normalize, sort_key};
use crate::selector::{resolve, resolve_all, FieldId};
use crate::types::{Association, ProsecutionEvent, StatusInfo};

/// Extract the prosecution history, sorted for presentation.
///
/// Events lacking both a date and a description carry no information and
/// are discarded. The rest sort descending by date; undated events trail,
/// keeping their relative source order (stable sort).
#[must_use]
pub fn extract_prosecution_history(context: Node<'_, '_>) -> Vec<ProsecutionEvent> {
    let mut events: Vec<ProsecutionEvent> = resolve_all(context, FieldId::EventContainer)
        .into_iter()
        .filter_map(extract_event)
        .collect();

    events.sort_by(compare_events_desc);
    events
}

/// Extract one prosecution event; `None` for noise entries.
fn extract_event(node: Node<'_, '_>) -> Option<ProsecutionEvent> {
    let event = ProsecutionEvent {
        date: resolve(node, FieldId::EventDate).and_then(|raw| normalize(&raw)),
        code: resolve(node, FieldId::EventCode),
        description: resolve(node, FieldId::EventDescription),
        entry_number: resolve(node, FieldId::EventEntryNumber),
    };

    if event.date.is_none() && event.description.is_none() {
        return None;
    }
    Some(event)
}

/// Descending-by-date comparator; dateless (or unparseable) events sort
/// after every dated one.
fn compare_events_desc(a: &ProsecutionEvent, b: &ProsecutionEvent) -> Ordering {
    let key_a = a.date.as_deref().and_then(sort_key);
    let key_b = b.date.as_deref().and_then(sort_key);

    match (key_a, key_b) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Extract the current status record.
///
/// `None` only when code, date and description are all absent.
#[must_use]
pub fn extract_status(context: Node<'_, '_>) -> Option<StatusInfo> {
    let code = resolve(context, FieldId::StatusCode);
    let date = resolve(context, FieldId::StatusDate).and_then(|raw| normalize(&raw));
    let description = resolve(context, FieldId::StatusDescription);

    if code.is_none() && date.is_none() && description.is_none() {
        return None;
    }

    Some(StatusInfo {
        code,
        date,
        description,
    })
}

/// Extract international/associated-mark cross-references, in document
/// order. Every field is independently optional.
#[must_use]
pub fn extract_associations(context: Node<'_, '_>) -> Vec<Association> {
    resolve_all(context, FieldId::AssociationContainer)
        .into_iter()
        .map(|node| Association {
            category: resolve(node, FieldId::AssociationCategory),
            application_number: resolve(node, FieldId::AssociationApplicationNumber),
            international_number: resolve(node, FieldId::InternationalRegistrationNumber),
        })
        .collect()
}
