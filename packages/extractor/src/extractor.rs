//! Main extraction entry point that ties all section extractors together.

use roxmltree::{Document, Node};

use crate::basis::extract_filing_basis;
use crate::dates::normalize;
use crate::error::{ParseError, Result};
use crate::history::{extract_associations, extract_prosecution_history, extract_status};
use crate::mark::{extract_goods_services, extract_mark};
use crate::parties::{extract_attorney, extract_correspondent, extract_owner};
use crate::selector::{matches_field, resolve, resolve_element, FieldId};
use crate::types::{BasicInfo, DateSet, TrademarkRecord};

/// Parse one trademark registration XML document into a normalized record.
///
/// The only fatal condition is input that is not well-formed XML; every
/// extractor below tolerates absent sections and fields, so a successfully
/// returned record is best effort, possibly sparse.
///
/// # Arguments
/// * `xml_text` - The registration document as XML text
///
/// # Returns
/// A `TrademarkRecord`, or `ParseError::Malformed` for non-well-formed input
pub fn parse(xml_text: &str) -> Result<TrademarkRecord> {
    let doc = Document::parse(xml_text).map_err(|e| ParseError::Malformed {
        detail: e.to_string(),
    })?;

    Ok(assemble(registration_context(&doc)))
}

/// Locate the registration element to extract from.
///
/// The wrapper may be the document element itself or nested under a
/// transaction envelope. Some real documents omit it entirely; those fall
/// back to the whole document as the search context.
fn registration_context<'a, 'input>(doc: &'a Document<'input>) -> Node<'a, 'input> {
    let root = doc.root_element();
    if matches_field(root, FieldId::RegistrationRoot) {
        return root;
    }

    resolve_element(root, FieldId::RegistrationRoot).unwrap_or_else(|| {
        tracing::debug!("no registration wrapper element, extracting from document root");
        root
    })
}

/// Compose every section extractor's result into one record.
fn assemble(context: Node<'_, '_>) -> TrademarkRecord {
    TrademarkRecord {
        basic_info: extract_basic_info(context),
        dates: extract_dates(context),
        owner: extract_owner(context),
        correspondent: extract_correspondent(context),
        attorney: extract_attorney(context),
        mark: extract_mark(context),
        goods_services: extract_goods_services(context),
        filing_basis: extract_filing_basis(context),
        international_associations: extract_associations(context),
        prosecution_history: extract_prosecution_history(context),
        status: extract_status(context),
    }
}

/// Extract registration identifiers and basic descriptors.
fn extract_basic_info(context: Node<'_, '_>) -> Option<BasicInfo> {
    let info = BasicInfo {
        registration_number: resolve(context, FieldId::RegistrationNumber),
        application_number: resolve(context, FieldId::ApplicationNumber),
        registration_office: resolve(context, FieldId::RegistrationOffice),
        filing_place: resolve(context, FieldId::FilingPlace),
        mark_category: resolve(context, FieldId::MarkCategory),
    };

    if info.is_empty() {
        return None;
    }
    Some(info)
}

/// Extract and normalize the lifecycle dates.
fn extract_dates(context: Node<'_, '_>) -> Option<DateSet> {
    let resolve_date =
        |field: FieldId| resolve(context, field).and_then(|raw| normalize(&raw));

    let dates = DateSet {
        application_date: resolve_date(FieldId::ApplicationDate),
        registration_date: resolve_date(FieldId::RegistrationDate),
        status_date: resolve_date(FieldId::StatusDate),
        publication_date: resolve_date(FieldId::PublicationDate),
        first_use_date: resolve_date(FieldId::FirstUseDate),
        first_use_in_commerce_date: resolve_date(FieldId::FirstUseInCommerceDate),
    };

    if dates.is_empty() {
        return None;
    }
    Some(dates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_document() {
        let record = parse("<TradeMark><RegistrationNumber>1234567</RegistrationNumber></TradeMark>")
            .unwrap();

        assert_eq!(
            record.basic_info.unwrap().registration_number,
            Some("1234567".to_string())
        );
        assert_eq!(record.owner, None);
        assert!(record.goods_services.is_empty());
    }

    #[test]
    fn test_parse_wrapper_nested_under_envelope() {
        let xml = r#"<Transaction>
  <TradeMarkTransactionBody>
    <TradeMark><RegistrationNumber>7654321</RegistrationNumber></TradeMark>
  </TradeMarkTransactionBody>
</Transaction>"#;
        let record = parse(xml).unwrap();

        assert_eq!(
            record.basic_info.unwrap().registration_number,
            Some("7654321".to_string())
        );
    }

    #[test]
    fn test_parse_without_wrapper_falls_back_to_document() {
        // No recognizable registration element anywhere: the whole document
        // becomes the search context.
        let xml = r#"<SomeExport>
  <ApplicationNumber>87000001</ApplicationNumber>
  <ApplicationDate>20180402</ApplicationDate>
</SomeExport>"#;
        let record = parse(xml).unwrap();

        assert_eq!(
            record.basic_info.unwrap().application_number,
            Some("87000001".to_string())
        );
        assert_eq!(
            record.dates.unwrap().application_date,
            Some("2018-04-02".to_string())
        );
    }

    #[test]
    fn test_parse_malformed_input_fails() {
        let result = parse("<TradeMark><RegistrationNumber>123");
        assert!(matches!(result, Err(ParseError::Malformed { .. })));
    }

    #[test]
    fn test_parse_empty_document_yields_sparse_record() {
        let record = parse("<TradeMark/>").unwrap();

        assert_eq!(record, TrademarkRecord::default());
    }

    #[test]
    fn test_dates_are_normalized() {
        let xml = r#"<TradeMark>
  <ApplicationDate>2018-04-03-04:00</ApplicationDate>
  <RegistrationDate>20200101</RegistrationDate>
</TradeMark>"#;
        let record = parse(xml).unwrap();
        let dates = record.dates.unwrap();

        assert_eq!(dates.application_date, Some("2018-04-03".to_string()));
        assert_eq!(dates.registration_date, Some("2020-01-01".to_string()));
    }
}
