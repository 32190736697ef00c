//! Mark descriptor and goods/services extraction.

use roxmltree::Node;

use crate::config::{NICE_CLASSIFICATION_KIND, PRIMARY_CLASSIFICATION_KIND};
use crate::selector::{resolve, resolve_all, resolve_element, resolve_flag, FieldId};
use crate::types::{GoodsServiceEntry, MarkDescriptor};

/// Extract the mark's textual/visual descriptor.
///
/// The standard-character indicator is true only when the source value is
/// exactly the truthy literal.
#[must_use]
pub fn extract_mark(context: Node<'_, '_>) -> Option<MarkDescriptor> {
    let node = resolve_element(context, FieldId::MarkContainer)?;

    Some(MarkDescriptor {
        text: resolve(node, FieldId::MarkText),
        is_standard_character: resolve_flag(node, FieldId::StandardCharacterIndicator),
        description: resolve(node, FieldId::MarkDescription),
        disclaimer: resolve(node, FieldId::MarkDisclaimer),
    })
}

/// Extract every goods/services entry, in document order.
///
/// One output entry per source container, always: a container with no
/// locatable classification still yields an entry with absent fields, so
/// the output length mirrors the source container count exactly.
#[must_use]
pub fn extract_goods_services(context: Node<'_, '_>) -> Vec<GoodsServiceEntry> {
    resolve_all(context, FieldId::GoodsServicesContainer)
        .into_iter()
        .map(extract_entry)
        .collect()
}

/// Extract one goods/services entry from its container.
///
/// The class number comes from the classification marked primary (else the
/// first); the Nice class from the classification marked as the Nice
/// variant, when one exists.
fn extract_entry(container: Node<'_, '_>) -> GoodsServiceEntry {
    let classifications = resolve_all(container, FieldId::ClassificationContainer);

    let primary = classifications
        .iter()
        .copied()
        .find(|node| classification_kind(*node).as_deref() == Some(PRIMARY_CLASSIFICATION_KIND))
        .or_else(|| classifications.first().copied());

    let nice = classifications
        .iter()
        .copied()
        .find(|node| classification_kind(*node).as_deref() == Some(NICE_CLASSIFICATION_KIND));

    GoodsServiceEntry {
        class_number: primary.and_then(|node| resolve(node, FieldId::ClassNumber)),
        nice_class: nice.and_then(|node| resolve(node, FieldId::ClassNumber)),
        description: resolve(container, FieldId::GoodsServicesDescription),
    }
}

fn classification_kind(node: Node<'_, '_>) -> Option<String> {
    resolve(node, FieldId::ClassificationKindCode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roxmltree::Document;

    const SAMPLE_MARK: &str = r#"<TradeMark>
  <MarkRepresentation>
    <MarkVerbalElementText>ACME ROCKETS</MarkVerbalElementText>
    <MarkStandardCharacterIndicator>true</MarkStandardCharacterIndicator>
    <MarkDescriptionText>The wording "ACME ROCKETS" in stylized font</MarkDescriptionText>
    <MarkDisclaimerText>No claim is made to "ROCKETS"</MarkDisclaimerText>
  </MarkRepresentation>
</TradeMark>"#;

    #[test]
    fn test_extract_mark_full() {
        let doc = Document::parse(SAMPLE_MARK).unwrap();
        let mark = extract_mark(doc.root_element()).unwrap();

        assert_eq!(mark.text, Some("ACME ROCKETS".to_string()));
        assert!(mark.is_standard_character);
        assert_eq!(
            mark.description,
            Some(r#"The wording "ACME ROCKETS" in stylized font"#.to_string())
        );
        assert_eq!(
            mark.disclaimer,
            Some(r#"No claim is made to "ROCKETS""#.to_string())
        );
    }

    #[test]
    fn test_mark_standard_character_defaults_false() {
        let xml = r#"<TradeMark><MarkRepresentation>
            <MarkVerbalElementText>ACME</MarkVerbalElementText>
        </MarkRepresentation></TradeMark>"#;
        let doc = Document::parse(xml).unwrap();
        assert!(!extract_mark(doc.root_element()).unwrap().is_standard_character);

        // "True" is not the truthy literal.
        let xml = r#"<TradeMark><MarkRepresentation>
            <MarkStandardCharacterIndicator>True</MarkStandardCharacterIndicator>
        </MarkRepresentation></TradeMark>"#;
        let doc = Document::parse(xml).unwrap();
        assert!(!extract_mark(doc.root_element()).unwrap().is_standard_character);
    }

    #[test]
    fn test_mark_absent_container() {
        let doc = Document::parse("<TradeMark/>").unwrap();
        assert_eq!(extract_mark(doc.root_element()), None);
    }

    #[test]
    fn test_goods_services_primary_classification_wins() {
        let xml = r#"<TradeMark>
  <GoodsServices>
    <GoodsServicesClassification>
      <ClassificationKindCode>Domestic</ClassificationKindCode>
      <ClassNumber>200</ClassNumber>
    </GoodsServicesClassification>
    <GoodsServicesClassification>
      <ClassificationKindCode>Primary</ClassificationKindCode>
      <ClassNumber>025</ClassNumber>
    </GoodsServicesClassification>
    <GoodsServicesDescriptionText>Clothing, namely t-shirts</GoodsServicesDescriptionText>
  </GoodsServices>
</TradeMark>"#;
        let doc = Document::parse(xml).unwrap();
        let entries = extract_goods_services(doc.root_element());

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].class_number, Some("025".to_string()));
        assert_eq!(entries[0].nice_class, None);
        assert_eq!(
            entries[0].description,
            Some("Clothing, namely t-shirts".to_string())
        );
    }

    #[test]
    fn test_goods_services_first_classification_when_none_primary() {
        let xml = r#"<TradeMark>
  <GoodsServices>
    <GoodsServicesClassification><ClassNumber>042</ClassNumber></GoodsServicesClassification>
    <GoodsServicesClassification><ClassNumber>009</ClassNumber></GoodsServicesClassification>
  </GoodsServices>
</TradeMark>"#;
        let doc = Document::parse(xml).unwrap();
        let entries = extract_goods_services(doc.root_element());

        assert_eq!(entries[0].class_number, Some("042".to_string()));
    }

    #[test]
    fn test_goods_services_nice_class_from_nice_variant() {
        let xml = r#"<TradeMark>
  <GoodsServices>
    <GoodsServicesClassification>
      <ClassificationKindCode>Primary</ClassificationKindCode>
      <ClassNumber>200</ClassNumber>
    </GoodsServicesClassification>
    <GoodsServicesClassification>
      <ClassificationKindCode>Nice</ClassificationKindCode>
      <ClassNumber>25</ClassNumber>
    </GoodsServicesClassification>
  </GoodsServices>
</TradeMark>"#;
        let doc = Document::parse(xml).unwrap();
        let entries = extract_goods_services(doc.root_element());

        assert_eq!(entries[0].class_number, Some("200".to_string()));
        assert_eq!(entries[0].nice_class, Some("25".to_string()));
    }

    #[test]
    fn test_goods_services_count_mirrors_containers() {
        // A container with no classification still produces an entry.
        let xml = r#"<TradeMark>
  <GoodsServices>
    <GoodsServicesClassification><ClassNumber>030</ClassNumber></GoodsServicesClassification>
  </GoodsServices>
  <GoodsServices>
    <GoodsServicesDescriptionText>Unclassified services</GoodsServicesDescriptionText>
  </GoodsServices>
  <GoodsServices/>
</TradeMark>"#;
        let doc = Document::parse(xml).unwrap();
        let entries = extract_goods_services(doc.root_element());

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].class_number, Some("030".to_string()));
        assert_eq!(entries[1].class_number, None);
        assert_eq!(
            entries[1].description,
            Some("Unclassified services".to_string())
        );
        assert_eq!(entries[2], GoodsServiceEntry::default());
    }

    #[test]
    fn test_goods_services_preserve_order_and_duplicates() {
        let xml = r#"<TradeMark>
  <GoodsServices><GoodsServicesClassification><ClassNumber>9</ClassNumber></GoodsServicesClassification></GoodsServices>
  <GoodsServices><GoodsServicesClassification><ClassNumber>9</ClassNumber></GoodsServicesClassification></GoodsServices>
</TradeMark>"#;
        let doc = Document::parse(xml).unwrap();
        let entries = extract_goods_services(doc.root_element());

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], entries[1]);
    }
}
