//! Filing basis extraction.
//!
//! The "current basis" and "original basis" sub-containers carry distinct
//! tags in the source schema - they are different concepts, not namespace
//! variants of one. An absent sub-container stays `None`, preserving the
//! difference between "basis not stated" and "basis stated as not
//! applicable" (all flags false).

use roxmltree::Node;

use crate::selector::{resolve_element, resolve_flag, FieldId};
use crate::types::{BasisFlags, FilingBasis};

/// Extract the filing basis.
///
/// Returns `None` when no filing-basis container is present at all.
#[must_use]
pub fn extract_filing_basis(context: Node<'_, '_>) -> Option<FilingBasis> {
    let node = resolve_element(context, FieldId::FilingBasisContainer)?;

    Some(FilingBasis {
        current: resolve_element(node, FieldId::CurrentBasisContainer).map(extract_basis_flags),
        original: resolve_element(node, FieldId::OriginalBasisContainer).map(extract_basis_flags),
    })
}

/// Extract the three indicators of one basis sub-container.
///
/// Each flag is true only for an exact truthy-literal match; missing
/// indicators default to false.
fn extract_basis_flags(node: Node<'_, '_>) -> BasisFlags {
    BasisFlags {
        use_basis: resolve_flag(node, FieldId::BasisUseIndicator),
        intent_to_use: resolve_flag(node, FieldId::BasisIntentToUseIndicator),
        foreign: resolve_flag(node, FieldId::BasisForeignIndicator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roxmltree::Document;

    const SAMPLE_BASIS: &str = r#"<TradeMark>
  <FilingBasis>
    <CurrentBasis>
      <BasisUseIndicator>true</BasisUseIndicator>
      <BasisIntentToUseIndicator>false</BasisIntentToUseIndicator>
    </CurrentBasis>
    <OriginalBasis>
      <BasisIntentToUseIndicator>true</BasisIntentToUseIndicator>
      <BasisForeignApplicationIndicator>true</BasisForeignApplicationIndicator>
    </OriginalBasis>
  </FilingBasis>
</TradeMark>"#;

    #[test]
    fn test_extract_filing_basis_both_halves() {
        let doc = Document::parse(SAMPLE_BASIS).unwrap();
        let basis = extract_filing_basis(doc.root_element()).unwrap();

        assert_eq!(
            basis.current,
            Some(BasisFlags {
                use_basis: true,
                intent_to_use: false,
                foreign: false,
            })
        );
        assert_eq!(
            basis.original,
            Some(BasisFlags {
                use_basis: false,
                intent_to_use: true,
                foreign: true,
            })
        );
    }

    #[test]
    fn test_extract_filing_basis_only_current() {
        let xml = r#"<TradeMark><FilingBasis>
            <CurrentBasis><BasisUseIndicator>true</BasisUseIndicator></CurrentBasis>
        </FilingBasis></TradeMark>"#;
        let doc = Document::parse(xml).unwrap();
        let basis = extract_filing_basis(doc.root_element()).unwrap();

        assert!(basis.current.is_some());
        // Not stated is None, not an all-false record.
        assert_eq!(basis.original, None);
    }

    #[test]
    fn test_extract_filing_basis_absent_container() {
        let doc = Document::parse("<TradeMark/>").unwrap();
        assert_eq!(extract_filing_basis(doc.root_element()), None);
    }

    #[test]
    fn test_basis_flags_require_exact_truthy_literal() {
        let xml = r#"<TradeMark><FilingBasis><CurrentBasis>
            <BasisUseIndicator>TRUE</BasisUseIndicator>
            <BasisIntentToUseIndicator>yes</BasisIntentToUseIndicator>
            <BasisForeignApplicationIndicator>1</BasisForeignApplicationIndicator>
        </CurrentBasis></FilingBasis></TradeMark>"#;
        let doc = Document::parse(xml).unwrap();
        let basis = extract_filing_basis(doc.root_element()).unwrap();

        assert_eq!(basis.current, Some(BasisFlags::default()));
    }

    #[test]
    fn test_basis_empty_sub_container_is_all_false() {
        let xml = r#"<TradeMark><FilingBasis><CurrentBasis/></FilingBasis></TradeMark>"#;
        let doc = Document::parse(xml).unwrap();
        let basis = extract_filing_basis(doc.root_element()).unwrap();

        assert_eq!(basis.current, Some(BasisFlags::default()));
        assert_eq!(basis.original, None);
    }
}
