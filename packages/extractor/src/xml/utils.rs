//! XML utility functions for navigating and extracting data from DOM trees.

use roxmltree::Node;

/// Get the tag name without namespace.
///
/// # Arguments
/// * `node` - XML node
///
/// # Returns
/// Local tag name (e.g., "RegistrationNumber", not "ns1:RegistrationNumber")
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use merkrecht_extractor::xml::local_name;
///
/// let xml = r#"<r xmlns:ns1="urn:tm"><ns1:RegistrationNumber/></r>"#;
/// let doc = Document::parse(xml).unwrap();
/// let node = doc.root_element().first_element_child().unwrap();
/// assert_eq!(local_name(node), "RegistrationNumber");
/// ```
pub fn local_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Get the namespace prefix bound to a node's namespace, if any.
///
/// Elements in no namespace, and elements in a default (unprefixed)
/// namespace, both yield `None` - they read as unprefixed in the source
/// document, which is what candidate matching cares about.
///
/// # Arguments
/// * `node` - XML node
///
/// # Returns
/// The in-scope prefix (e.g., "ns1"), or `None` for unprefixed elements
pub fn in_scope_prefix<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.tag_name()
        .namespace()
        .and_then(|uri| node.lookup_prefix(uri))
        .filter(|prefix| !prefix.is_empty())
}

/// Get the text content of a node, trimmed.
///
/// # Arguments
/// * `node` - Node to get text from
///
/// # Returns
/// Trimmed text content, or empty string if no text
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Collect the full text content of a subtree, in document order.
///
/// Concatenates every text node under `node` (including tails of nested
/// elements), without trimming between pieces. Used where content must be
/// inspected regardless of which child element carries it, e.g. role-marker
/// detection.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use merkrecht_extractor::xml::text_content;
///
/// let xml = r#"<Applicant><Name>Acme</Name> <Role>OWNER</Role></Applicant>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(text_content(doc.root_element()), "Acme OWNER");
/// ```
pub fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
