//! XML helpers shared by the document reader and writer.

use roxmltree::Node;

/// Get the local tag name and namespace URI of an element.
///
/// Elements outside any namespace report an empty namespace URI.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use kmlkit::xml::tag_parts;
///
/// let xml = r#"<kml xmlns="http://www.opengis.net/kml/2.2"><Point/></kml>"#;
/// let doc = Document::parse(xml).unwrap();
/// let point = doc.root_element().first_element_child().unwrap();
/// assert_eq!(tag_parts(point), ("Point", "http://www.opengis.net/kml/2.2"));
/// ```
pub fn tag_parts<'a>(node: Node<'a, '_>) -> (&'a str, &'a str) {
    let tag = node.tag_name();
    (tag.name(), tag.namespace().unwrap_or(""))
}

/// Escape character data for element content.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape a double-quoted attribute value.
pub fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
