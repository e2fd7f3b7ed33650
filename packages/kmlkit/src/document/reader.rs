//! Reader that builds model instances from an XML tree.

use roxmltree::{Document, Node};

use crate::element::Element;
use crate::error::Result;
use crate::registry::{ElementFactory, TypeRegistry};
use crate::xml::tag_parts;

/// Walks an XML tree and instantiates a model element per start tag.
///
/// Elements with no registered type are skipped together with their
/// subtree. Text content is delivered to elements with the
/// [`TextContent`](crate::element::TextContent) capability as a cumulative
/// buffer, once per text chunk.
pub struct DocumentReader<'r> {
    factory: ElementFactory<'r>,
}

impl<'r> DocumentReader<'r> {
    /// Create a reader backed by the given registry.
    #[must_use]
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self {
            factory: ElementFactory::new(registry),
        }
    }

    /// Parse XML text and read its root element.
    ///
    /// Returns `Ok(None)` if the root element has no registered type.
    ///
    /// # Errors
    /// Returns `XmlParse` for malformed XML and `Instantiation` if a bound
    /// type cannot be constructed.
    pub fn read_str(&self, xml: &str) -> Result<Option<Box<dyn Element>>> {
        let doc = Document::parse(xml)?;
        self.read_node(doc.root_element())
    }

    /// Read an element and its descendants.
    ///
    /// # Errors
    /// Returns `Instantiation` if a bound type cannot be constructed.
    pub fn read_node(&self, node: Node<'_, '_>) -> Result<Option<Box<dyn Element>>> {
        let (local_name, namespace_uri) = tag_parts(node);

        let Some(mut element) = self.factory.create_from_tag(local_name, namespace_uri)? else {
            tracing::debug!(
                tag = local_name,
                namespace = namespace_uri,
                "Skipping unknown element"
            );
            return Ok(None);
        };

        let mut text = String::new();
        for child in node.children() {
            if child.is_element() {
                let Some(child_element) = self.read_node(child)? else {
                    continue;
                };
                if let Err(rejected) = element.add_child(child_element) {
                    tracing::warn!(
                        parent = local_name,
                        child = rejected.type_name(),
                        "Element does not accept child, dropping it"
                    );
                }
            } else if child.is_text() {
                let (Some(content), Some(chunk)) = (element.text_content_mut(), child.text())
                else {
                    continue;
                };
                text.push_str(chunk);
                content.set_text(&text);
            }
        }

        Ok(Some(element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::CoordinateCollection;
    use crate::error::ModelError;
    use crate::model::{Geometry, Placemark, Point};
    use crate::point::GeoPoint;

    const KML: &str = "http://www.opengis.net/kml/2.2";

    #[test]
    fn test_read_point() {
        let registry = TypeRegistry::with_builtins();
        let reader = DocumentReader::new(&registry);
        let xml = format!(
            r#"<Point xmlns="{KML}"><coordinates>1,2,3</coordinates></Point>"#
        );

        let element = reader.read_str(&xml).unwrap().unwrap();
        let point = element.downcast_ref::<Point>().unwrap();
        assert_eq!(
            point.coordinates.as_ref().unwrap().as_slice(),
            &[GeoPoint::with_altitude(2.0, 1.0, 3.0)]
        );
    }

    #[test]
    fn test_read_skips_unknown_subtree() {
        let registry = TypeRegistry::with_builtins();
        let reader = DocumentReader::new(&registry);
        let xml = format!(
            r#"<Placemark xmlns="{KML}">
                <ExtendedData><Point><coordinates>9,9</coordinates></Point></ExtendedData>
                <Point><coordinates>1,2</coordinates></Point>
            </Placemark>"#
        );

        let element = reader.read_str(&xml).unwrap().unwrap();
        let placemark = element.downcast_ref::<Placemark>().unwrap();
        let Some(Geometry::Point(point)) = &placemark.geometry else {
            panic!("expected point geometry");
        };
        assert_eq!(
            point.coordinates.as_ref().unwrap().as_slice(),
            &[GeoPoint::new(2.0, 1.0)]
        );
    }

    #[test]
    fn test_read_unknown_root() {
        let registry = TypeRegistry::with_builtins();
        let reader = DocumentReader::new(&registry);
        assert!(reader.read_str("<Point/>").unwrap().is_none());
    }

    #[test]
    fn test_read_text_chunks_accumulate() {
        let registry = TypeRegistry::with_builtins();
        let reader = DocumentReader::new(&registry);
        let xml = format!(
            r#"<coordinates xmlns="{KML}">1,2 <!-- split -->3,4<![CDATA[ 5,6]]></coordinates>"#
        );

        let element = reader.read_str(&xml).unwrap().unwrap();
        let collection = element.downcast_ref::<CoordinateCollection>().unwrap();
        assert_eq!(
            collection.as_slice(),
            &[
                GeoPoint::new(2.0, 1.0),
                GeoPoint::new(4.0, 3.0),
                GeoPoint::new(6.0, 5.0)
            ]
        );
    }

    #[test]
    fn test_read_abstract_element_fails() {
        let registry = TypeRegistry::with_builtins();
        let reader = DocumentReader::new(&registry);
        let xml = format!(r#"<AbstractGeometryGroup xmlns="{KML}"/>"#);
        assert!(matches!(
            reader.read_str(&xml),
            Err(ModelError::Instantiation { .. })
        ));
    }

    #[test]
    fn test_read_malformed_xml() {
        let registry = TypeRegistry::with_builtins();
        let reader = DocumentReader::new(&registry);
        assert!(matches!(
            reader.read_str("<Point>"),
            Err(ModelError::XmlParse(_))
        ));
    }
}
