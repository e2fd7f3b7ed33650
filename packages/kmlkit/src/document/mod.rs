//! Document reader and writer.
//!
//! These drive the registry and the coordinate codec from a parsed XML tree
//! and back to text. Only element content is handled; attributes are neither
//! read nor written.

mod reader;
mod writer;

pub use reader::DocumentReader;
pub use writer::DocumentWriter;

use crate::coordinates::CoordinateCollection;
use crate::element::Element;

/// Collect every coordinate collection in the tree, in document order.
pub fn coordinate_collections(root: &dyn Element) -> Vec<&CoordinateCollection> {
    let mut found = Vec::new();
    collect_coordinates(root, &mut found);
    found
}

fn collect_coordinates<'a>(element: &'a dyn Element, found: &mut Vec<&'a CoordinateCollection>) {
    if let Some(collection) = element.downcast_ref::<CoordinateCollection>() {
        found.push(collection);
    }
    for child in element.children() {
        collect_coordinates(child, found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Folder, LinearRing, Placemark, Point};
    use crate::point::GeoPoint;

    #[test]
    fn test_coordinate_collections_document_order() {
        let mut folder = Folder::default();
        for (placemark, lat) in [(Placemark::default(), 1.0), (Placemark::default(), 2.0)] {
            let mut placemark = placemark;
            let point = Point::new(CoordinateCollection::from_points([GeoPoint::new(lat, 0.0)]));
            placemark.add_child(Box::new(point)).unwrap();
            folder.add_child(Box::new(placemark)).unwrap();
        }
        let mut ring_placemark = Placemark::default();
        ring_placemark
            .add_child(Box::new(LinearRing::default()))
            .unwrap();
        folder.add_child(Box::new(ring_placemark)).unwrap();

        let found = coordinate_collections(&folder);
        let latitudes: Vec<f64> = found.iter().map(|c| c[0].latitude()).collect();
        assert_eq!(latitudes, vec![1.0, 2.0]);
    }
}
