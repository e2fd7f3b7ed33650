//! Built-in KML model types.
//!
//! These are thin declarative types: each declares its qualified name with
//! [`kml_element!`](crate::kml_element) and exposes its children through the
//! [`Element`] capability methods. All parsing and writing is driven by the
//! registry and the document reader/writer.

use crate::coordinates::CoordinateCollection;
use crate::element::{Element, TextContent};
use crate::registry::ElementDeclaration;

impl Element for CoordinateCollection {
    crate::element_any!();

    fn text_content(&self) -> Option<&dyn TextContent> {
        Some(self)
    }

    fn text_content_mut(&mut self) -> Option<&mut dyn TextContent> {
        Some(self)
    }
}

crate::kml_element!(CoordinateCollection, "coordinates");

/// Put `child` into an empty coordinates slot.
fn accept_coordinates(
    slot: &mut Option<CoordinateCollection>,
    child: Box<dyn Element>,
) -> Result<(), Box<dyn Element>> {
    if slot.is_some() {
        return Err(child);
    }
    let coordinates = child.downcast::<CoordinateCollection>()?;
    *slot = Some(*coordinates);
    Ok(())
}

macro_rules! coordinate_geometry {
    ($(#[$meta:meta])* $ty:ident, $local:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $ty {
            pub coordinates: Option<CoordinateCollection>,
        }

        impl $ty {
            #[must_use]
            pub fn new(coordinates: CoordinateCollection) -> Self {
                Self {
                    coordinates: Some(coordinates),
                }
            }
        }

        impl Element for $ty {
            crate::element_any!();

            fn add_child(&mut self, child: Box<dyn Element>) -> Result<(), Box<dyn Element>> {
                accept_coordinates(&mut self.coordinates, child)
            }

            fn children(&self) -> Vec<&dyn Element> {
                self.coordinates
                    .iter()
                    .map(|c| c as &dyn Element)
                    .collect()
            }

            fn children_mut(&mut self) -> Vec<&mut dyn Element> {
                self.coordinates
                    .iter_mut()
                    .map(|c| c as &mut dyn Element)
                    .collect()
            }
        }

        crate::kml_element!($ty, $local);
    };
}

coordinate_geometry!(
    /// A single position.
    Point,
    "Point"
);

coordinate_geometry!(
    /// A connected set of line segments.
    LineString,
    "LineString"
);

coordinate_geometry!(
    /// A closed line string, typically a polygon boundary.
    LinearRing,
    "LinearRing"
);

/// Any geometry a placemark can carry.
///
/// This is the abstract geometry group: it has a qualified name but no
/// default instance, so the registry binds it without a factory.
#[derive(Debug)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    LinearRing(LinearRing),
    /// A geometry type registered outside this crate.
    Other(Box<dyn Element>),
}

impl Geometry {
    /// Local name of the abstract geometry group.
    pub const LOCAL_NAME: &'static str = "AbstractGeometryGroup";

    fn from_element(child: Box<dyn Element>) -> Result<Self, Box<dyn Element>> {
        let child = match child.downcast::<Point>() {
            Ok(point) => return Ok(Self::Point(*point)),
            Err(child) => child,
        };
        let child = match child.downcast::<LineString>() {
            Ok(line) => return Ok(Self::LineString(*line)),
            Err(child) => child,
        };
        let child = match child.downcast::<LinearRing>() {
            Ok(ring) => return Ok(Self::LinearRing(*ring)),
            Err(child) => child,
        };
        let not_geometry = is_feature(child.as_ref())
            || child.is::<CoordinateCollection>()
            || child.is::<Kml>()
            || child.is::<Geometry>();
        if not_geometry {
            return Err(child);
        }
        Ok(Self::Other(child))
    }

    fn as_element(&self) -> &dyn Element {
        match self {
            Self::Point(point) => point,
            Self::LineString(line) => line,
            Self::LinearRing(ring) => ring,
            Self::Other(other) => other.as_ref(),
        }
    }

    fn as_element_mut(&mut self) -> &mut dyn Element {
        match self {
            Self::Point(point) => point,
            Self::LineString(line) => line,
            Self::LinearRing(ring) => ring,
            Self::Other(other) => other.as_mut(),
        }
    }
}

// Never instantiated through the registry; see `builtin_declarations`.
impl Element for Geometry {
    crate::element_any!();

    fn children(&self) -> Vec<&dyn Element> {
        vec![self.as_element()]
    }

    fn children_mut(&mut self) -> Vec<&mut dyn Element> {
        vec![self.as_element_mut()]
    }
}

/// A feature with an associated geometry.
#[derive(Debug, Default)]
pub struct Placemark {
    pub geometry: Option<Geometry>,
}

impl Element for Placemark {
    crate::element_any!();

    fn add_child(&mut self, child: Box<dyn Element>) -> Result<(), Box<dyn Element>> {
        if self.geometry.is_some() {
            return Err(child);
        }
        self.geometry = Some(Geometry::from_element(child)?);
        Ok(())
    }

    fn children(&self) -> Vec<&dyn Element> {
        self.geometry.iter().map(Geometry::as_element).collect()
    }

    fn children_mut(&mut self) -> Vec<&mut dyn Element> {
        self.geometry
            .iter_mut()
            .map(Geometry::as_element_mut)
            .collect()
    }
}

crate::kml_element!(Placemark, "Placemark");

fn is_feature(element: &dyn Element) -> bool {
    element.is::<Placemark>() || element.is::<Folder>() || element.is::<Document>()
}

macro_rules! feature_container {
    ($(#[$meta:meta])* $ty:ident, $local:expr) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $ty {
            pub features: Vec<Box<dyn Element>>,
        }

        impl Element for $ty {
            crate::element_any!();

            fn add_child(&mut self, child: Box<dyn Element>) -> Result<(), Box<dyn Element>> {
                if !is_feature(child.as_ref()) {
                    return Err(child);
                }
                self.features.push(child);
                Ok(())
            }

            fn children(&self) -> Vec<&dyn Element> {
                self.features.iter().map(|f| f.as_ref()).collect()
            }

            fn children_mut(&mut self) -> Vec<&mut dyn Element> {
                self.features
                    .iter_mut()
                    .map(|f| f.as_mut() as &mut dyn Element)
                    .collect()
            }
        }

        crate::kml_element!($ty, $local);
    };
}

feature_container!(
    /// A container for features, used to arrange them hierarchically.
    Folder,
    "Folder"
);

feature_container!(
    /// A top-level container for features and shared styles.
    Document,
    "Document"
);

/// Root element of a KML file, holding at most one feature.
#[derive(Debug, Default)]
pub struct Kml {
    pub feature: Option<Box<dyn Element>>,
}

impl Element for Kml {
    crate::element_any!();

    fn add_child(&mut self, child: Box<dyn Element>) -> Result<(), Box<dyn Element>> {
        if self.feature.is_some() || !is_feature(child.as_ref()) {
            return Err(child);
        }
        self.feature = Some(child);
        Ok(())
    }

    fn children(&self) -> Vec<&dyn Element> {
        self.feature.iter().map(|f| f.as_ref()).collect()
    }

    fn children_mut(&mut self) -> Vec<&mut dyn Element> {
        self.feature
            .iter_mut()
            .map(|f| f.as_mut() as &mut dyn Element)
            .collect()
    }
}

crate::kml_element!(Kml, "kml");

/// Declarations of every built-in model type.
#[must_use]
pub fn builtin_declarations() -> Vec<ElementDeclaration> {
    vec![
        ElementDeclaration::of::<CoordinateCollection>(),
        ElementDeclaration::of::<Point>(),
        ElementDeclaration::of::<LineString>(),
        ElementDeclaration::of::<LinearRing>(),
        ElementDeclaration::of::<Placemark>(),
        ElementDeclaration::of::<Folder>(),
        ElementDeclaration::of::<Document>(),
        ElementDeclaration::of::<Kml>(),
        ElementDeclaration::abstract_of::<Geometry>(
            Geometry::LOCAL_NAME,
            crate::config::KML_NAMESPACE,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::GeoPoint;

    fn coordinates(text: &str) -> Box<dyn Element> {
        let mut collection = CoordinateCollection::new();
        collection.set_text(text);
        Box::new(collection)
    }

    #[test]
    fn test_point_accepts_single_coordinates() {
        let mut point = Point::default();
        assert!(point.add_child(coordinates("1,2")).is_ok());
        assert!(point.add_child(coordinates("3,4")).is_err());

        let stored = point.coordinates.as_ref().unwrap();
        assert_eq!(stored.as_slice(), &[GeoPoint::new(2.0, 1.0)]);
        assert_eq!(point.children().len(), 1);
    }

    #[test]
    fn test_geometry_rejects_features() {
        let mut line = LineString::default();
        assert!(line.add_child(Box::new(Placemark::default())).is_err());
        assert!(line.coordinates.is_none());
    }

    #[test]
    fn test_placemark_geometry_slot() {
        let mut placemark = Placemark::default();
        assert!(placemark.add_child(Box::new(Folder::default())).is_err());
        assert!(placemark.add_child(Box::new(LinearRing::default())).is_ok());
        assert!(placemark.add_child(Box::new(Point::default())).is_err());
        assert!(matches!(placemark.geometry, Some(Geometry::LinearRing(_))));
    }

    #[test]
    fn test_placemark_rejects_nested_kml_root() {
        let mut placemark = Placemark::default();
        let rejected = placemark.add_child(Box::new(Kml::default())).unwrap_err();
        assert!(rejected.is::<Kml>());
        assert!(placemark.geometry.is_none());
    }

    #[test]
    fn test_containers_hold_features_only() {
        let mut folder = Folder::default();
        assert!(folder.add_child(Box::new(Placemark::default())).is_ok());
        assert!(folder.add_child(Box::new(Document::default())).is_ok());
        assert!(folder.add_child(Box::new(Point::default())).is_err());
        assert_eq!(folder.children().len(), 2);

        let mut kml = Kml::default();
        assert!(kml.add_child(Box::new(folder)).is_ok());
        assert!(kml.add_child(Box::new(Placemark::default())).is_err());
    }

    #[test]
    fn test_coordinates_expose_text_content() {
        let mut collection = CoordinateCollection::new();
        let element: &mut dyn Element = &mut collection;
        element.text_content_mut().unwrap().set_text("5,6");
        assert_eq!(element.text_content().unwrap().text(), "5,6");
    }

    #[test]
    fn test_builtin_declarations_are_unique() {
        let declarations = builtin_declarations();
        let mut names: Vec<_> = declarations.iter().map(|d| d.local_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), declarations.len());
    }
}
