//! kmlkit - Typed object model for KML documents.
//!
//! This crate maps KML element names to Rust model types and converts the
//! text content of `<coordinates>` elements to and from point lists.
//!
//! # Example
//!
//! ```
//! use kmlkit::{DocumentReader, DocumentWriter, GeoPoint, TypeRegistry, WriteOptions};
//! use kmlkit::model::Point;
//!
//! let registry = TypeRegistry::with_builtins();
//! let xml = r#"<Point xmlns="http://www.opengis.net/kml/2.2">
//!     <coordinates>4.89,52.37,2</coordinates>
//! </Point>"#;
//!
//! let mut element = DocumentReader::new(&registry).read_str(xml).unwrap().unwrap();
//! let point = element.downcast_ref::<Point>().unwrap();
//! assert_eq!(
//!     point.coordinates.as_ref().unwrap()[0],
//!     GeoPoint::with_altitude(52.37, 4.89, 2.0)
//! );
//!
//! let writer = DocumentWriter::new(&registry, WriteOptions::default());
//! let text = writer.write(element.as_mut()).unwrap();
//! assert!(text.contains("<coordinates>4.89,52.37,2</coordinates>"));
//! ```
//!
//! # Architecture
//!
//! - [`point`]: Geographic point value type
//! - [`name`]: Qualified element names
//! - [`coordinates`]: Coordinate text codec and collection
//! - [`element`]: Element capability traits and declaration macros
//! - [`model`]: Built-in KML element types
//! - [`registry`]: Type registry and element factory
//! - [`document`]: Reader and writer driving the registry
//! - [`xml`]: XML utilities
//! - [`config`]: Constants and write options
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod coordinates;
pub mod document;
pub mod element;
pub mod error;
pub mod model;
pub mod name;
pub mod point;
pub mod registry;
pub mod xml;

// Re-export commonly used items
pub use config::{WriteOptions, DEFAULT_DELIMITER, GX_NAMESPACE, KML_NAMESPACE};
pub use coordinates::CoordinateCollection;
pub use document::{DocumentReader, DocumentWriter};
pub use element::{Element, KmlElement, TextContent};
pub use error::{ModelError, Result};
pub use name::QualifiedName;
pub use point::GeoPoint;
pub use registry::{ElementFactory, TypeDescriptor, TypeRegistry};
