//! Error types for the object model.
//!
//! Absence is never an error here: unknown element names and unregistered
//! types are reported as `None` by the lookup functions. The variants below
//! cover invalid input and registry invariant violations.

use thiserror::Error;

/// Main error type for the kmlkit library.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A required input was empty or out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The type already has a qualified name bound to it.
    #[error("Type {type_name} is already registered")]
    AlreadyRegisteredType { type_name: String },

    /// The qualified name is already bound to a different type.
    #[error("Element name {name} is already bound to {existing}")]
    NameCollision { name: String, existing: String },

    /// The bound type cannot be default-constructed.
    #[error("Cannot instantiate {type_name} for element {name}: no factory registered")]
    Instantiation { type_name: String, name: String },

    /// The writer was handed an element whose type has no qualified name.
    #[error("No element name registered for type {type_name}")]
    UnregisteredType { type_name: String },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

/// Result type alias for kmlkit operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::InvalidArgument("local name must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid argument: local name must not be empty"
        );
    }

    #[test]
    fn test_name_collision_display() {
        let err = ModelError::NameCollision {
            name: "{http://www.opengis.net/kml/2.2}Point".to_string(),
            existing: "kmlkit::model::Point".to_string(),
        };
        assert!(err.to_string().contains("{http://www.opengis.net/kml/2.2}Point"));
        assert!(err.to_string().contains("kmlkit::model::Point"));
    }

    #[test]
    fn test_instantiation_display() {
        let err = ModelError::Instantiation {
            type_name: "Geometry".to_string(),
            name: "AbstractGeometryGroup".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot instantiate Geometry for element AbstractGeometryGroup: no factory registered"
        );
    }
}
