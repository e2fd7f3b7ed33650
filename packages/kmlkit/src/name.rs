//! Qualified element names.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::config::KML_NAMESPACE;
use crate::error::{ModelError, Result};

/// An element identity: local name plus namespace URI.
///
/// The prefix is cosmetic. Equality and hashing only consider the local
/// name and the namespace, so `kml:Point` and `Point` in the default KML
/// namespace are the same name.
#[derive(Debug, Clone)]
pub struct QualifiedName {
    local_name: String,
    namespace_uri: String,
    prefix: Option<String>,
}

impl QualifiedName {
    /// Create a qualified name.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `local_name` is empty.
    pub fn new(local_name: impl Into<String>, namespace_uri: impl Into<String>) -> Result<Self> {
        let local_name = local_name.into();
        if local_name.is_empty() {
            return Err(ModelError::InvalidArgument(
                "local name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            local_name,
            namespace_uri: namespace_uri.into(),
            prefix: None,
        })
    }

    /// Create a name in the KML 2.2 namespace.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `local_name` is empty.
    pub fn kml(local_name: impl Into<String>) -> Result<Self> {
        Self::new(local_name, KML_NAMESPACE)
    }

    /// Set the display prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    #[must_use]
    pub fn namespace_uri(&self) -> &str {
        &self.namespace_uri
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}

impl PartialEq for QualifiedName {
    fn eq(&self, other: &Self) -> bool {
        self.local_name == other.local_name && self.namespace_uri == other.namespace_uri
    }
}

impl Eq for QualifiedName {}

impl Hash for QualifiedName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.local_name.hash(state);
        self.namespace_uri.hash(state);
    }
}

/// Clark notation: `{namespace}local`, or just `local` without a namespace.
impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace_uri.is_empty() {
            write!(f, "{}", self.local_name)
        } else {
            write!(f, "{{{}}}{}", self.namespace_uri, self.local_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_local_name_rejected() {
        let result = QualifiedName::new("", KML_NAMESPACE);
        assert!(matches!(result, Err(ModelError::InvalidArgument(_))));
    }

    #[test]
    fn test_empty_namespace_allowed() {
        let name = QualifiedName::new("coordinates", "").unwrap();
        assert_eq!(name.namespace_uri(), "");
        assert_eq!(name.to_string(), "coordinates");
    }

    #[test]
    fn test_prefix_ignored_for_equality() {
        let plain = QualifiedName::kml("Point").unwrap();
        let prefixed = QualifiedName::kml("Point").unwrap().with_prefix("kml");
        assert_eq!(plain, prefixed);

        let mut set = HashSet::new();
        set.insert(plain);
        assert!(set.contains(&prefixed));
        assert_eq!(prefixed.prefix(), Some("kml"));
    }

    #[test]
    fn test_namespace_distinguishes_names() {
        let kml = QualifiedName::kml("Track").unwrap();
        let gx = QualifiedName::new("Track", crate::config::GX_NAMESPACE).unwrap();
        assert_ne!(kml, gx);
    }

    #[test]
    fn test_display_clark_notation() {
        let name = QualifiedName::kml("Point").unwrap();
        assert_eq!(name.to_string(), "{http://www.opengis.net/kml/2.2}Point");
    }
}
