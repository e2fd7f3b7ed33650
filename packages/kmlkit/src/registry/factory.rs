//! Element factory used by the document reader.

use super::core::TypeRegistry;
use crate::element::Element;
use crate::error::Result;
use crate::name::QualifiedName;

/// Creates fresh model instances from parsed element names.
#[derive(Debug, Clone, Copy)]
pub struct ElementFactory<'r> {
    registry: &'r TypeRegistry,
}

impl<'r> ElementFactory<'r> {
    #[must_use]
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    /// Create a default instance for `name`.
    ///
    /// Returns `Ok(None)` for names with no registered type.
    ///
    /// # Errors
    /// Returns `Instantiation` if the bound type is abstract.
    pub fn create(&self, name: &QualifiedName) -> Result<Option<Box<dyn Element>>> {
        let instance = self.registry.create_instance(name)?;
        if instance.is_none() {
            tracing::debug!(name = %name, "No element type registered");
        }
        Ok(instance)
    }

    /// Create a default instance from a tag's local name and namespace.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `local_name` is empty, or `Instantiation`
    /// if the bound type is abstract.
    pub fn create_from_tag(
        &self,
        local_name: &str,
        namespace_uri: &str,
    ) -> Result<Option<Box<dyn Element>>> {
        self.create(&QualifiedName::new(local_name, namespace_uri)?)
    }
}
