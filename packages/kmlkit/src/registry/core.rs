//! Bidirectional registry between qualified names and model types.

use std::any::TypeId;
use std::collections::HashMap;

use super::types::{ElementDeclaration, TypeDescriptor};
use crate::element::{Element, KmlElement};
use crate::error::{ModelError, Result};
use crate::model::builtin_declarations;
use crate::name::QualifiedName;

/// Registry mapping model types to element names and back.
///
/// The two maps always form a bijection: every type has exactly one name and
/// every name exactly one type. Entries are never removed or rebound.
///
/// Registration takes `&mut self` and lookups take `&self`, so a registry
/// that is shared between threads after setup needs no locking. Wrap it in
/// an `RwLock` if registration must continue while documents are parsed.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    type_to_name: HashMap<TypeId, QualifiedName>,
    name_to_type: HashMap<QualifiedName, TypeDescriptor>,
}

impl TypeRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in model type.
    ///
    /// # Panics
    /// Panics if the built-in table is inconsistent (two built-ins sharing a
    /// name or a type). This is a bug in the table, not in the input.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_builtins(&builtin_declarations());
        registry
    }

    #[allow(clippy::panic)] // Inconsistent built-in table must abort initialization
    fn register_builtins(&mut self, declarations: &[ElementDeclaration]) {
        for declaration in declarations {
            if let Err(err) = self.register_declaration(declaration) {
                panic!("Inconsistent built-in element table: {err}");
            }
        }
        tracing::debug!(count = self.len(), "Registered built-in element types");
    }

    /// Bind a type to a qualified name.
    ///
    /// The registry keeps its own copy of `name`.
    ///
    /// # Errors
    /// * `AlreadyRegisteredType` if the type already has a name
    /// * `NameCollision` if the name is bound to another type
    ///
    /// Neither map is modified when an error is returned.
    pub fn register(&mut self, descriptor: TypeDescriptor, name: &QualifiedName) -> Result<()> {
        if self.type_to_name.contains_key(&descriptor.type_id()) {
            return Err(ModelError::AlreadyRegisteredType {
                type_name: descriptor.type_name().to_string(),
            });
        }

        if let Some(existing) = self.name_to_type.get(name) {
            return Err(ModelError::NameCollision {
                name: name.to_string(),
                existing: existing.type_name().to_string(),
            });
        }

        tracing::trace!(
            type_name = descriptor.type_name(),
            name = %name,
            "Registering element type"
        );
        self.type_to_name.insert(descriptor.type_id(), name.clone());
        self.name_to_type.insert(name.clone(), descriptor);
        Ok(())
    }

    /// Register a declared type.
    ///
    /// # Errors
    /// Same as [`TypeRegistry::register`], plus `InvalidArgument` if the
    /// declared local name is empty.
    pub fn register_declaration(&mut self, declaration: &ElementDeclaration) -> Result<()> {
        let name = declaration.name()?;
        self.register(declaration.descriptor().clone(), &name)
    }

    /// Register a constructible element type under its declared name.
    ///
    /// # Errors
    /// Same as [`TypeRegistry::register_declaration`].
    pub fn register_element<T: KmlElement>(&mut self) -> Result<()> {
        self.register_declaration(&ElementDeclaration::of::<T>())
    }

    /// Get the name bound to a type.
    #[must_use]
    pub fn find_name(&self, type_id: TypeId) -> Option<&QualifiedName> {
        self.type_to_name.get(&type_id)
    }

    /// Get the name bound to `T`.
    #[must_use]
    pub fn find_name_of<T: 'static>(&self) -> Option<&QualifiedName> {
        self.find_name(TypeId::of::<T>())
    }

    /// Get the name bound to the concrete type of `element`.
    #[must_use]
    pub fn find_name_for(&self, element: &dyn Element) -> Option<&QualifiedName> {
        self.find_name(element.as_any().type_id())
    }

    /// Get the type bound to a name.
    #[must_use]
    pub fn find_type(&self, name: &QualifiedName) -> Option<&TypeDescriptor> {
        self.name_to_type.get(name)
    }

    /// Build a default instance of the type bound to `name`.
    ///
    /// Returns `Ok(None)` if no type is bound to the name; unknown elements
    /// are routine in documents with foreign extensions.
    ///
    /// # Errors
    /// Returns `Instantiation` if the bound type is abstract.
    pub fn create_instance(&self, name: &QualifiedName) -> Result<Option<Box<dyn Element>>> {
        let Some(descriptor) = self.name_to_type.get(name) else {
            return Ok(None);
        };

        descriptor
            .instantiate()
            .map(Some)
            .ok_or_else(|| ModelError::Instantiation {
                type_name: descriptor.type_name().to_string(),
                name: name.to_string(),
            })
    }

    /// Check if a name is bound.
    #[must_use]
    pub fn contains_name(&self, name: &QualifiedName) -> bool {
        self.name_to_type.contains_key(name)
    }

    /// Check if a type is bound.
    #[must_use]
    pub fn contains_type(&self, type_id: TypeId) -> bool {
        self.type_to_name.contains_key(&type_id)
    }

    /// Return all bound names.
    pub fn registered_names(&self) -> impl Iterator<Item = &QualifiedName> {
        self.name_to_type.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.name_to_type.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name_to_type.is_empty()
    }
}
