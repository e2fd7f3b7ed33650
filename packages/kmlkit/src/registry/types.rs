//! Types for the element registry.

use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use crate::element::{Element, KmlElement};
use crate::error::Result;
use crate::name::QualifiedName;

/// Constructor producing a default-initialized element.
///
/// Only built by [`TypeDescriptor::with_constructor`], which boxes the
/// value of a typed `fn() -> T`, so the instance is always the described type.
pub type ElementConstructor = Arc<dyn Fn() -> Box<dyn Element> + Send + Sync>;

/// Runtime description of a model type.
///
/// A descriptor without a constructor stands for an abstract type: it can
/// be named but not instantiated.
#[derive(Clone)]
pub struct TypeDescriptor {
    type_id: TypeId,
    type_name: &'static str,
    constructor: Option<ElementConstructor>,
}

impl TypeDescriptor {
    /// Describe a constructible element type.
    #[must_use]
    pub fn of<T: KmlElement>() -> Self {
        Self::with_constructor::<T>(T::default)
    }

    /// Describe `T` using an explicit constructor.
    #[must_use]
    pub fn with_constructor<T: Element>(constructor: fn() -> T) -> Self {
        let boxed: ElementConstructor =
            Arc::new(move || Box::new(constructor()) as Box<dyn Element>);
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            constructor: Some(boxed),
        }
    }

    /// Describe an element type that cannot be instantiated.
    #[must_use]
    pub fn abstract_of<T: Element>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            constructor: None,
        }
    }

    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.constructor.is_none()
    }

    /// Build a new default instance, or `None` for abstract types.
    #[must_use]
    pub fn instantiate(&self) -> Option<Box<dyn Element>> {
        self.constructor.as_ref().map(|constructor| constructor())
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type_name", &self.type_name)
            .field("is_abstract", &self.is_abstract())
            .finish()
    }
}

/// A type together with its declared element name.
#[derive(Debug, Clone)]
pub struct ElementDeclaration {
    descriptor: TypeDescriptor,
    local_name: &'static str,
    namespace: &'static str,
}

impl ElementDeclaration {
    /// Read the declaration of a constructible element type.
    #[must_use]
    pub fn of<T: KmlElement>() -> Self {
        Self {
            descriptor: TypeDescriptor::of::<T>(),
            local_name: T::LOCAL_NAME,
            namespace: T::NAMESPACE,
        }
    }

    /// Declare an abstract type under the given name.
    #[must_use]
    pub fn abstract_of<T: Element>(local_name: &'static str, namespace: &'static str) -> Self {
        Self {
            descriptor: TypeDescriptor::abstract_of::<T>(),
            local_name,
            namespace,
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    #[must_use]
    pub fn local_name(&self) -> &'static str {
        self.local_name
    }

    #[must_use]
    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Build the qualified name.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the declared local name is empty.
    pub fn name(&self) -> Result<QualifiedName> {
        QualifiedName::new(self.local_name, self.namespace)
    }
}
