//! Element type registry.
//!
//! This module maps qualified element names to model types and back. The
//! document reader asks the [`ElementFactory`] for an instance per start tag;
//! the writer asks the [`TypeRegistry`] for the name of each element it emits.

mod core;
mod factory;
mod types;

pub use self::core::TypeRegistry;
pub use factory::ElementFactory;
pub use types::{ElementConstructor, ElementDeclaration, TypeDescriptor};
