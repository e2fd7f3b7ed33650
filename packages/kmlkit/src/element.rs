//! Element capability traits.
//!
//! Every model type implements [`Element`]. Types that can be named in a
//! document also implement [`KmlElement`], which declares their qualified
//! name. Optional behaviour (raw text content, child elements) is exposed
//! through capability queries instead of runtime type inspection.

use std::any::Any;
use std::fmt;

use crate::config::WriteOptions;

/// A node of the object model.
///
/// Implementors get the `Any` plumbing from [`element_any!`](crate::element_any).
pub trait Element: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Rust type name, used in diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Query the raw text capability.
    ///
    /// Default implementation returns `None`.
    fn text_content(&self) -> Option<&dyn TextContent> {
        None
    }

    /// Mutable variant of [`Element::text_content`].
    fn text_content_mut(&mut self) -> Option<&mut dyn TextContent> {
        None
    }

    /// Attach a parsed child element.
    ///
    /// Returns the child back if this element has no slot for it. Default
    /// implementation rejects every child.
    fn add_child(&mut self, child: Box<dyn Element>) -> Result<(), Box<dyn Element>> {
        Err(child)
    }

    /// Child elements in document order.
    fn children(&self) -> Vec<&dyn Element> {
        Vec::new()
    }

    /// Mutable variant of [`Element::children`].
    fn children_mut(&mut self) -> Vec<&mut dyn Element> {
        Vec::new()
    }
}

impl<'a> dyn Element + 'a {
    /// Check whether the concrete type is `T`.
    #[must_use]
    pub fn is<T: Element>(&self) -> bool {
        self.as_any().is::<T>()
    }

    #[must_use]
    pub fn downcast_ref<T: Element>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Element>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// Convert a boxed element into its concrete type.
    ///
    /// # Errors
    /// Returns the element unchanged if it is not a `T`.
    pub fn downcast<T: Element>(self: Box<Self>) -> Result<Box<T>, Box<Self>> {
        if !self.is::<T>() {
            return Err(self);
        }
        #[allow(clippy::expect_used)] // Concrete type checked above
        Ok(self
            .into_any()
            .downcast::<T>()
            .expect("concrete type checked above"))
    }
}

/// Declared element name of a constructible model type.
///
/// This is the registration contract: the registry reads these constants
/// instead of inspecting types at runtime.
pub trait KmlElement: Element + Default {
    /// Local tag name, e.g. `Point`.
    const LOCAL_NAME: &'static str;

    /// Namespace URI of the tag.
    const NAMESPACE: &'static str = crate::config::KML_NAMESPACE;
}

/// Elements whose content is a raw text blob.
///
/// The reader calls [`TextContent::set_text`] with the cumulative text seen
/// so far each time a chunk arrives. The writer calls
/// [`TextContent::before_serialize`] before emitting the start tag and then
/// reads [`TextContent::text`].
pub trait TextContent {
    /// Current text buffer.
    fn text(&self) -> &str;

    /// Replace the buffer with `accumulated` and rebuild the parsed state.
    fn set_text(&mut self, accumulated: &str);

    /// Regenerate the buffer from the parsed state.
    fn before_serialize(&mut self, options: &WriteOptions);
}

/// Implement the `Any` accessors of [`Element`] inside an `impl Element` block.
///
/// ```
/// use kmlkit::element::Element;
///
/// #[derive(Debug, Default)]
/// struct Marker;
///
/// impl Element for Marker {
///     kmlkit::element_any!();
/// }
///
/// let boxed: Box<dyn Element> = Box::new(Marker);
/// assert!(boxed.is::<Marker>());
/// ```
#[macro_export]
macro_rules! element_any {
    () => {
        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
            self
        }

        fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn ::std::any::Any> {
            self
        }
    };
}

/// Declare the qualified name of a model type.
///
/// The namespace defaults to KML 2.2.
#[macro_export]
macro_rules! kml_element {
    ($ty:ty, $local:expr) => {
        $crate::kml_element!($ty, $local, $crate::config::KML_NAMESPACE);
    };
    ($ty:ty, $local:expr, $namespace:expr) => {
        impl $crate::element::KmlElement for $ty {
            const LOCAL_NAME: &'static str = $local;
            const NAMESPACE: &'static str = $namespace;
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Plain;

    impl Element for Plain {
        element_any!();
    }

    #[derive(Debug, Default)]
    struct Other;

    impl Element for Other {
        element_any!();
    }

    kml_element!(Plain, "Plain");

    #[test]
    fn test_default_capabilities() {
        let mut plain = Plain;
        assert!(plain.text_content().is_none());
        assert!(plain.text_content_mut().is_none());
        assert!(plain.children().is_empty());

        let rejected = plain.add_child(Box::new(Other));
        assert!(rejected.is_err());
    }

    #[test]
    fn test_downcast() {
        let boxed: Box<dyn Element> = Box::new(Plain);
        assert!(boxed.is::<Plain>());
        assert!(boxed.downcast_ref::<Other>().is_none());

        let boxed = boxed.downcast::<Other>().unwrap_err();
        assert!(boxed.downcast::<Plain>().is_ok());
    }

    #[test]
    fn test_type_name_is_concrete() {
        let boxed: Box<dyn Element> = Box::new(Plain);
        assert!(boxed.type_name().ends_with("Plain"));
    }

    #[test]
    fn test_declared_name() {
        assert_eq!(Plain::LOCAL_NAME, "Plain");
        assert_eq!(Plain::NAMESPACE, crate::config::KML_NAMESPACE);
    }
}
