//! Writer that serializes model instances back to XML text.

use crate::config::WriteOptions;
use crate::element::Element;
use crate::error::{ModelError, Result};
use crate::registry::TypeRegistry;
use crate::xml::{escape_attribute, escape_text};

/// Serializes an element tree using the names bound in a registry.
///
/// Each element's text content is regenerated through
/// [`TextContent::before_serialize`](crate::element::TextContent::before_serialize)
/// before its start tag is written. A default namespace declaration is
/// emitted wherever the namespace differs from the parent's.
pub struct DocumentWriter<'r> {
    registry: &'r TypeRegistry,
    options: WriteOptions,
}

impl<'r> DocumentWriter<'r> {
    #[must_use]
    pub fn new(registry: &'r TypeRegistry, options: WriteOptions) -> Self {
        Self { registry, options }
    }

    #[must_use]
    pub fn options(&self) -> &WriteOptions {
        &self.options
    }

    /// Serialize `element` and its descendants.
    ///
    /// # Errors
    /// Returns `UnregisteredType` if any element's type has no name.
    pub fn write(&self, element: &mut dyn Element) -> Result<String> {
        let mut out = String::new();
        self.write_element(element, "", &mut out)?;
        Ok(out)
    }

    fn write_element(
        &self,
        element: &mut dyn Element,
        parent_namespace: &str,
        out: &mut String,
    ) -> Result<()> {
        if let Some(content) = element.text_content_mut() {
            content.before_serialize(&self.options);
        }

        let name = self
            .registry
            .find_name_for(element)
            .ok_or_else(|| ModelError::UnregisteredType {
                type_name: element.type_name().to_string(),
            })?;
        let namespace = name.namespace_uri();

        out.push('<');
        out.push_str(name.local_name());
        if namespace != parent_namespace {
            out.push_str(" xmlns=\"");
            out.push_str(&escape_attribute(namespace));
            out.push('"');
        }

        let text = element
            .text_content()
            .map(|content| escape_text(content.text()))
            .unwrap_or_default();
        let children = element.children_mut();

        if text.is_empty() && children.is_empty() {
            out.push_str("/>");
            return Ok(());
        }

        out.push('>');
        out.push_str(&text);
        for child in children {
            self.write_element(child, namespace, out)?;
        }
        out.push_str("</");
        out.push_str(name.local_name());
        out.push('>');
        Ok(())
    }
}
