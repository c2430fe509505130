use crate::convert::Converter;
use crate::identity::IdRegistry;
use crate::name::is_valid_name;
use crate::value::Value;

/// The declaration written before the root element.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;

/// Options controlling the shape of the generated XML.
///
/// Use struct update syntax to change only some options:
///
/// ```rust
/// use dictxml::{Options, Value};
///
/// let options = Options {
///     type_attributes: false,
///     ..Default::default()
/// };
/// let xml = options.render_to_string(&Value::from(vec![1, 2]));
/// assert_eq!(
///     xml,
///     r#"<?xml version="1.0" encoding="UTF-8" ?><root><item>1</item><item>2</item></root>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Write the XML declaration and wrap everything in a root element.
    /// When false, only a fragment is produced. Defaults to true.
    pub root: bool,
    /// Name of the root element. It is used as is and must be a valid
    /// element name. Defaults to `root`.
    pub root_name: String,
    /// Give every generated element an `id` attribute. Defaults to false.
    pub ids: bool,
    /// Give every generated element a `type` attribute. Defaults to true.
    ///
    /// This also changes structure: without type attributes, mappings and
    /// sequences nested directly in a sequence are not wrapped in an `item`
    /// element.
    pub type_attributes: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            root: true,
            root_name: "root".to_string(),
            ids: false,
            type_attributes: true,
        }
    }
}

impl Options {
    /// Render `value` as UTF-8 encoded XML, drawing ids from the global
    /// registry.
    pub fn render(&self, value: &Value) -> Vec<u8> {
        self.render_with_registry(value, IdRegistry::global())
    }

    /// Render `value` as UTF-8 encoded XML, drawing ids from `registry`.
    pub fn render_with_registry(&self, value: &Value, registry: &IdRegistry) -> Vec<u8> {
        self.render_to_string_with_registry(value, registry)
            .into_bytes()
    }

    /// Render `value` as a string, drawing ids from the global registry.
    pub fn render_to_string(&self, value: &Value) -> String {
        self.render_to_string_with_registry(value, IdRegistry::global())
    }

    /// Render `value` as a string, drawing ids from `registry`.
    pub fn render_to_string_with_registry(&self, value: &Value, registry: &IdRegistry) -> String {
        tracing::debug!(
            root = self.root,
            root_name = %self.root_name,
            ids = self.ids,
            type_attributes = self.type_attributes,
            kind = %value.type_tag(),
            "render document"
        );
        let converter = Converter::new(registry, self.ids, self.type_attributes);
        let mut out = String::new();
        if self.root {
            if !is_valid_name(&self.root_name) {
                tracing::warn!(root_name = %self.root_name, "root name is not a valid element name");
            }
            out.push_str(XML_DECLARATION);
            out.push('<');
            out.push_str(&self.root_name);
            out.push('>');
            converter.convert(&mut out, value, &self.root_name);
            out.push_str("</");
            out.push_str(&self.root_name);
            out.push('>');
        } else {
            converter.convert(&mut out, value, "");
        }
        out
    }
}
