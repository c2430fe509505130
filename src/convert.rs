use crate::classify::TypeTag;
use crate::identity::IdRegistry;
use crate::name::sanitize;
use crate::render::{render_leaf, write_end_tag, write_start_tag, Attributes, Shape};
use crate::value::{Map, Value};

const ITEM: &str = "item";

/// Walks a value and writes its elements, without any enclosing root.
pub(crate) struct Converter<'r> {
    registry: &'r IdRegistry,
    ids: bool,
    type_attributes: bool,
}

impl<'r> Converter<'r> {
    pub(crate) fn new(registry: &'r IdRegistry, ids: bool, type_attributes: bool) -> Self {
        Self {
            registry,
            ids,
            type_attributes,
        }
    }

    /// Convert a value of any shape. `parent` is the scope of the ids
    /// allocated for its direct children.
    ///
    /// A top-level leaf becomes a single `item` element.
    pub(crate) fn convert(&self, out: &mut String, value: &Value, parent: &str) {
        tracing::trace!(parent, kind = %value.type_tag(), "convert");
        match value.shape() {
            Shape::Leaf(leaf) => {
                render_leaf(out, ITEM, leaf, self.type_attributes, Attributes::new())
            }
            Shape::Mapping(map) => self.convert_dict(out, map, parent),
            Shape::Sequence(items) => self.convert_list(out, items, parent),
        }
    }

    fn convert_dict(&self, out: &mut String, map: &Map, parent: &str) {
        for (key, value) in map {
            tracing::trace!(key, kind = %value.type_tag(), "convert mapping entry");
            let mut attributes = Attributes::new();
            if self.ids {
                attributes.insert("id", self.registry.allocate(parent));
            }
            let name = sanitize(key, &mut attributes);
            match value.shape() {
                Shape::Leaf(leaf) => {
                    render_leaf(out, &name, leaf, self.type_attributes, attributes)
                }
                Shape::Mapping(inner) => {
                    self.add_type(&mut attributes, TypeTag::Dict);
                    write_start_tag(out, &name, &attributes);
                    self.convert_dict(out, inner, &name);
                    write_end_tag(out, &name);
                }
                Shape::Sequence(items) => {
                    self.add_type(&mut attributes, TypeTag::List);
                    write_start_tag(out, &name, &attributes);
                    self.convert_list(out, items, &name);
                    write_end_tag(out, &name);
                }
            }
        }
    }

    /// Items are named `item`. One id is allocated per list and each item's
    /// id is that id suffixed with its 1-based position.
    ///
    /// Nested containers are wrapped in an `item` element only when type
    /// attributes are on. Otherwise their content is spliced into the
    /// list's parent directly.
    fn convert_list(&self, out: &mut String, items: &[Value], parent: &str) {
        let list_id = self.ids.then(|| self.registry.allocate(parent));
        for (index, item) in items.iter().enumerate() {
            tracing::trace!(index, kind = %item.type_tag(), "convert sequence item");
            let mut attributes = Attributes::new();
            if let Some(list_id) = &list_id {
                attributes.insert("id", format!("{}_{}", list_id, index + 1));
            }
            match item.shape() {
                Shape::Leaf(leaf) => {
                    render_leaf(out, ITEM, leaf, self.type_attributes, attributes)
                }
                Shape::Mapping(inner) => {
                    if self.type_attributes {
                        let mut wrapper = Attributes::new();
                        wrapper.insert("type", TypeTag::Dict.to_string());
                        write_start_tag(out, ITEM, &wrapper);
                        self.convert_dict(out, inner, parent);
                        write_end_tag(out, ITEM);
                    } else {
                        self.convert_dict(out, inner, parent);
                    }
                }
                Shape::Sequence(inner) => {
                    if self.type_attributes {
                        let mut wrapper = Attributes::new();
                        wrapper.insert("type", TypeTag::List.to_string());
                        wrapper.extend(attributes);
                        write_start_tag(out, ITEM, &wrapper);
                        self.convert_list(out, inner, ITEM);
                        write_end_tag(out, ITEM);
                    } else {
                        self.convert_list(out, inner, ITEM);
                    }
                }
            }
        }
    }

    fn add_type(&self, attributes: &mut Attributes, tag: TypeTag) {
        if self.type_attributes {
            attributes.insert("type", tag.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn convert(value: &Value, type_attributes: bool) -> String {
        let registry = IdRegistry::new();
        let mut out = String::new();
        Converter::new(&registry, false, type_attributes).convert(&mut out, value, "root");
        out
    }

    fn map(entries: Vec<(&str, Value)>) -> Value {
        Value::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn test_top_level_leaf() {
        assert_eq!(convert(&Value::Int(1), true), r#"<item type="int">1</item>"#);
        assert_eq!(convert(&Value::Null, false), "<item></item>");
    }

    #[test]
    fn test_mapping() {
        let value = map(vec![("a", 1.into()), ("b", vec![1, 2].into())]);
        assert_snapshot!(convert(&value, true), @r#"<a type="int">1</a><b type="list"><item type="int">1</item><item type="int">2</item></b>"#);
        assert_snapshot!(convert(&value, false), @"<a>1</a><b><item>1</item><item>2</item></b>");
    }

    #[test]
    fn test_nested_mapping() {
        let value = map(vec![("outer", map(vec![("inner", "x".into())]))]);
        assert_eq!(
            convert(&value, true),
            r#"<outer type="dict"><inner type="str">x</inner></outer>"#
        );
    }

    #[test]
    fn test_list_of_mappings_wrapped_with_types() {
        let value = Value::Sequence(vec![map(vec![("a", 1.into())]), map(vec![("b", 2.into())])]);
        assert_eq!(
            convert(&value, true),
            r#"<item type="dict"><a type="int">1</a></item><item type="dict"><b type="int">2</b></item>"#
        );
    }

    #[test]
    fn test_list_of_mappings_spliced_without_types() {
        let value = Value::Sequence(vec![map(vec![("a", 1.into())]), map(vec![("b", 2.into())])]);
        assert_eq!(convert(&value, false), "<a>1</a><b>2</b>");
    }

    #[test]
    fn test_nested_lists() {
        let value = Value::Sequence(vec![vec![1].into(), vec![2, 3].into()]);
        assert_eq!(
            convert(&value, true),
            r#"<item type="list"><item type="int">1</item></item><item type="list"><item type="int">2</item><item type="int">3</item></item>"#
        );
        assert_eq!(
            convert(&value, false),
            "<item>1</item><item>2</item><item>3</item>"
        );
    }

    #[test]
    fn test_empty_containers() {
        let value = map(vec![("m", Value::Mapping(Map::new())), ("s", Value::Sequence(vec![]))]);
        assert_eq!(
            convert(&value, true),
            r#"<m type="dict"></m><s type="list"></s>"#
        );
    }

    #[test]
    fn test_ids_in_mapping() {
        let registry = IdRegistry::with_seed(1);
        let twin = IdRegistry::with_seed(1);
        let value = map(vec![("a", 1.into()), ("b", Value::Null)]);
        let mut out = String::new();
        Converter::new(&registry, true, false).convert(&mut out, &value, "doc");
        let first = twin.allocate("doc");
        let second = twin.allocate("doc");
        assert_eq!(
            out,
            format!(r#"<a id="{}">1</a><b id="{}"></b>"#, first, second)
        );
    }

    #[test]
    fn test_ids_in_list() {
        let registry = IdRegistry::with_seed(3);
        let twin = IdRegistry::with_seed(3);
        let value = map(vec![("xs", vec!["p", "q"].into())]);
        let mut out = String::new();
        Converter::new(&registry, true, true).convert(&mut out, &value, "root");
        let entry_id = twin.allocate("root");
        let list_id = twin.allocate("xs");
        assert_eq!(
            out,
            format!(
                r#"<xs id="{entry_id}" type="list"><item id="{list_id}_1" type="str">p</item><item id="{list_id}_2" type="str">q</item></xs>"#
            )
        );
    }

    #[test]
    fn test_nested_list_wrapper_attribute_order() {
        let registry = IdRegistry::with_seed(5);
        let twin = IdRegistry::with_seed(5);
        let value = Value::Sequence(vec![Value::Sequence(vec![])]);
        let mut out = String::new();
        Converter::new(&registry, true, true).convert(&mut out, &value, "root");
        let list_id = twin.allocate("root");
        let inner_id = twin.allocate("item");
        assert_eq!(out, format!(r#"<item type="list" id="{list_id}_1"></item>"#));
        assert!(registry.contains(&inner_id));
    }

    #[test]
    fn test_dict_in_list_keeps_list_parent_scope() {
        let registry = IdRegistry::new();
        let value = map(vec![(
            "people",
            Value::Sequence(vec![map(vec![("name", "ann".into())])]),
        )]);
        let mut out = String::new();
        Converter::new(&registry, true, false).convert(&mut out, &value, "root");
        assert!(out.contains(r#"<name id="people_"#));
    }

    #[test]
    fn test_invalid_key_in_nested_scope() {
        let value = map(vec![("1 2", map(vec![("ok", true.into())]))]);
        assert_eq!(
            convert(&value, true),
            r#"<key name="1 2" type="dict"><ok type="bool">true</ok></key>"#
        );
    }
}
