use ahash::HashSet;
use dictxml::{IdRegistry, Options, Value};
use serde_json::json;

fn ids_in(xml: &str) -> Vec<String> {
    xml.split(" id=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}

fn value(json: serde_json::Value) -> Value {
    dictxml::to_value(&json).unwrap()
}

#[test]
fn test_every_element_gets_an_id() {
    let options = Options {
        ids: true,
        type_attributes: false,
        ..Default::default()
    };
    let registry = IdRegistry::new();
    let xml = options.render_to_string_with_registry(&value(json!({"a": 1, "b": {"c": 2}})), &registry);
    let ids = ids_in(&xml);
    assert_eq!(ids.len(), 3);
    assert!(ids[0].starts_with("root_"));
    assert!(ids[1].starts_with("root_"));
    assert!(ids[2].starts_with("b_"));
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_list_items_share_list_id() {
    let options = Options {
        ids: true,
        ..Default::default()
    };
    let registry = IdRegistry::new();
    let xml = options.render_to_string_with_registry(&value(json!({"xs": [10, 20, 30]})), &registry);
    let ids = ids_in(&xml);
    assert_eq!(ids.len(), 4);
    let list_id = ids[1].strip_suffix("_1").unwrap();
    assert!(list_id.starts_with("xs_"));
    assert_eq!(ids[2], format!("{}_2", list_id));
    assert_eq!(ids[3], format!("{}_3", list_id));
    // one id per mapping entry plus one per list
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_ids_unique_within_document() {
    let options = Options {
        ids: true,
        ..Default::default()
    };
    let registry = IdRegistry::new();
    let items: Vec<serde_json::Value> = (0..200).map(|i| json!({"n": i, "xs": [i, [i]]})).collect();
    let xml = options.render_to_string_with_registry(&value(json!({ "all": items })), &registry);
    let ids = ids_in(&xml);
    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn test_ids_never_reused_across_documents() {
    let options = Options {
        ids: true,
        ..Default::default()
    };
    let doc = value(json!({"a": [1, 2], "b": {"c": null}}));
    let first = ids_in(&options.render_to_string(&doc));
    let second = ids_in(&options.render_to_string(&doc));
    for id in &first {
        assert!(!second.contains(id));
        // list items carry `<list id>_<n>`; only the list id is issued
        let issued = match id.rsplit_once('_') {
            Some((list_id, n)) if n.len() < 6 => list_id,
            _ => id.as_str(),
        };
        assert!(IdRegistry::global().contains(issued), "{}", issued);
    }
}

#[test]
fn test_reserved_ids_are_avoided() {
    let options = Options {
        ids: true,
        ..Default::default()
    };
    let doc = value(json!({"a": 1}));
    let expected = options.render_to_string_with_registry(&doc, &IdRegistry::with_seed(9));
    let taken = ids_in(&expected).remove(0);

    let registry = IdRegistry::with_seed(9);
    registry.reserve(taken.clone());
    let xml = options.render_to_string_with_registry(&doc, &registry);
    assert!(!ids_in(&xml).contains(&taken));
}

#[test]
fn test_no_ids_by_default() {
    let xml = dictxml::to_string(&json!({"a": [1, {"b": 2}]})).unwrap();
    assert!(!xml.contains(" id=\""));
}
