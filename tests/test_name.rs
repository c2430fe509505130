use dictxml::{to_xml_with_options, Options};
use rstest::rstest;
use serde_json::json;

fn fragment(value: &serde_json::Value) -> String {
    let options = Options {
        root: false,
        type_attributes: false,
        ..Default::default()
    };
    String::from_utf8(to_xml_with_options(value, &options).unwrap()).unwrap()
}

#[rstest]
#[case("valid", "<valid>1</valid>")]
#[case("123", "<n123>1</n123>")]
#[case("a b", "<a_b>1</a_b>")]
#[case("first last name", "<first_last_name>1</first_last_name>")]
#[case("1 2", r#"<key name="1 2">1</key>"#)]
#[case("a:b", r#"<key name="a:b">1</key>"#)]
#[case("", r#"<key name="">1</key>"#)]
#[case("x<y", r#"<key name="x&lt;y">1</key>"#)]
fn test_key_to_element_name(#[case] key: &str, #[case] expected: &str) {
    let mut map = serde_json::Map::new();
    map.insert(key.to_string(), json!(1));
    assert_eq!(fragment(&serde_json::Value::Object(map)), expected);
}

#[test]
fn test_sanitized_key_wraps_nested_containers() {
    assert_eq!(
        fragment(&json!({"2020": {"q 1": [true]}})),
        "<n2020><q_1><item>true</item></q_1></n2020>"
    );
}

#[test]
fn test_name_attribute_before_type() {
    let options = Options {
        root: false,
        ..Default::default()
    };
    let xml = to_xml_with_options(&json!({"?": {"x": 1}}), &options).unwrap();
    assert_eq!(
        xml,
        br#"<key name="?" type="dict"><x type="int">1</x></key>"#
    );
}
