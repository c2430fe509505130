//! Proptest support for dictxml
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. This module lets you generate arbitrary nested
//! [`Value`] trees.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dictxml = { version = "0.1", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use chrono::{FixedOffset, NaiveDate, NaiveTime};
use proptest::prelude::*;

use crate::value::{DateLike, Map, Number, Value};

const NAMES: &[&str] = &["a", "b", "item", "key", "person", "_x", "n1", "é"];
const XML_STRING: &str = "[\u{0009}\u{000a}\u{0020}-\u{D7FF}\u{E000}-\u{FFFD}]*";
const NUMBER_LITERAL: &str = "-?[0-9]{1,30}(\\.[0-9]{1,10})?([eE][+-]?[0-9]{1,3})?";

/// Configure value generation
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Generate mapping keys that are not valid element names, such as
    /// `123`, `a b` or arbitrary text
    pub awkward_keys: bool,
}

fn arb_key(config: &Config) -> BoxedStrategy<String> {
    let names = prop::sample::select(NAMES).prop_map(str::to_string);
    if config.awkward_keys {
        prop_oneof![
            3 => names,
            1 => "[0-9]{1,6}",
            1 => "[a-z]{1,4}( [a-z]{1,4}){1,2}",
            1 => XML_STRING,
        ]
        .boxed()
    } else {
        names.boxed()
    }
}

fn arb_date_like() -> impl Strategy<Value = DateLike> {
    (
        (1i32..3000, 1u32..=12, 1u32..=28),
        (0u32..24, 0u32..60, 0u32..60, prop_oneof![Just(0u32), 0u32..1_000_000]),
        -12i32..=14,
    )
        .prop_filter_map("valid date", |((y, mo, d), (h, mi, s, micro), offset)| {
            let date = NaiveDate::from_ymd_opt(y, mo, d)?;
            let time = NaiveTime::from_hms_micro_opt(h, mi, s, micro)?;
            let offset = FixedOffset::east_opt(offset * 3600)?;
            Some((date, time, offset))
        })
        .prop_flat_map(|(date, time, offset)| {
            let datetime = date.and_time(time);
            let zoned = datetime
                .and_local_timezone(offset)
                .single()
                .map_or(DateLike::DateTime(datetime), DateLike::Zoned);
            prop_oneof![
                Just(DateLike::Date(date)),
                Just(DateLike::Time(time)),
                Just(DateLike::DateTime(datetime)),
                Just(zoned),
            ]
        })
}

/// Generate a value without nested values.
pub fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>().prop_map(Value::Float),
        NUMBER_LITERAL.prop_filter_map("numeric literal", |s| Number::parse(&s).map(Value::Number)),
        XML_STRING.prop_map(Value::Text),
        arb_date_like().prop_map(Value::DateLike),
    ]
}

/// Generate an arbitrary value with default configuration.
///
/// Example:
///
/// ```notrust
/// use dictxml::proptest::arb_value;
/// use dictxml::Options;
///
/// proptest! {
///   #[test]
///   fn test_renders(value in arb_value()) {
///     let xml = Options::default().render_to_string(&value);
///     prop_assert!(xml.starts_with("<?xml"));
///   }
/// }
/// ```
pub fn arb_value() -> BoxedStrategy<Value> {
    arb_value_with_config(Config::default())
}

/// Generate an arbitrary value, with configuration.
pub fn arb_value_with_config(config: Config) -> BoxedStrategy<Value> {
    let key = arb_key(&config);
    arb_leaf()
        .prop_recursive(
            6,  // levels deep
            128, // maximum size of 128 nodes
            6,  // up to 6 items per collection
            move |inner| {
                prop_oneof![
                    prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Sequence),
                    prop::collection::vec((key.clone(), inner), 0..6).prop_map(|entries| {
                        // later duplicates replace earlier ones
                        Value::Mapping(entries.into_iter().collect::<Map>())
                    }),
                ]
            },
        )
        .boxed()
}
