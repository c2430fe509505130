use std::fmt::{Display, Formatter};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use indexmap::IndexMap;

/// A mapping from key to value. Keys are visited in insertion order.
pub type Map = IndexMap<String, Value>;

/// A dynamically-typed value that can be converted into XML.
///
/// Build one directly, through the many `From` implementations, or from any
/// [`serde::Serialize`] type with [`to_value`](crate::to_value).
///
/// ```rust
/// use dictxml::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("a".to_string(), 1.into());
/// map.insert("b".to_string(), vec![1, 2].into());
/// let value = Value::from(map);
/// assert!(value.is_container());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value. Rendered as an element without content.
    Null,
    /// A boolean, rendered as `true` or `false`.
    Bool(bool),
    /// A native integer.
    Int(i64),
    /// A native float.
    Float(f64),
    /// A numeric literal that does not fit [`Value::Int`] or
    /// [`Value::Float`], such as a large unsigned integer.
    Number(Number),
    /// Text. It is escaped when rendered.
    ///
    /// Characters that XML 1.0 forbids, such as most C0 control characters,
    /// cannot be escaped and must not appear in text that is to be parsed
    /// again.
    Text(String),
    /// A date, time or timestamp, rendered in ISO-8601 form.
    DateLike(DateLike),
    /// Key-value pairs.
    Mapping(Map),
    /// An ordered sequence of values; elements may have different kinds.
    Sequence(Vec<Value>),
}

impl Value {
    /// Returns true for mappings and sequences.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Mapping(_) | Value::Sequence(_))
    }
}

/// A numeric literal such as `18446744073709551615` or `-1.5e300`.
///
/// The literal is checked on construction, so it can be written into XML
/// without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
    /// Create a number from a literal.
    ///
    /// Accepts an optional sign, digits with an optional fractional part,
    /// and an optional exponent. Returns `None` for anything else.
    ///
    /// ```rust
    /// use dictxml::Number;
    ///
    /// assert!(Number::parse("-12.5e3").is_some());
    /// assert!(Number::parse("12<").is_none());
    /// ```
    pub fn parse(literal: &str) -> Option<Self> {
        is_numeric_literal(literal).then(|| Number(literal.to_string()))
    }

    /// The literal.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_numeric_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut pos = 0;
    let digits = |pos: &mut usize| {
        let start = *pos;
        while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
            *pos += 1;
        }
        *pos - start
    };
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }
    let mut mantissa = digits(&mut pos);
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        mantissa += digits(&mut pos);
    }
    if mantissa == 0 {
        return false;
    }
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        if digits(&mut pos) == 0 {
            return false;
        }
    }
    pos == bytes.len()
}

/// A date or time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateLike {
    /// A calendar date.
    Date(NaiveDate),
    /// A time of day.
    Time(NaiveTime),
    /// A date and time without offset.
    DateTime(NaiveDateTime),
    /// A date and time with a fixed UTC offset.
    Zoned(DateTime<FixedOffset>),
}

impl DateLike {
    /// The ISO-8601 rendering, such as `2021-03-04T05:06:07.250000+01:00`.
    ///
    /// Microseconds are included only when the value has a fractional
    /// second.
    pub fn isoformat(&self) -> String {
        match self {
            DateLike::Date(date) => date.format("%Y-%m-%d").to_string(),
            DateLike::Time(time) => format_time(time),
            DateLike::DateTime(datetime) => {
                format!("{}T{}", datetime.format("%Y-%m-%d"), format_time(&datetime.time()))
            }
            DateLike::Zoned(datetime) => {
                let local = datetime.naive_local();
                format!(
                    "{}T{}{}",
                    local.format("%Y-%m-%d"),
                    format_time(&local.time()),
                    datetime.format("%:z")
                )
            }
        }
    }
}

fn format_time(time: &NaiveTime) -> String {
    if time.nanosecond() == 0 {
        time.format("%H:%M:%S").to_string()
    } else {
        time.format("%H:%M:%S%.6f").to_string()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Int(n.into())
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

// integers that may not fit `i64` fall back to a number literal
macro_rules! from_wide_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    match i64::try_from(n) {
                        Ok(n) => Value::Int(n),
                        Err(_) => Value::Number(Number(n.to_string())),
                    }
                }
            }
        )*
    };
}

from_wide_integer!(isize, usize, u64, i128, u128);

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Text(c.to_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<DateLike> for Value {
    fn from(d: DateLike) -> Self {
        Value::DateLike(d)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::DateLike(DateLike::Date(d))
    }
}

impl From<NaiveTime> for Value {
    fn from(t: NaiveTime) -> Self {
        Value::DateLike(DateLike::Time(t))
    }
}

impl From<NaiveDateTime> for Value {
    fn from(d: NaiveDateTime) -> Self {
        Value::DateLike(DateLike::DateTime(d))
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(d: DateTime<FixedOffset>) -> Self {
        Value::DateLike(DateLike::Zoned(d))
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Mapping(map)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Sequence(iter.into_iter().map(Into::into).collect())
    }
}

/// Collect key-value pairs into a mapping. A repeated key keeps its first
/// position and takes the last value.
impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Mapping(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
