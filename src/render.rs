use std::borrow::Cow;

use indexmap::IndexMap;

use crate::entity::escape;
use crate::name::sanitize;
use crate::value::{DateLike, Map, Number, Value};

/// Attributes of one element, written in insertion order.
pub(crate) type Attributes = IndexMap<&'static str, String>;

/// A value without nested values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Leaf<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Number(&'a Number),
    Text(&'a str),
    DateLike(&'a DateLike),
}

/// How the conversion engine treats a value.
pub(crate) enum Shape<'a> {
    Leaf(Leaf<'a>),
    Mapping(&'a Map),
    Sequence(&'a [Value]),
}

impl Value {
    pub(crate) fn shape(&self) -> Shape<'_> {
        match self {
            Value::Null => Shape::Leaf(Leaf::Null),
            Value::Bool(b) => Shape::Leaf(Leaf::Bool(*b)),
            Value::Int(n) => Shape::Leaf(Leaf::Int(*n)),
            Value::Float(n) => Shape::Leaf(Leaf::Float(*n)),
            Value::Number(n) => Shape::Leaf(Leaf::Number(n)),
            Value::Text(s) => Shape::Leaf(Leaf::Text(s)),
            Value::DateLike(d) => Shape::Leaf(Leaf::DateLike(d)),
            Value::Mapping(map) => Shape::Mapping(map),
            Value::Sequence(items) => Shape::Sequence(items),
        }
    }
}

impl Leaf<'_> {
    /// Element content; text is escaped, numbers are not.
    fn content(&self) -> Cow<'_, str> {
        match self {
            Leaf::Null => Cow::Borrowed(""),
            Leaf::Bool(true) => Cow::Borrowed("true"),
            Leaf::Bool(false) => Cow::Borrowed("false"),
            Leaf::Int(n) => Cow::Owned(n.to_string()),
            Leaf::Float(n) => Cow::Owned(format_float(*n)),
            Leaf::Number(n) => Cow::Borrowed(n.as_str()),
            Leaf::Text(s) => escape(s),
            Leaf::DateLike(d) => Cow::Owned(escape(&d.isoformat()).into_owned()),
        }
    }
}

/// Floats always show a fractional part or an exponent, so `1.0` stays
/// distinguishable from the integer `1`. Exponents are signed and have at
/// least two digits: `1e+20`, `2.5e-07`.
fn format_float(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    } else if n == f64::INFINITY {
        return "inf".to_string();
    } else if n == f64::NEG_INFINITY {
        return "-inf".to_string();
    }
    let shortest = format!("{:?}", n);
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => shortest,
    }
}

pub(crate) fn write_start_tag(out: &mut String, name: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(name);
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
    out.push('>');
}

pub(crate) fn write_end_tag(out: &mut String, name: &str) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Render a leaf as a complete element.
///
/// Elements always get an explicit end tag, even when empty.
pub(crate) fn render_leaf(
    out: &mut String,
    key: &str,
    leaf: Leaf<'_>,
    type_attributes: bool,
    mut attributes: Attributes,
) {
    tracing::trace!(key, ?leaf, "render leaf");
    let name = sanitize(key, &mut attributes);
    if type_attributes {
        attributes.insert("type", leaf.type_tag().as_str().to_string());
    }
    write_start_tag(out, &name, &attributes);
    out.push_str(&leaf.content());
    write_end_tag(out, &name);
}
