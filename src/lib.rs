#![forbid(unsafe_code)]

//! Convert nested, dynamically-typed values into XML.
//!
//! A [`Value`] is a tree of scalars, mappings and sequences. Mapping keys
//! become element names, sequence items become `item` elements and scalars
//! become element content:
//!
//! ```rust
//! use serde_json::json;
//!
//! let xml = dictxml::to_string(&json!({"a": 1, "b": [1, 2]}))?;
//! assert_eq!(
//!     xml,
//!     r#"<?xml version="1.0" encoding="UTF-8" ?><root><a type="int">1</a><b type="list"><item type="int">1</item><item type="int">2</item></b></root>"#
//! );
//! # Ok::<(), dictxml::Error>(())
//! ```
//!
//! Keys that are not valid element names are repaired: `123` becomes
//! `n123`, `a b` becomes `a_b`, and anything else is written as
//! `<key name="...">`.
//!
//! [`Options`] controls the XML declaration and root element, `type`
//! attributes and `id` attributes. Ids are unique for the lifetime of the
//! [`IdRegistry`] they are drawn from.

mod classify;
mod convert;
mod document;
mod entity;
mod error;
mod identity;
mod name;
mod render;
mod ser;
mod value;

#[cfg(feature = "proptest")]
pub mod proptest;

pub use classify::TypeTag;
pub use document::{Options, XML_DECLARATION};
pub use entity::escape;
pub use error::Error;
pub use identity::IdRegistry;
pub use name::{is_valid_name, PLACEHOLDER_NAME};
pub use ser::{to_string, to_value, to_xml, to_xml_with_options};
pub use value::{DateLike, Map, Number, Value};
