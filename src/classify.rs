use std::fmt::{Display, Formatter};

use crate::render::{Leaf, Shape};
use crate::value::Value;

/// The value of the `type` attribute written for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Text, including dates and times.
    Str,
    /// Native integer.
    Int,
    /// Native float.
    Float,
    /// Boolean.
    Bool,
    /// Any other numeric literal.
    Number,
    /// Null.
    Null,
    /// Mapping.
    Dict,
    /// Sequence.
    List,
}

impl TypeTag {
    /// The attribute text for this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Str => "str",
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Bool => "bool",
            TypeTag::Number => "number",
            TypeTag::Null => "null",
            TypeTag::Dict => "dict",
            TypeTag::List => "list",
        }
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Classify this value.
    ///
    /// Dates and times are written as text, so they classify as
    /// [`TypeTag::Str`].
    pub fn type_tag(&self) -> TypeTag {
        match self.shape() {
            Shape::Leaf(leaf) => leaf.type_tag(),
            Shape::Mapping(_) => TypeTag::Dict,
            Shape::Sequence(_) => TypeTag::List,
        }
    }
}

impl Leaf<'_> {
    pub(crate) fn type_tag(&self) -> TypeTag {
        match self {
            Leaf::Null => TypeTag::Null,
            Leaf::Bool(_) => TypeTag::Bool,
            Leaf::Int(_) => TypeTag::Int,
            Leaf::Float(_) => TypeTag::Float,
            Leaf::Number(_) => TypeTag::Number,
            Leaf::Text(_) | Leaf::DateLike(_) => TypeTag::Str,
        }
    }
}
