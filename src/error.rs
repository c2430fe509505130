use std::fmt::{Display, Formatter};

/// Errors raised while turning a Rust value into a [`Value`](crate::Value).
///
/// Rendering a `Value` into XML cannot fail; only the conversion from an
/// arbitrary [`serde::Serialize`] type can.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value has a shape that has no XML counterpart, such as a
    /// sequence used as a mapping key.
    UnsupportedType {
        /// A rendering of the offending value.
        value: String,
        /// The name of the offending value's type.
        type_name: String,
    },
    /// A message raised by a `Serialize` implementation.
    Custom(String),
}

impl Error {
    pub(crate) fn unsupported(value: impl Display, type_name: &str) -> Self {
        Error::UnsupportedType {
            value: value.to_string(),
            type_name: type_name.to_string(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnsupportedType { value, type_name } => {
                write!(f, "Unsupported data type: {} ({})", value, type_name)
            }
            Error::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl serde::ser::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_display() {
        let err = Error::unsupported("[1, 2]", "seq");
        assert_eq!(err.to_string(), "Unsupported data type: [1, 2] (seq)");
    }

    #[test]
    fn test_custom() {
        let err = <Error as serde::ser::Error>::custom("boom");
        assert_eq!(err, Error::Custom("boom".to_string()));
    }
}
