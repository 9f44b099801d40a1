//! Error types for textdoc library.

use std::fmt;
use thiserror::Error;

/// Result type alias for textdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding or encoding documents.
///
/// Only the structured-encoding path and the JSON encoder are fallible; the
/// markup parser, plain-text parser, dispatcher and markup serializer always
/// produce a value.
#[derive(Error, Debug)]
pub enum Error {
    /// The structured input is not syntactically valid JSON.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The decoded value does not match the document model.
    #[error("Validation error at `{path}`: {kind}")]
    Validation {
        /// Location of the first offending value, e.g. `elements[2].level`.
        path: String,
        /// What was wrong with it.
        kind: ValidationErrorKind,
    },

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Create a validation error at the given path.
    pub fn validation(path: impl Into<String>, kind: ValidationErrorKind) -> Self {
        Error::Validation {
            path: path.into(),
            kind,
        }
    }

    /// The offending path, for validation errors.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::Validation { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Check if this is a validation (schema) error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}

/// Categories of schema validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An element `type` tag outside the closed set.
    UnknownTag(String),
    /// A required field is absent.
    MissingField,
    /// A field is present but has the wrong JSON type.
    WrongType {
        /// Expected JSON shape, e.g. "string" or "array of strings".
        expected: &'static str,
    },
    /// An object carries a key the model does not define.
    UnknownField,
    /// A value has the right type but is outside its allowed range.
    OutOfRange(String),
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorKind::UnknownTag(tag) => write!(f, "unknown element type \"{}\"", tag),
            ValidationErrorKind::MissingField => write!(f, "missing required field"),
            ValidationErrorKind::WrongType { expected } => write!(f, "expected {}", expected),
            ValidationErrorKind::UnknownField => write!(f, "unknown field"),
            ValidationErrorKind::OutOfRange(reason) => write!(f, "out of range: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::validation(
            "elements[0].type",
            ValidationErrorKind::UnknownTag("bogus".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "Validation error at `elements[0].type`: unknown element type \"bogus\""
        );

        let err = Error::validation(
            "metadata.title",
            ValidationErrorKind::WrongType { expected: "string" },
        );
        assert_eq!(
            err.to_string(),
            "Validation error at `metadata.title`: expected string"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Decode(_)));
        assert!(!err.is_validation());
        assert_eq!(err.path(), None);
    }
}
