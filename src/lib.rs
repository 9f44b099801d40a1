//! # textdoc
//!
//! Turn markup text, a strict JSON encoding, or plain text into one typed
//! document model, and serialize that model back to markup or JSON.
//!
//! ## Quick Start
//!
//! ```
//! use textdoc::{parse, to_markup, DocumentElement};
//!
//! let doc = parse("# Report\n\n- alpha\n- beta\n", None);
//! assert_eq!(doc.metadata.title, "Report");
//! assert!(matches!(doc.elements[1], DocumentElement::List { .. }));
//!
//! assert_eq!(to_markup(&doc), "# Report\n\n- alpha\n- beta");
//! ```
//!
//! ## Strict and total paths
//!
//! [`parse_structured`] and [`validate`] are the only fallible entry points:
//! they reject anything that does not match the model exactly. The markup
//! and plain-text parsers, the [`parse`] dispatcher and the markup
//! serializer accept any input and always return a value.
//!
//! ```
//! use textdoc::parse_structured;
//!
//! let err = parse_structured(r#"{"metadata":{},"elements":[{"type":"bogus"}]}"#).unwrap_err();
//! assert_eq!(err.path(), Some("elements[0].type"));
//! ```

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format, InputFormat, MarkupIndicator};
pub use error::{Error, Result, ValidationErrorKind};
pub use model::{
    Alignment, DocumentElement, DocumentMetadata, ElementStyle, FontStyle, FontWeight, ListType,
    ParsedDocument, PartialMetadata, DEFAULT_TITLE,
};
pub use parser::{parse_structured, validate, DocumentParser, ParsingOptions};
pub use render::{
    to_json, to_markup, to_markup_with_options, ImagePolicy, JsonFormat, MarkupRenderer,
    RenderOptions,
};

use std::str::FromStr;

/// Detect the format of `text` and parse it with default options.
///
/// Never fails: invalid JSON is retried as markup or plain text.
///
/// # Example
///
/// ```
/// use textdoc::{parse, DocumentElement};
///
/// let doc = parse("Quarterly Report\nRevenue is up.\n", None);
/// assert_eq!(doc.metadata.title, "Quarterly Report");
/// assert!(matches!(doc.elements[0], DocumentElement::Header { level: 1, .. }));
/// ```
pub fn parse(text: &str, metadata: Option<&PartialMetadata>) -> ParsedDocument {
    DocumentParser::new().parse(text, metadata)
}

/// Parse markup text with default options. Never fails.
pub fn parse_markup(text: &str, metadata: Option<&PartialMetadata>) -> ParsedDocument {
    DocumentParser::new().parse_markup(text, metadata)
}

/// Parse plain text with default options. Never fails.
pub fn parse_plain_text(text: &str, metadata: Option<&PartialMetadata>) -> ParsedDocument {
    DocumentParser::new().parse_plain_text(text, metadata)
}

impl ParsedDocument {
    /// Render this document as markup.
    pub fn to_markup(&self) -> String {
        render::to_markup(self)
    }

    /// Render this document as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(self, format)
    }
}

impl FromStr for ParsedDocument {
    type Err = Error;

    /// Strictly decode the JSON encoding.
    fn from_str(s: &str) -> Result<Self> {
        parse_structured(s)
    }
}
