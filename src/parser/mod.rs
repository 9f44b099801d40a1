//! Parsers for markup, structured (JSON) and plain-text input.

mod markup;
mod options;
mod plain;
mod structured;

pub use options::{ParsingOptions, DEFAULT_FONT_SIZE, MAX_FONT_SIZE};
pub use structured::{parse_structured, validate};

use crate::detect;
use crate::error::Result;
use crate::model::{ParsedDocument, PartialMetadata};

/// Document parser holding immutable configuration.
///
/// A parser keeps no state between calls, so one instance can be shared
/// across threads and reused freely.
///
/// # Example
///
/// ```
/// use textdoc::{DocumentParser, ParsingOptions};
///
/// let parser = DocumentParser::with_options(ParsingOptions::new().with_tables(false));
/// let doc = parser.parse("# Notes\n\na | b", None);
/// assert_eq!(doc.metadata.title, "Notes");
/// assert_eq!(doc.elements.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentParser {
    options: ParsingOptions,
}

impl DocumentParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given options.
    pub fn with_options(options: ParsingOptions) -> Self {
        Self { options }
    }

    /// Get the parser options.
    pub fn options(&self) -> &ParsingOptions {
        &self.options
    }

    /// Detect the input format and parse accordingly. Never fails.
    ///
    /// Brace-wrapped input is first tried as the JSON encoding; if that
    /// fails the error is discarded and the text is treated as markup or
    /// plain text. Caller-supplied metadata fields override decoded ones.
    pub fn parse(&self, text: &str, metadata: Option<&PartialMetadata>) -> ParsedDocument {
        if detect::looks_structured(text) {
            match structured::parse_structured(text) {
                Ok(mut doc) => {
                    if let Some(partial) = metadata {
                        doc.metadata.apply(partial);
                    }
                    return doc;
                }
                Err(e) => log::debug!("not a structured document, falling back: {}", e),
            }
        }

        if detect::has_markup_indicators(text) {
            self.parse_markup(text, metadata)
        } else {
            self.parse_plain_text(text, metadata)
        }
    }

    /// Parse markup text. Never fails.
    pub fn parse_markup(&self, text: &str, metadata: Option<&PartialMetadata>) -> ParsedDocument {
        markup::parse(text, metadata, &self.options)
    }

    /// Parse plain text. Never fails.
    pub fn parse_plain_text(
        &self,
        text: &str,
        metadata: Option<&PartialMetadata>,
    ) -> ParsedDocument {
        plain::parse(text, metadata, &self.options)
    }

    /// Decode and validate the JSON encoding.
    pub fn parse_structured(&self, text: &str) -> Result<ParsedDocument> {
        structured::parse_structured(text)
    }
}
