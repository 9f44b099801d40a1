//! Input format detection.
//!
//! Detection is a cheap syntactic heuristic. Any single markup indicator is
//! enough to route text to the markup parser, so prose such as `3*4 and 5*6`
//! counts as markup.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Input format chosen by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Brace-wrapped text, tried as the JSON encoding first
    Structured,
    /// Text with at least one markup indicator
    Markup,
    /// Anything else
    PlainText,
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Structured => f.write_str("structured"),
            InputFormat::Markup => f.write_str("markup"),
            InputFormat::PlainText => f.write_str("plain text"),
        }
    }
}

/// A markup construct the detector looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupIndicator {
    Header,
    List,
    Table,
    Bold,
    Italic,
    InlineCode,
}

impl MarkupIndicator {
    /// All indicators, in test order.
    pub const ALL: [MarkupIndicator; 6] = [
        MarkupIndicator::Header,
        MarkupIndicator::List,
        MarkupIndicator::Table,
        MarkupIndicator::Bold,
        MarkupIndicator::Italic,
        MarkupIndicator::InlineCode,
    ];

    fn pattern(&self) -> &'static Regex {
        match self {
            MarkupIndicator::Header => &*HEADER,
            MarkupIndicator::List => &*LIST,
            MarkupIndicator::Table => &*TABLE,
            MarkupIndicator::Bold => &*BOLD,
            MarkupIndicator::Italic => &*ITALIC,
            MarkupIndicator::InlineCode => &*INLINE_CODE,
        }
    }

    /// Check if this indicator occurs anywhere in `text`.
    pub fn is_present(&self, text: &str) -> bool {
        self.pattern().is_match(text)
    }
}

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*#{1,6}\s+\S").unwrap());
static LIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*(?:[-*+]|\d+\.)\s+\S").unwrap());
static TABLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\|[^\n]*\|").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*[^\n]+?\*\*|__[^\n]+?__").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*[^*\n]+\*|_[^_\n]+_").unwrap());
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`[^`\n]+`").unwrap());

/// Detect the format of raw input text.
///
/// # Example
/// ```
/// use textdoc::detect::{detect_format, InputFormat};
///
/// assert_eq!(detect_format(r#"{"elements": []}"#), InputFormat::Structured);
/// assert_eq!(detect_format("# Title"), InputFormat::Markup);
/// assert_eq!(detect_format("Just a sentence."), InputFormat::PlainText);
/// ```
pub fn detect_format(text: &str) -> InputFormat {
    if looks_structured(text) {
        InputFormat::Structured
    } else if has_markup_indicators(text) {
        InputFormat::Markup
    } else {
        InputFormat::PlainText
    }
}

/// Check if the trimmed text is wrapped in braces.
pub fn looks_structured(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.starts_with('{') && trimmed.ends_with('}')
}

/// Check if any markup indicator occurs in the text.
pub fn has_markup_indicators(text: &str) -> bool {
    MarkupIndicator::ALL.iter().any(|i| i.is_present(text))
}

/// List every markup indicator present in the text.
pub fn markup_indicators(text: &str) -> Vec<MarkupIndicator> {
    MarkupIndicator::ALL
        .into_iter()
        .filter(|i| i.is_present(text))
        .collect()
}
