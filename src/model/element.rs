//! Content elements.

use super::{Alignment, ElementStyle};
use serde::Serialize;
use std::fmt;

/// A single content element, in reading order.
///
/// Each variant carries only the data relevant to its kind. The structured
/// encoding tags every element with a lowercase `type` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DocumentElement {
    /// A paragraph of text (one opaque string, inline markup kept raw)
    Text {
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<ElementStyle>,
    },

    /// A heading, level 1-6
    Header {
        level: u8,
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<ElementStyle>,
    },

    /// A flat list of items
    List {
        #[serde(rename = "listType")]
        list_type: ListType,
        items: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<ElementStyle>,
    },

    /// A table with one header row
    Table {
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<ElementStyle>,
    },

    /// An image reference
    Image {
        src: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        alignment: Option<Alignment>,
    },

    /// Vertical whitespace, in points
    Spacer { height: f64 },

    /// A thematic break / page break
    PageBreak,
}

impl DocumentElement {
    /// Create an unstyled text element.
    pub fn text(content: impl Into<String>) -> Self {
        DocumentElement::Text {
            content: content.into(),
            style: None,
        }
    }

    /// Create an unstyled header. The level is clamped to 1-6.
    pub fn header(level: u8, content: impl Into<String>) -> Self {
        DocumentElement::Header {
            level: level.clamp(1, 6),
            content: content.into(),
            style: None,
        }
    }

    /// Create an unstyled list.
    pub fn list<S: Into<String>>(list_type: ListType, items: impl IntoIterator<Item = S>) -> Self {
        DocumentElement::List {
            list_type,
            items: items.into_iter().map(Into::into).collect(),
            style: None,
        }
    }

    /// Create an untitled, unstyled table.
    pub fn table(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        DocumentElement::Table {
            title: None,
            headers,
            rows,
            style: None,
        }
    }

    /// The tag used for this element in the structured encoding.
    pub fn kind(&self) -> &'static str {
        match self {
            DocumentElement::Text { .. } => "text",
            DocumentElement::Header { .. } => "header",
            DocumentElement::List { .. } => "list",
            DocumentElement::Table { .. } => "table",
            DocumentElement::Image { .. } => "image",
            DocumentElement::Spacer { .. } => "spacer",
            DocumentElement::PageBreak => "pagebreak",
        }
    }

    /// The style hint, for the variants that carry one.
    pub fn style(&self) -> Option<&ElementStyle> {
        match self {
            DocumentElement::Text { style, .. }
            | DocumentElement::Header { style, .. }
            | DocumentElement::List { style, .. }
            | DocumentElement::Table { style, .. } => style.as_ref(),
            _ => None,
        }
    }

    /// Get plain text content of the element.
    pub fn plain_text(&self) -> String {
        match self {
            DocumentElement::Text { content, .. } | DocumentElement::Header { content, .. } => {
                content.clone()
            }
            DocumentElement::List { items, .. } => items.join("\n"),
            DocumentElement::Table {
                title,
                headers,
                rows,
                ..
            } => {
                let mut lines = Vec::with_capacity(rows.len() + 2);
                if let Some(title) = title {
                    lines.push(title.clone());
                }
                lines.push(headers.join("\t"));
                lines.extend(rows.iter().map(|row| row.join("\t")));
                lines.join("\n")
            }
            DocumentElement::Image { alt, .. } => alt.clone().unwrap_or_default(),
            DocumentElement::Spacer { .. } | DocumentElement::PageBreak => String::new(),
        }
    }
}

/// Bullet style of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    /// Numbered list (`1.`)
    Ordered,
    /// Bulleted list (`-`, `*`, `+`)
    Unordered,
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListType::Ordered => f.write_str("ordered"),
            ListType::Unordered => f.write_str("unordered"),
        }
    }
}
