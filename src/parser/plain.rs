//! Plain-text fallback parser.

use super::ParsingOptions;
use crate::model::{DocumentElement, DocumentMetadata, ParsedDocument, PartialMetadata};

/// Parse unannotated text. Never fails.
///
/// Without a caller-supplied title the first non-empty line is promoted to a
/// level-1 header and becomes the title. Every other non-empty line becomes
/// its own text element; lines are not merged into paragraphs.
pub(crate) fn parse(
    text: &str,
    metadata: Option<&PartialMetadata>,
    options: &ParsingOptions,
) -> ParsedDocument {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
    let mut elements = Vec::new();

    let has_title = metadata.is_some_and(|m| m.title.is_some());
    let promoted = if has_title { None } else { lines.next() };

    if let Some(title) = promoted {
        elements.push(DocumentElement::Header {
            level: 1,
            content: title.to_string(),
            style: Some(options.header_style(1)),
        });
    }

    elements.extend(lines.map(|line| DocumentElement::Text {
        content: line.to_string(),
        style: Some(options.body_style()),
    }));

    ParsedDocument::new(DocumentMetadata::from_partial(metadata, promoted), elements)
}
