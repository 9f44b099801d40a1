//! Markup rendering.
//!
//! Output is deterministic and structure-preserving but lossy: style hints,
//! table titles' association with their table, spacer heights and (by
//! default) images do not survive a trip through markup.

use crate::model::{DocumentElement, ListType, ParsedDocument};

use super::{ImagePolicy, RenderOptions};

/// Convert a document to markup with default options.
pub fn to_markup(doc: &ParsedDocument) -> String {
    MarkupRenderer::new(RenderOptions::default()).render(doc)
}

/// Convert a document to markup.
pub fn to_markup_with_options(doc: &ParsedDocument, options: &RenderOptions) -> String {
    MarkupRenderer::new(options.clone()).render(doc)
}

/// Markup renderer.
pub struct MarkupRenderer {
    options: RenderOptions,
}

impl MarkupRenderer {
    /// Create a new markup renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to markup. Never fails.
    pub fn render(&self, doc: &ParsedDocument) -> String {
        let mut output = String::new();
        for element in &doc.elements {
            self.render_element(&mut output, element);
        }
        output.trim_end().to_string()
    }

    fn render_element(&self, output: &mut String, element: &DocumentElement) {
        match element {
            DocumentElement::Header { level, content, .. } => {
                let level = (*level).clamp(1, 6);
                output.push_str(&"#".repeat(level as usize));
                output.push(' ');
                output.push_str(&single_line(content));
                output.push_str("\n\n");
            }
            DocumentElement::Text { content, .. } => {
                output.push_str(&single_line(content));
                output.push_str("\n\n");
            }
            DocumentElement::List {
                list_type, items, ..
            } => self.render_list(output, *list_type, items),
            DocumentElement::Table {
                title,
                headers,
                rows,
                ..
            } => self.render_table(output, title.as_deref(), headers, rows),
            DocumentElement::Image { src, alt, .. } => match self.options.image_policy {
                ImagePolicy::Omit => {}
                ImagePolicy::Link => {
                    let alt = alt.as_deref().unwrap_or("");
                    output.push_str(&format!("![{}]({})\n\n", single_line(alt), src));
                }
            },
            DocumentElement::Spacer { height } => {
                output.push_str(&"\n".repeat(self.options.spacer_lines(*height)));
            }
            DocumentElement::PageBreak => output.push_str("---\n\n"),
        }
    }

    fn render_list(&self, output: &mut String, list_type: ListType, items: &[String]) {
        if items.is_empty() {
            return;
        }

        for (i, item) in items.iter().enumerate() {
            match list_type {
                ListType::Unordered => output.push_str("- "),
                ListType::Ordered => output.push_str(&format!("{}. ", i + 1)),
            }
            output.push_str(&single_line(item));
            output.push('\n');
        }
        output.push('\n');
    }

    fn render_table(
        &self,
        output: &mut String,
        title: Option<&str>,
        headers: &[String],
        rows: &[Vec<String>],
    ) {
        if headers.is_empty() {
            log::debug!("skipping table without headers ({} rows)", rows.len());
            return;
        }

        if let Some(title) = title {
            output.push_str("### ");
            output.push_str(&single_line(title));
            output.push('\n');
        }

        render_row(output, headers);
        output.push('|');
        for _ in headers {
            output.push_str(" --- |");
        }
        output.push('\n');
        for row in rows {
            render_row(output, row);
        }
        output.push('\n');
    }
}

fn render_row(output: &mut String, cells: &[String]) {
    output.push('|');
    for cell in cells {
        output.push_str(&format!(" {} |", single_line(cell).trim()));
    }
    output.push('\n');
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}
