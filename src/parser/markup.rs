//! Line-oriented markup parser.
//!
//! Headers, thematic breaks and text lines are resolved on the line they
//! appear. Lists and tables have no closing delimiter, so they accumulate in
//! a per-call [`BlockState`] until a line arrives that does not continue
//! them (or the input ends), at which point they are flushed as elements.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ParsingOptions;
use crate::model::{DocumentElement, DocumentMetadata, ListType, ParsedDocument, PartialMetadata};

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());
static TABLE_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\|?\s*:?-+:?\s*(\|\s*:?-+:?\s*)*\|?$").unwrap());
static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*+]\s+(.+)$").unwrap());
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+(.+)$").unwrap());
static THEMATIC_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(-{3,}|\*{3,})$").unwrap());

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*|__(.+?)__").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*|\b_([^_]+)_\b").unwrap());
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Parse markup text into a document. Never fails.
pub(crate) fn parse(
    text: &str,
    metadata: Option<&PartialMetadata>,
    options: &ParsingOptions,
) -> ParsedDocument {
    let mut state = BlockState::new(options);

    for raw in text.lines() {
        let line = raw.trim();

        if line.is_empty() {
            state.flush();
            continue;
        }

        if let Some(caps) = HEADER.captures(line) {
            state.flush();
            let level = caps[1].len() as u8;
            let content = state.inline(caps[2].trim());
            state.elements.push(DocumentElement::Header {
                level,
                content,
                style: Some(options.header_style(level)),
            });
            continue;
        }

        if options.extract_tables() && line.contains('|') {
            state.table_line(line);
            continue;
        }

        if options.extract_lists() {
            if let Some((list_type, item)) = list_item(line) {
                state.list_item(list_type, item);
                continue;
            }
        }

        state.flush();
        if THEMATIC_BREAK.is_match(line) {
            state.elements.push(DocumentElement::PageBreak);
        } else {
            let content = state.inline(line);
            state.elements.push(DocumentElement::Text {
                content,
                style: Some(options.body_style()),
            });
        }
    }

    let elements = state.finish();
    log::debug!("markup parser produced {} elements", elements.len());

    let first_header = elements.iter().find_map(|e| match e {
        DocumentElement::Header { content, .. } => Some(content.as_str()),
        _ => None,
    });
    let metadata = DocumentMetadata::from_partial(metadata, first_header);
    ParsedDocument::new(metadata, elements)
}

/// Match a list item, returning its bullet style and text.
fn list_item(line: &str) -> Option<(ListType, &str)> {
    if let Some(caps) = UNORDERED_ITEM.captures(line) {
        return caps.get(1).map(|m| (ListType::Unordered, m.as_str().trim()));
    }
    ORDERED_ITEM
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| (ListType::Ordered, m.as_str().trim()))
}

/// Split a table line into trimmed cells, ignoring one outer pipe per side.
fn split_cells(line: &str) -> Vec<String> {
    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// Unwrap inline emphasis and code spans to their inner text.
pub(crate) fn strip_inline(text: &str) -> String {
    let text = BOLD.replace_all(text, inner_text);
    let text = ITALIC.replace_all(&text, inner_text);
    CODE.replace_all(&text, inner_text).into_owned()
}

/// First participating capture group of an alternation.
fn inner_text(caps: &regex::Captures<'_>) -> String {
    caps.iter()
        .skip(1)
        .flatten()
        .next()
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

struct PendingList {
    list_type: ListType,
    items: Vec<String>,
}

struct PendingTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Accumulators for one parse call.
struct BlockState<'a> {
    options: &'a ParsingOptions,
    elements: Vec<DocumentElement>,
    list: Option<PendingList>,
    table: Option<PendingTable>,
}

impl<'a> BlockState<'a> {
    fn new(options: &'a ParsingOptions) -> Self {
        Self {
            options,
            elements: Vec::new(),
            list: None,
            table: None,
        }
    }

    fn inline(&self, text: &str) -> String {
        if self.options.preserve_formatting() {
            text.to_string()
        } else {
            strip_inline(text)
        }
    }

    fn table_line(&mut self, line: &str) {
        self.flush_list();

        // Alignment row under the header; carries no data.
        if TABLE_SEPARATOR.is_match(line) {
            return;
        }

        let cells: Vec<String> = split_cells(line)
            .into_iter()
            .map(|cell| self.inline(&cell))
            .collect();

        match self.table {
            None => {
                self.table = Some(PendingTable {
                    headers: cells,
                    rows: Vec::new(),
                });
            }
            Some(ref mut table) if cells.len() == table.headers.len() => table.rows.push(cells),
            Some(ref table) => {
                log::debug!(
                    "dropping table row with {} cells (header has {})",
                    cells.len(),
                    table.headers.len()
                );
            }
        }
    }

    fn list_item(&mut self, list_type: ListType, item: &str) {
        self.flush_table();

        if self.list.as_ref().is_some_and(|l| l.list_type != list_type) {
            self.flush_list();
        }

        let item = self.inline(item);
        self.list
            .get_or_insert_with(|| PendingList {
                list_type,
                items: Vec::new(),
            })
            .items
            .push(item);
    }

    fn flush_list(&mut self) {
        if let Some(list) = self.list.take() {
            if !list.items.is_empty() {
                self.elements.push(DocumentElement::List {
                    list_type: list.list_type,
                    items: list.items,
                    style: Some(self.options.body_style()),
                });
            }
        }
    }

    fn flush_table(&mut self) {
        if let Some(table) = self.table.take() {
            if !table.headers.is_empty() {
                self.elements.push(DocumentElement::Table {
                    title: None,
                    headers: table.headers,
                    rows: table.rows,
                    style: Some(self.options.body_style()),
                });
            }
        }
    }

    fn flush(&mut self) {
        self.flush_list();
        self.flush_table();
    }

    fn finish(mut self) -> Vec<DocumentElement> {
        self.flush();
        self.elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(text: &str) -> ParsedDocument {
        parse(text, None, &ParsingOptions::default())
    }

    #[test]
    fn test_headers_and_text() {
        let doc = parse_default("# Title\n\nSome text here.\n### Sub  \n");
        assert_eq!(doc.len(), 3);
        assert!(matches!(
            &doc.elements[0],
            DocumentElement::Header { level: 1, content, .. } if content == "Title"
        ));
        assert!(matches!(
            &doc.elements[1],
            DocumentElement::Text { content, .. } if content == "Some text here."
        ));
        assert!(matches!(
            &doc.elements[2],
            DocumentElement::Header { level: 3, content, .. } if content == "Sub"
        ));
        assert_eq!(doc.metadata.title, "Title");
    }

    #[test]
    fn test_seven_hashes_is_text() {
        let doc = parse_default("####### too deep");
        assert!(matches!(&doc.elements[0], DocumentElement::Text { .. }));
    }

    #[test]
    fn test_list_splitting_on_style_change() {
        let doc = parse_default("- a\n- b\n1. c\n2. d\n");
        assert_eq!(
            doc.elements
                .iter()
                .map(|e| match e {
                    DocumentElement::List {
                        list_type, items, ..
                    } => (*list_type, items.clone()),
                    other => panic!("unexpected element {:?}", other),
                })
                .collect::<Vec<_>>(),
            vec![
                (ListType::Unordered, vec!["a".to_string(), "b".to_string()]),
                (ListType::Ordered, vec!["c".to_string(), "d".to_string()]),
            ]
        );
    }

    #[test]
    fn test_mixed_bullets_stay_in_one_list() {
        let doc = parse_default("- a\n* b\n+ c");
        assert_eq!(doc.len(), 1);
        assert!(matches!(
            &doc.elements[0],
            DocumentElement::List { list_type: ListType::Unordered, items, .. } if items.len() == 3
        ));
    }

    #[test]
    fn test_table_drops_mismatched_rows() {
        let doc = parse_default("| A | B |\n|---|---|\n| 1 | 2 |\n| x | y | z |\n| 3 | 4 |\n");
        assert_eq!(doc.len(), 1);
        match &doc.elements[0] {
            DocumentElement::Table { headers, rows, .. } => {
                assert_eq!(headers, &vec!["A".to_string(), "B".to_string()]);
                assert_eq!(
                    rows,
                    &vec![
                        vec!["1".to_string(), "2".to_string()],
                        vec!["3".to_string(), "4".to_string()],
                    ]
                );
            }
            other => panic!("expected table, got {:?}", other),
        }
    }

    #[test]
    fn test_table_flushed_by_text() {
        let doc = parse_default("a | b\n1 | 2\nAfter the table.");
        assert_eq!(doc.len(), 2);
        assert!(matches!(&doc.elements[0], DocumentElement::Table { rows, .. } if rows.len() == 1));
        assert!(matches!(&doc.elements[1], DocumentElement::Text { .. }));
    }

    #[test]
    fn test_alignment_separator_discarded() {
        let doc = parse_default("| L | C | R |\n|:---|:---:|---:|\n| 1 | 2 | 3 |");
        assert!(matches!(&doc.elements[0], DocumentElement::Table { rows, .. } if rows.len() == 1));
    }

    #[test]
    fn test_thematic_break() {
        let doc = parse_default("before\n---\n***\nafter");
        let kinds: Vec<_> = doc.elements.iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec!["text", "pagebreak", "pagebreak", "text"]);
    }

    #[test]
    fn test_disabled_extraction_falls_through_to_text() {
        let options = ParsingOptions::new().with_tables(false).with_lists(false);
        let doc = parse("- item\n| a | b |\n1. first", None, &options);
        let kinds: Vec<_> = doc.elements.iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec!["text", "text", "text"]);
        assert!(matches!(
            &doc.elements[0],
            DocumentElement::Text { content, .. } if content == "- item"
        ));
    }

    #[test]
    fn test_blank_lines_produce_nothing() {
        let doc = parse_default("\n\n   \n\t\n");
        assert!(doc.is_empty());
        assert_eq!(doc.metadata.title, crate::model::DEFAULT_TITLE);
    }

    #[test]
    fn test_inline_markers_preserved_by_default() {
        let doc = parse_default("Some **bold** and `code`.");
        assert!(matches!(
            &doc.elements[0],
            DocumentElement::Text { content, .. } if content == "Some **bold** and `code`."
        ));
    }

    #[test]
    fn test_strip_formatting() {
        let options = ParsingOptions::new().strip_formatting();
        let doc = parse("## A *big* deal\n- use `cargo`\nKeep snake_case_names, **bold**.", None, &options);
        assert!(matches!(
            &doc.elements[0],
            DocumentElement::Header { content, .. } if content == "A big deal"
        ));
        assert!(matches!(
            &doc.elements[1],
            DocumentElement::List { items, .. } if items == &vec!["use cargo".to_string()]
        ));
        assert!(matches!(
            &doc.elements[2],
            DocumentElement::Text { content, .. } if content == "Keep snake_case_names, bold."
        ));
    }

    #[test]
    fn test_supplied_title_wins() {
        let partial = PartialMetadata::new().with_title("Given");
        let doc = parse("# Heading", Some(&partial), &ParsingOptions::default());
        assert_eq!(doc.metadata.title, "Given");
    }

    #[test]
    fn test_style_hints_follow_options() {
        let options = ParsingOptions::new()
            .with_font_size(10.0)
            .with_alignment(crate::model::Alignment::Center);
        let doc = parse("# H\nbody", None, &options);
        let header_style = doc.elements[0].style().unwrap();
        let body_style = doc.elements[1].style().unwrap();
        assert_eq!(header_style.font_size, Some(20.0));
        assert_eq!(body_style.font_size, Some(10.0));
        assert_eq!(body_style.alignment, Some(crate::model::Alignment::Center));
    }

    #[test]
    fn test_crlf_input() {
        let doc = parse_default("# T\r\n- a\r\n- b\r\n");
        assert_eq!(doc.len(), 2);
        assert!(matches!(
            &doc.elements[1],
            DocumentElement::List { items, .. } if items == &vec!["a".to_string(), "b".to_string()]
        ));
    }
}
