//! Property-based tests using proptest.
//!
//! The lenient parsers must accept any input, the JSON encoding must decode
//! back to an equal document, and markup written by the serializer must parse
//! back to the same block structure.

use chrono::{DateTime, Utc};
use proptest::prelude::*;
use textdoc::{
    parse, parse_markup, parse_plain_text, parse_structured, to_json, to_markup, Alignment,
    DocumentElement, DocumentMetadata, DocumentParser, ElementStyle, FontStyle, FontWeight,
    JsonFormat, ListType, ParsedDocument, ParsingOptions,
};

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,7}"
}

fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..4).prop_map(|words| words.join(" "))
}

fn list_type() -> impl Strategy<Value = ListType> {
    prop_oneof![Just(ListType::Ordered), Just(ListType::Unordered)]
}

fn alignment() -> impl Strategy<Value = Alignment> {
    prop_oneof![
        Just(Alignment::Left),
        Just(Alignment::Center),
        Just(Alignment::Right),
        Just(Alignment::Justify),
    ]
}

fn measure() -> impl Strategy<Value = f64> {
    0.0f64..1.0e6
}

fn any_text() -> impl Strategy<Value = String> {
    "\\PC{0,20}"
}

/// Markup lines built from the characters the block parser reacts to.
fn markup_ish() -> impl Strategy<Value = String> {
    prop::collection::vec("[#*_`|+0-9. a-z-]{0,20}", 0..30).prop_map(|lines| lines.join("\n"))
}

/// Elements whose content survives a trip through markup unchanged.
fn markup_safe_element() -> impl Strategy<Value = DocumentElement> {
    prop_oneof![
        (1u8..=6, phrase()).prop_map(|(level, content)| DocumentElement::header(level, content)),
        phrase().prop_map(DocumentElement::text),
        (list_type(), prop::collection::vec(phrase(), 1..4))
            .prop_map(|(list_type, items)| DocumentElement::list(list_type, items)),
        (1usize..4)
            .prop_flat_map(|width| (
                prop::collection::vec(word(), width),
                prop::collection::vec(prop::collection::vec(word(), width), 0..3),
            ))
            .prop_map(|(headers, rows)| DocumentElement::table(headers, rows)),
        Just(DocumentElement::PageBreak),
    ]
}

fn style() -> impl Strategy<Value = Option<ElementStyle>> {
    prop::option::of(
        (
            prop::option::of(measure()),
            prop::option::of(prop_oneof![Just(FontWeight::Normal), Just(FontWeight::Bold)]),
            prop::option::of(prop_oneof![Just(FontStyle::Normal), Just(FontStyle::Italic)]),
            prop::option::of(alignment()),
            prop::option::of(any_text()),
            prop::option::of(measure()),
        )
            .prop_map(
                |(font_size, font_weight, font_style, alignment, color, border_width)| {
                    ElementStyle {
                        font_size,
                        font_weight,
                        font_style,
                        alignment,
                        color,
                        border_width,
                        ..ElementStyle::default()
                    }
                },
            ),
    )
}

/// Any element the model can hold.
fn any_element() -> impl Strategy<Value = DocumentElement> {
    prop_oneof![
        (any_text(), style()).prop_map(|(content, style)| DocumentElement::Text { content, style }),
        (1u8..=6, any_text(), style()).prop_map(|(level, content, style)| {
            DocumentElement::Header {
                level,
                content,
                style,
            }
        }),
        (list_type(), prop::collection::vec(any_text(), 0..4), style()).prop_map(
            |(list_type, items, style)| DocumentElement::List {
                list_type,
                items,
                style,
            }
        ),
        (
            prop::option::of(any_text()),
            prop::collection::vec(any_text(), 0..4),
            prop::collection::vec(prop::collection::vec(any_text(), 0..4), 0..3),
            style(),
        )
            .prop_map(|(title, headers, rows, style)| DocumentElement::Table {
                title,
                headers,
                rows,
                style,
            }),
        (
            any_text(),
            prop::option::of(any_text()),
            prop::option::of(measure()),
            prop::option::of(measure()),
            prop::option::of(alignment()),
        )
            .prop_map(|(src, alt, width, height, alignment)| DocumentElement::Image {
                src,
                alt,
                width,
                height,
                alignment,
            }),
        measure().prop_map(|height| DocumentElement::Spacer { height }),
        Just(DocumentElement::PageBreak),
    ]
}

fn any_metadata() -> impl Strategy<Value = DocumentMetadata> {
    (
        any_text(),
        prop::option::of(any_text()),
        prop::option::of(prop::collection::vec(any_text(), 0..3)),
        prop::option::of(0i64..4_000_000_000),
        prop::option::of("[a-z]{2}"),
    )
        .prop_map(|(title, author, keywords, seconds, language)| {
            let mut metadata = DocumentMetadata::new(title);
            metadata.author = author;
            metadata.keywords = keywords;
            metadata.created_at =
                seconds.and_then(|s| DateTime::<Utc>::from_timestamp(s, 0));
            metadata.language = language;
            metadata
        })
}

fn without_styles(elements: &[DocumentElement]) -> Vec<DocumentElement> {
    elements
        .iter()
        .cloned()
        .map(|element| match element {
            DocumentElement::Text { content, .. } => DocumentElement::text(content),
            DocumentElement::Header { level, content, .. } => {
                DocumentElement::header(level, content)
            }
            DocumentElement::List {
                list_type, items, ..
            } => DocumentElement::list(list_type, items),
            DocumentElement::Table { headers, rows, .. } => DocumentElement::table(headers, rows),
            other => other,
        })
        .collect()
}

proptest! {
    /// Any random string fed to the lenient parsers should never cause a panic.
    #[test]
    fn any_input_no_panic(input in "\\PC{0,500}") {
        let _ = parse(&input, None).len();
        let _ = parse_markup(&input, None).len();
        let _ = parse_plain_text(&input, None).len();
    }

    /// Blocks produced by the markup parser are always well formed.
    #[test]
    fn markup_blocks_are_well_formed(input in markup_ish()) {
        let doc = parse_markup(&input, None);
        for element in &doc.elements {
            match element {
                DocumentElement::Header { level, .. } => prop_assert!((1..=6).contains(level)),
                DocumentElement::List { items, .. } => prop_assert!(!items.is_empty()),
                DocumentElement::Table { headers, rows, .. } => {
                    prop_assert!(!headers.is_empty());
                    for row in rows {
                        prop_assert_eq!(row.len(), headers.len());
                    }
                }
                _ => {}
            }
        }
        prop_assert_eq!(parse_markup(&input, None), doc);
    }

    /// Plain text yields one element per non-blank line.
    #[test]
    fn plain_text_one_element_per_line(lines in prop::collection::vec("\\PC{0,30}", 0..10)) {
        let input = lines.join("\n");
        let doc = parse_plain_text(&input, None);
        let expected = input.lines().filter(|line| !line.trim().is_empty()).count();
        prop_assert_eq!(doc.len(), expected);
    }

    /// Every document the markup parser produces survives the JSON encoding.
    #[test]
    fn parsed_markup_survives_json(input in markup_ish()) {
        let doc = parse_markup(&input, None);
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        prop_assert_eq!(parse_structured(&json).unwrap(), doc);
    }

    /// Style hints derived from any requested font size survive the JSON encoding.
    #[test]
    fn any_font_size_survives_json(size in any::<f64>(), input in markup_ish()) {
        let parser = DocumentParser::with_options(ParsingOptions::new().with_font_size(size));
        let doc = parser.parse_markup(&format!("# Heading\nbody\n{}", input), None);
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        prop_assert_eq!(parse_structured(&json).unwrap(), doc);
    }

    /// Encoding any document and decoding it gives back an equal document.
    #[test]
    fn structured_round_trip(
        metadata in any_metadata(),
        elements in prop::collection::vec(any_element(), 0..8),
    ) {
        let doc = ParsedDocument::new(metadata, elements);
        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        prop_assert_eq!(parse_structured(&json).unwrap(), doc);
    }

    /// Serializing to markup and parsing back keeps the block structure.
    #[test]
    fn markup_structural_round_trip(
        elements in prop::collection::vec(markup_safe_element(), 0..8),
    ) {
        let doc = ParsedDocument::new(DocumentMetadata::default(), elements);
        let reparsed = parse_markup(&to_markup(&doc), None);
        prop_assert_eq!(without_styles(&reparsed.elements), without_styles(&doc.elements));
    }
}
