//! Parsing options and configuration.

use crate::model::{Alignment, ElementStyle};

/// Default body font size in points.
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Largest accepted body font size. Header hints scale it by at most 2.0,
/// which keeps every hint finite.
pub const MAX_FONT_SIZE: f64 = f64::MAX / 2.0;

/// Options for parsing text into a document.
///
/// Only table and list extraction change structure; the font and alignment
/// settings feed style hints only. Fields are set through the builders, so
/// the font size is always finite and positive.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsingOptions {
    /// Keep inline emphasis and code markers verbatim in text content
    preserve_formatting: bool,

    /// Recognise pipe tables in markup
    extract_tables: bool,

    /// Recognise bullet and numbered lists in markup
    extract_lists: bool,

    /// Accepted for configuration compatibility; images are never
    /// synthesized from markup text
    extract_images: bool,

    /// Body font size hint in points
    default_font_size: f64,

    /// Alignment hint for every element
    default_alignment: Alignment,
}

impl ParsingOptions {
    /// Create new parsing options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable formatting preservation.
    pub fn with_preserve_formatting(mut self, preserve: bool) -> Self {
        self.preserve_formatting = preserve;
        self
    }

    /// Strip inline emphasis and code markers from text content.
    pub fn strip_formatting(mut self) -> Self {
        self.preserve_formatting = false;
        self
    }

    /// Enable or disable table extraction.
    pub fn with_tables(mut self, extract: bool) -> Self {
        self.extract_tables = extract;
        self
    }

    /// Enable or disable list extraction.
    pub fn with_lists(mut self, extract: bool) -> Self {
        self.extract_lists = extract;
        self
    }

    /// Enable or disable image extraction.
    pub fn with_images(mut self, extract: bool) -> Self {
        self.extract_images = extract;
        self
    }

    /// Set the default font size.
    ///
    /// NaN and non-positive sizes are ignored; larger sizes are capped at
    /// [`MAX_FONT_SIZE`].
    pub fn with_font_size(mut self, size: f64) -> Self {
        if size > 0.0 {
            self.default_font_size = size.min(MAX_FONT_SIZE);
        }
        self
    }

    /// Set the default alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.default_alignment = alignment;
        self
    }

    /// Whether inline markers are kept verbatim.
    pub fn preserve_formatting(&self) -> bool {
        self.preserve_formatting
    }

    /// Whether pipe tables are recognised.
    pub fn extract_tables(&self) -> bool {
        self.extract_tables
    }

    /// Whether lists are recognised.
    pub fn extract_lists(&self) -> bool {
        self.extract_lists
    }

    /// Whether image extraction was requested.
    pub fn extract_images(&self) -> bool {
        self.extract_images
    }

    /// Body font size hint in points.
    pub fn default_font_size(&self) -> f64 {
        self.default_font_size
    }

    /// Alignment hint for every element.
    pub fn default_alignment(&self) -> Alignment {
        self.default_alignment
    }

    /// Style hint for body elements.
    pub(crate) fn body_style(&self) -> ElementStyle {
        ElementStyle::new()
            .font_size(self.default_font_size)
            .align(self.default_alignment)
    }

    /// Style hint for a header: bold, with the font size scaled down as the
    /// level goes up.
    pub(crate) fn header_style(&self, level: u8) -> ElementStyle {
        const SCALE: [f64; 6] = [2.0, 1.5, 1.25, 1.1, 1.0, 0.9];
        let index = usize::from(level.clamp(1, 6) - 1);
        ElementStyle::new()
            .font_size(self.default_font_size * SCALE[index])
            .bold()
            .align(self.default_alignment)
    }
}

impl Default for ParsingOptions {
    fn default() -> Self {
        Self {
            preserve_formatting: true,
            extract_tables: true,
            extract_lists: true,
            extract_images: false,
            default_font_size: DEFAULT_FONT_SIZE,
            default_alignment: Alignment::Left,
        }
    }
}
