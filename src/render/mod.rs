//! Rendering module for converting documents to markup and JSON.

mod json;
mod markup;
mod options;

pub use json::{to_json, JsonFormat};
pub use markup::{to_markup, to_markup_with_options, MarkupRenderer};
pub use options::{ImagePolicy, RenderOptions, MAX_SPACER_LINES, SPACER_LINE_HEIGHT};
