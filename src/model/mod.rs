//! Document model types.
//!
//! This module defines the canonical representation every parser produces
//! and every renderer consumes. It is plain owned data with no reference
//! back to the text it was parsed from.

mod document;
mod element;
mod style;

pub use document::{DocumentMetadata, ParsedDocument, PartialMetadata, DEFAULT_TITLE};
pub use element::{DocumentElement, ListType};
pub use style::{Alignment, ElementStyle, FontStyle, FontWeight};
