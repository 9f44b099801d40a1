//! Document-level types.

use super::DocumentElement;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Title used when neither the caller nor the input supplies one.
pub const DEFAULT_TITLE: &str = "Untitled Document";

/// A parsed document: metadata plus elements in reading order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedDocument {
    /// Document metadata (title, author, etc.)
    pub metadata: DocumentMetadata,

    /// Elements in top-to-bottom reading order
    pub elements: Vec<DocumentElement>,
}

impl ParsedDocument {
    /// Create a document from its parts.
    pub fn new(metadata: DocumentMetadata, elements: Vec<DocumentElement>) -> Self {
        Self { metadata, elements }
    }

    /// Document title.
    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over `(level, content)` of every header, in order.
    pub fn headers(&self) -> impl Iterator<Item = (u8, &str)> {
        self.elements.iter().filter_map(|e| match e {
            DocumentElement::Header { level, content, .. } => Some((*level, content.as_str())),
            _ => None,
        })
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .map(|e| e.plain_text())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Document metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    /// Document title
    pub title: String,

    /// Document author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Document subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Keywords, in order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    /// Creation date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Language tag (e.g., "en-US")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl DocumentMetadata {
    /// Create metadata with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            subject: None,
            keywords: None,
            created_at: None,
            language: None,
        }
    }

    /// Build metadata from caller-supplied fields.
    ///
    /// The title is taken from `partial` first, then `fallback_title`, then
    /// [`DEFAULT_TITLE`].
    pub fn from_partial(partial: Option<&PartialMetadata>, fallback_title: Option<&str>) -> Self {
        let title = fallback_title.unwrap_or(DEFAULT_TITLE);
        let mut metadata = Self::new(title);
        if let Some(partial) = partial {
            metadata.apply(partial);
        }
        metadata
    }

    /// Overwrite every field that `partial` sets.
    pub fn apply(&mut self, partial: &PartialMetadata) {
        if let Some(ref title) = partial.title {
            self.title = title.clone();
        }
        if let Some(ref author) = partial.author {
            self.author = Some(author.clone());
        }
        if let Some(ref subject) = partial.subject {
            self.subject = Some(subject.clone());
        }
        if let Some(ref keywords) = partial.keywords {
            self.keywords = Some(keywords.clone());
        }
        if let Some(created_at) = partial.created_at {
            self.created_at = Some(created_at);
        }
        if let Some(ref language) = partial.language {
            self.language = Some(language.clone());
        }
    }
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

/// Caller-supplied metadata fragment; every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub language: Option<String>,
}

impl PartialMetadata {
    /// Create an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the keywords.
    pub fn with_keywords<S: Into<String>>(mut self, keywords: impl IntoIterator<Item = S>) -> Self {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Set the creation date.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set the language tag.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}
