//! Rendering options and configuration.

/// Points of spacer height per emitted blank line.
pub const SPACER_LINE_HEIGHT: f64 = 12.0;

/// Upper bound on blank lines emitted for one spacer.
pub const MAX_SPACER_LINES: usize = 50;

/// Options for rendering a document to markup.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// What to emit for image elements
    pub image_policy: ImagePolicy,

    /// Points of spacer height per blank line
    pub spacer_line_height: f64,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image policy.
    pub fn with_image_policy(mut self, policy: ImagePolicy) -> Self {
        self.image_policy = policy;
        self
    }

    /// Set the spacer line height. Non-finite or non-positive values are ignored.
    pub fn with_spacer_line_height(mut self, height: f64) -> Self {
        if height.is_finite() && height > 0.0 {
            self.spacer_line_height = height;
        }
        self
    }

    /// Number of blank lines for a spacer of the given height (at least one).
    pub fn spacer_lines(&self, height: f64) -> usize {
        let lines = (height / self.spacer_line_height).round();
        if lines.is_finite() && lines >= 1.0 {
            (lines as usize).min(MAX_SPACER_LINES)
        } else {
            1
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            image_policy: ImagePolicy::Omit,
            spacer_line_height: SPACER_LINE_HEIGHT,
        }
    }
}

/// How image elements are written, since the markup subset has no image syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImagePolicy {
    /// Emit nothing
    #[default]
    Omit,
    /// Emit an `![alt](src)` line; it parses back as text
    Link,
}
