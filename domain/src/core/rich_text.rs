//! Display text with inline emphasis.
//!
//! Guide content is mostly plain prose with the occasional highlighted
//! phrase (quiet hours, age limits, dates). [`RichText`] keeps those
//! highlights so that a renderer can emphasize them, while
//! [`RichText::plain_text`] yields the unstyled string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A run of text within a [`RichText`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", content = "text", rename_all = "snake_case")]
pub enum TextSpan {
    Plain(String),
    Strong(String),
}

impl TextSpan {
    pub fn text(&self) -> &str {
        match self {
            TextSpan::Plain(s) | TextSpan::Strong(s) => s,
        }
    }

    pub fn is_strong(&self) -> bool {
        matches!(self, TextSpan::Strong(_))
    }
}

/// Ordered sequence of text spans (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText {
    spans: Vec<TextSpan>,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an unstyled run
    pub fn text(mut self, s: impl Into<String>) -> Self {
        self.spans.push(TextSpan::Plain(s.into()));
        self
    }

    /// Append an emphasized run
    pub fn strong(mut self, s: impl Into<String>) -> Self {
        self.spans.push(TextSpan::Strong(s.into()));
        self
    }

    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.text().is_empty())
    }

    /// Concatenate every span without styling
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(TextSpan::text).collect()
    }
}

impl From<&str> for RichText {
    fn from(s: &str) -> Self {
        RichText::new().text(s)
    }
}

impl From<String> for RichText {
    fn from(s: String) -> Self {
        RichText::new().text(s)
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(span.text())?;
        }
        Ok(())
    }
}
