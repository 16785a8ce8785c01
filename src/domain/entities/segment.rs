//! Rewritten message segments.

use serde::{Deserialize, Serialize};

/// A typed unit of rewritten output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    /// Literal text, rendered as-is.
    Text {
        /// The text content.
        text: String,
    },
    /// Image reference the host turns into an attachment.
    Image {
        /// Image URL.
        url: String,
    },
}

impl Segment {
    /// Creates a text segment.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Creates an image segment.
    #[must_use]
    pub fn image(url: impl Into<String>) -> Self {
        Self::Image { url: url.into() }
    }

    /// Returns true for image segments.
    #[must_use]
    pub const fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }
}

/// Result of rewriting a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "lowercase")]
pub enum RewriteOutcome {
    /// Nothing in the message warranted rewriting.
    Unchanged(String),
    /// Ordered segments replacing the message.
    Rewritten(Vec<Segment>),
}

impl RewriteOutcome {
    /// Returns the segments, or an empty slice for unchanged messages.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        match self {
            Self::Unchanged(_) => &[],
            Self::Rewritten(segments) => segments,
        }
    }

    /// Number of image segments in the outcome.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.segments().iter().filter(|s| s.is_image()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_json_shape() {
        let json = serde_json::to_string(&Segment::image("https://a.com/x.png")).unwrap();
        assert_eq!(json, r#"{"type":"image","url":"https://a.com/x.png"}"#);

        let json = serde_json::to_string(&Segment::text("hi")).unwrap();
        assert_eq!(json, r#"{"type":"text","text":"hi"}"#);
    }

    #[test]
    fn test_outcome_accessors() {
        let unchanged = RewriteOutcome::Unchanged("plain".to_string());
        assert!(unchanged.segments().is_empty());

        let rewritten = RewriteOutcome::Rewritten(vec![
            Segment::text("See "),
            Segment::image("https://example.com/cat.png"),
        ]);
        assert_eq!(rewritten.image_count(), 1);
        assert_eq!(rewritten.segments()[0], Segment::text("See "));
    }
}
