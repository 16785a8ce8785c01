//! Located URL occurrences inside a message.

use std::ops::Range;

/// How a URL was written in the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// `![text](url)`
    MarkdownImage,
    /// `[text](url)`
    MarkdownLink,
    /// A bare `http(s)://` run.
    BareUrl,
}

impl MatchKind {
    /// Returns true for the Markdown forms.
    #[must_use]
    pub const fn is_markdown(self) -> bool {
        matches!(self, Self::MarkdownImage | Self::MarkdownLink)
    }
}

/// A URL found in a message, borrowing from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMatch<'a> {
    /// Byte range of the whole match in the message.
    pub span: Range<usize>,
    /// Raw matched text.
    pub raw: &'a str,
    /// Syntax the URL was written in.
    pub kind: MatchKind,
    /// Byte range of the URL within the message.
    pub url_span: Range<usize>,
}

impl<'a> UrlMatch<'a> {
    /// Start offset of the match.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.span.start
    }

    /// End offset (exclusive) of the match.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.span.end
    }

    /// The URL itself: the captured target for Markdown forms, the whole
    /// match for bare URLs.
    #[must_use]
    pub fn url(&self) -> &'a str {
        let offset = self.url_span.start - self.span.start;
        &self.raw[offset..offset + self.url_span.len()]
    }

    /// Literal text preceding the URL, e.g. `![pic](`. `None` for bare URLs.
    #[must_use]
    pub fn markdown_prefix(&self) -> Option<&'a str> {
        if !self.kind.is_markdown() {
            return None;
        }
        Some(&self.raw[..self.url_span.start - self.span.start])
    }
}
