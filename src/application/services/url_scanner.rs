use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::entities::{MatchKind, UrlMatch};

/// Markdown image, Markdown link and bare URL, tried in that order at each
/// position.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"!\[.*?\]\((?P<image>https?://[^\s)]+)\)|\[.*?\]\((?P<link>https?://[^\s)]+)\)|(?P<bare>https?://[^\s)]+)",
    )
    .unwrap()
});

/// Locates URLs in message text.
pub struct UrlScanner;

impl UrlScanner {
    /// Lazily yields every URL in `message`, left to right, without overlap.
    pub fn scan(message: &str) -> impl Iterator<Item = UrlMatch<'_>> {
        let haystack = if message.contains("http") { message } else { "" };
        URL_RE
            .captures_iter(haystack)
            .filter_map(|caps| Self::to_match(&caps))
    }

    fn to_match<'h>(caps: &Captures<'h>) -> Option<UrlMatch<'h>> {
        let whole = caps.get(0)?;
        let (kind, url) = if let Some(url) = caps.name("image") {
            (MatchKind::MarkdownImage, url)
        } else if let Some(url) = caps.name("link") {
            (MatchKind::MarkdownLink, url)
        } else {
            (MatchKind::BareUrl, caps.name("bare")?)
        };

        Some(UrlMatch {
            span: whole.range(),
            raw: whole.as_str(),
            kind,
            url_span: url.range(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_urls(content: &str) -> Vec<(MatchKind, &str)> {
        UrlScanner::scan(content).map(|m| (m.kind, m.url())).collect()
    }

    #[test]
    fn test_scan_markdown_image() {
        let content = "Here is an image ![alt text](https://example.com/image.png)";
        let matches: Vec<_> = UrlScanner::scan(content).collect();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].kind, MatchKind::MarkdownImage);
        assert_eq!(matches[0].url(), "https://example.com/image.png");
        assert_eq!(matches[0].markdown_prefix(), Some("![alt text]("));
        assert_eq!(&content[matches[0].span.clone()], matches[0].raw);
    }

    #[test]
    fn test_scan_markdown_link() {
        let content = "Link: [doc](https://example.com/readme)";
        assert_eq!(
            kinds_and_urls(content),
            vec![(MatchKind::MarkdownLink, "https://example.com/readme")]
        );
    }

    #[test]
    fn test_scan_bare_url_stops_at_whitespace_and_paren() {
        let content = "Check this out https://example.com/pic.jpg cool (https://b.com/x) right?";
        assert_eq!(
            kinds_and_urls(content),
            vec![
                (MatchKind::BareUrl, "https://example.com/pic.jpg"),
                (MatchKind::BareUrl, "https://b.com/x"),
            ]
        );
    }

    #[test]
    fn test_scan_mixed_in_order() {
        let content = "![img](https://a.com/1.png) and https://b.com/2.jpg or [c](http://c.com)";
        assert_eq!(
            kinds_and_urls(content),
            vec![
                (MatchKind::MarkdownImage, "https://a.com/1.png"),
                (MatchKind::BareUrl, "https://b.com/2.jpg"),
                (MatchKind::MarkdownLink, "http://c.com"),
            ]
        );
    }

    #[test]
    fn test_scan_keeps_duplicates() {
        let content = "https://a.com/1.png and https://a.com/1.png";
        assert_eq!(UrlScanner::scan(content).count(), 2);
    }

    #[test]
    fn test_matches_do_not_overlap() {
        let content = "x ![a](https://a.com/a.png)[b](https://b.com)https://c.com y";
        let matches: Vec<_> = UrlScanner::scan(content).collect();

        assert_eq!(matches.len(), 3);
        for pair in matches.windows(2) {
            assert!(pair[0].end() <= pair[1].start());
        }
    }

    #[test]
    fn test_broken_markdown_falls_back_to_bare_url() {
        let content = "![pic](see https://a.com/x.png) and [a](https://x.com/y z)";
        assert_eq!(
            kinds_and_urls(content),
            vec![
                (MatchKind::BareUrl, "https://a.com/x.png"),
                (MatchKind::BareUrl, "https://x.com/y"),
            ]
        );
    }

    #[test]
    fn test_markdown_text_does_not_cross_lines() {
        let content = "[first\nline](https://a.com/doc)";
        assert_eq!(
            kinds_and_urls(content),
            vec![(MatchKind::BareUrl, "https://a.com/doc")]
        );
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        assert!(UrlScanner::scan("HTTPS://EXAMPLE.COM/a.png").next().is_none());
        assert!(UrlScanner::scan("ftp://files.example.com/a.png").next().is_none());
    }

    #[test]
    fn test_no_urls() {
        assert!(UrlScanner::scan("Just some text with no images.").next().is_none());
        assert!(UrlScanner::scan("").next().is_none());
    }

    #[test]
    fn test_unicode_offsets() {
        let content = "看这个 https://example.com/猫.png 好吗";
        let m = UrlScanner::scan(content).next().unwrap();
        assert_eq!(m.url(), "https://example.com/猫.png");
        assert_eq!(&content[..m.start()], "看这个 ");
        assert_eq!(&content[m.end()..], " 好吗");
    }
}
