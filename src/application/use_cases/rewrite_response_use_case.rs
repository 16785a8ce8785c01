//! Response rewriting use case.

use std::ops::Range;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::services::{
    HotlinkNotice, UrlScanner, has_image_suffix, is_image_content_type, registrable_domain_label,
};
use crate::domain::entities::{HotlinkConfig, RewriteOutcome, Segment, UrlMatch};
use crate::domain::ports::ImageProbePort;

/// A segment together with the byte range of the message it replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedSegment {
    /// The emitted segment.
    pub segment: Segment,
    /// Byte range of the original message this segment stands for.
    pub source: Range<usize>,
}

impl SourcedSegment {
    /// Creates new sourced segment.
    #[must_use]
    pub const fn new(segment: Segment, source: Range<usize>) -> Self {
        Self { segment, source }
    }
}

/// Outcome of live classification for one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Classification {
    Hotlinked { site: String },
    Image,
    NotImage,
}

/// Rewrites a bot response into text and image segments.
///
/// Only the first URL of a message gets live classification (hotlink lookup,
/// then network probe). Every other URL is format-normalised only, so a
/// message costs at most one probe.
pub struct RewriteResponseUseCase {
    probe: Arc<dyn ImageProbePort>,
    hotlinks: Arc<HotlinkConfig>,
    notice: HotlinkNotice,
}

impl RewriteResponseUseCase {
    /// Creates new use case with the default hotlink notice.
    #[must_use]
    pub fn new(probe: Arc<dyn ImageProbePort>, hotlinks: Arc<HotlinkConfig>) -> Self {
        Self {
            probe,
            hotlinks,
            notice: HotlinkNotice::default(),
        }
    }

    /// Replaces the hotlink notice.
    #[must_use]
    pub fn with_notice(mut self, notice: HotlinkNotice) -> Self {
        self.notice = notice;
        self
    }

    /// Rewrites `message`.
    ///
    /// Returns [`RewriteOutcome::Unchanged`] when the message holds no URL.
    pub async fn execute(&self, message: &str) -> RewriteOutcome {
        let Some(parts) = self.rewrite_with_sources(message).await else {
            debug!("No URLs found, leaving response unchanged");
            return RewriteOutcome::Unchanged(message.to_string());
        };

        let segments: Vec<Segment> = parts.into_iter().map(|part| part.segment).collect();
        if segments.is_empty() {
            return RewriteOutcome::Unchanged(message.to_string());
        }

        info!(
            segments = segments.len(),
            images = segments.iter().filter(|s| s.is_image()).count(),
            "Response rewritten"
        );
        RewriteOutcome::Rewritten(segments)
    }

    /// Rewrites `message`, keeping the source range of every segment.
    ///
    /// Returns `None` when the message holds no URL.
    pub async fn rewrite_with_sources(&self, message: &str) -> Option<Vec<SourcedSegment>> {
        if message.is_empty() {
            return None;
        }

        let mut parts = Vec::new();
        let mut last_end = 0;
        let mut first_url_classified = false;

        // Collected up front so the future stays `Send` across the probe.
        let matches: Vec<UrlMatch<'_>> = UrlScanner::scan(message).collect();

        for url_match in &matches {
            let (start, end) = (url_match.start(), url_match.end());

            if start > last_end {
                parts.push(SourcedSegment::new(
                    Segment::text(&message[last_end..start]),
                    last_end..start,
                ));
            }

            let url = url_match.url();
            let classified = if first_url_classified {
                None
            } else {
                first_url_classified = true;
                match self.classify(url).await {
                    Classification::Hotlinked { site } => {
                        Some(Segment::text(self.notice.render(&site)))
                    }
                    Classification::Image => Some(Segment::image(url)),
                    Classification::NotImage => None,
                }
            };

            let segment = classified.unwrap_or_else(|| Self::format_only(url_match));
            parts.push(SourcedSegment::new(segment, start..end));
            last_end = end;
        }

        if matches.is_empty() {
            return None;
        }

        if last_end < message.len() {
            parts.push(SourcedSegment::new(
                Segment::text(&message[last_end..]),
                last_end..message.len(),
            ));
        }

        Some(parts)
    }

    async fn classify(&self, url: &str) -> Classification {
        if has_image_suffix(url)
            && let Some(site) = registrable_domain_label(url)
                .as_deref()
                .and_then(|label| self.hotlinks.site_name(label))
        {
            debug!(url, site, "URL belongs to a hotlink-protected site");
            return Classification::Hotlinked {
                site: site.to_string(),
            };
        }

        if self.probe_is_image(url).await {
            Classification::Image
        } else {
            Classification::NotImage
        }
    }

    async fn probe_is_image(&self, url: &str) -> bool {
        match self.probe.content_type(url).await {
            Ok(Some(content_type)) => {
                let is_image = is_image_content_type(&content_type);
                debug!(url, content_type = %content_type, is_image, "Probed URL");
                is_image
            }
            Ok(None) => {
                debug!(url, "Probe response carried no content type");
                false
            }
            Err(e) if e.is_network_error() => {
                debug!(url, error = %e, "Image probe failed, treating as plain text");
                false
            }
            Err(e) => {
                warn!(url, error = %e, "Image probe rejected URL, treating as plain text");
                false
            }
        }
    }

    /// Markdown forms keep their prefix and get a `" )"` closer; bare URLs
    /// pass through.
    fn format_only(url_match: &UrlMatch<'_>) -> Segment {
        let url = url_match.url();
        match url_match.markdown_prefix() {
            Some(prefix) => Segment::text(format!("{prefix}{url} )")),
            None => Segment::text(url),
        }
    }
}
