//! Host plugin adapter.
//!
//! The host runtime registers [`MANIFEST`] and forwards every
//! "response produced" event to [`ResponsePlugin::on_response_produced`].

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::application::RewriteResponseUseCase;
use crate::domain::entities::{RewriteOutcome, Segment};

/// Registration metadata handed to the host.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PluginManifest {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub author: &'static str,
}

/// Manifest of this plugin.
pub const MANIFEST: PluginManifest = PluginManifest {
    name: "Md2Image",
    description: "Turns image links in bot responses into images, with hotlink and content-type checks",
    version: env!("CARGO_PKG_VERSION"),
    author: "BiFangKNT",
};

/// A finished bot response delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEvent {
    /// Fully composed response text.
    pub response_text: String,
}

impl ResponseEvent {
    /// Creates new event.
    #[must_use]
    pub fn new(response_text: impl Into<String>) -> Self {
        Self {
            response_text: response_text.into(),
        }
    }
}

/// Reply handed back to the host for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "body", rename_all = "lowercase")]
pub enum Reply {
    /// Rewritten message as ordered segments.
    Segments(Vec<Segment>),
    /// The original response, untouched.
    Text(String),
}

impl From<RewriteOutcome> for Reply {
    fn from(outcome: RewriteOutcome) -> Self {
        match outcome {
            RewriteOutcome::Unchanged(text) => Self::Text(text),
            RewriteOutcome::Rewritten(segments) => Self::Segments(segments),
        }
    }
}

/// Event hook bound to "response produced".
pub struct ResponsePlugin {
    rewrite: Arc<RewriteResponseUseCase>,
}

impl ResponsePlugin {
    /// Creates new plugin over the rewrite use case.
    #[must_use]
    pub const fn new(rewrite: Arc<RewriteResponseUseCase>) -> Self {
        Self { rewrite }
    }

    /// Returns the plugin manifest.
    #[must_use]
    pub const fn manifest(&self) -> &'static PluginManifest {
        &MANIFEST
    }

    /// Returns the reply to attach, or `None` when the response is empty.
    pub async fn on_response_produced(&self, event: &ResponseEvent) -> Option<Reply> {
        if event.response_text.is_empty() {
            debug!("Empty response, nothing to reply");
            return None;
        }

        Some(self.rewrite.execute(&event.response_text).await.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::HotlinkConfig;
    use crate::domain::ports::mocks::MockImageProbe;

    fn plugin(probe: MockImageProbe) -> ResponsePlugin {
        let use_case = RewriteResponseUseCase::new(Arc::new(probe), Arc::new(HotlinkConfig::new()));
        ResponsePlugin::new(Arc::new(use_case))
    }

    #[test]
    fn test_manifest() {
        let plugin = plugin(MockImageProbe::new());
        assert_eq!(plugin.manifest().name, "Md2Image");
        assert_eq!(plugin.manifest().version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_empty_response_has_no_reply() {
        let plugin = plugin(MockImageProbe::new());
        let reply = tokio_test::block_on(plugin.on_response_produced(&ResponseEvent::new("")));
        assert_eq!(reply, None);
    }

    #[tokio::test]
    async fn test_plain_response_is_echoed() {
        let plugin = plugin(MockImageProbe::new());

        let reply = plugin
            .on_response_produced(&ResponseEvent::new("hello there"))
            .await;

        assert_eq!(reply, Some(Reply::Text("hello there".to_string())));
    }

    #[tokio::test]
    async fn test_image_response_becomes_segments() {
        let url = "https://example.com/cat.png";
        let plugin = plugin(MockImageProbe::new().with_content_type(url, "image/png"));

        let reply = plugin
            .on_response_produced(&ResponseEvent::new(format!("![cat]({url})")))
            .await;

        assert_eq!(reply, Some(Reply::Segments(vec![Segment::image(url)])));
    }
}
