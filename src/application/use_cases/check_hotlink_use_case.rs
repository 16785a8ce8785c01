//! Hotlink lookup for a single URL.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::application::services::registrable_domain_label;
use crate::domain::entities::HotlinkConfig;

/// Result of checking a URL against the hotlink registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotlinkVerdict {
    /// The host belongs to a registered hotlink-protected site.
    Protected {
        /// Domain label that matched.
        label: String,
        /// Site display name.
        site: String,
    },
    /// The host is not registered.
    Unrestricted,
    /// No host could be extracted from the input.
    InvalidUrl,
}

impl fmt::Display for HotlinkVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Protected { site, .. } => write!(
                f,
                "detected {site} hotlink protection; request the image as \"{site}: id\" instead."
            ),
            Self::Unrestricted => write!(
                f,
                "no hotlink restriction detected, the URL can be used directly."
            ),
            Self::InvalidUrl => write!(f, "not a valid URL."),
        }
    }
}

/// Checks URLs against the hotlink registry without touching the network.
pub struct CheckHotlinkUseCase {
    hotlinks: Arc<HotlinkConfig>,
}

impl CheckHotlinkUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(hotlinks: Arc<HotlinkConfig>) -> Self {
        Self { hotlinks }
    }

    /// Looks up the registrable-domain label of `url`.
    #[must_use]
    pub fn execute(&self, url: &str) -> HotlinkVerdict {
        let Some(label) = registrable_domain_label(url) else {
            debug!(url, "No host in URL");
            return HotlinkVerdict::InvalidUrl;
        };

        match self.hotlinks.site_name(&label) {
            Some(site) => HotlinkVerdict::Protected {
                site: site.to_string(),
                label,
            },
            None => HotlinkVerdict::Unrestricted,
        }
    }
}
