//! Hotlink-protected site registry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Maps a registrable-domain label (e.g. `pximg`) to a site display name
/// (e.g. `Pixiv`). Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotlinkConfig {
    sites: HashMap<String, String>,
}

impl HotlinkConfig {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the display name for a domain label.
    #[must_use]
    pub fn site_name(&self, label: &str) -> Option<&str> {
        self.sites.get(label).map(String::as_str)
    }

    /// Number of registered sites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Returns true if no sites are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for HotlinkConfig
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            sites: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
