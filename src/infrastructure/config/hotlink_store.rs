//! Loading of the hotlink registry.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info, warn};

use super::storage::ConfigError;
use crate::domain::entities::HotlinkConfig;

/// Reads the hotlink registry from a JSON file.
pub struct HotlinkStore;

impl HotlinkStore {
    /// Loads the registry at `path`.
    ///
    /// Never fails: a missing, unreadable or malformed file yields an empty
    /// registry.
    #[must_use]
    pub fn load(path: &Path) -> HotlinkConfig {
        match Self::try_load(path) {
            Ok(config) => {
                info!(path = %path.display(), sites = config.len(), "Hotlink registry loaded");
                config
            }
            Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No hotlink registry, hotlink checks disabled");
                HotlinkConfig::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unusable hotlink registry");
                HotlinkConfig::default()
            }
        }
    }

    /// Loads the registry at `path`, if any.
    #[must_use]
    pub fn load_optional(path: Option<&Path>) -> HotlinkConfig {
        path.map(Self::load).unwrap_or_default()
    }

    fn try_load(path: &Path) -> Result<HotlinkConfig, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
