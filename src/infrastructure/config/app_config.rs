//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

use crate::application::services::DEFAULT_NOTICE_TEMPLATE;

const APP_NAME: &str = "md2img";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "bifangknt";
const CONFIG_FILE_NAME: &str = "config.toml";
const HOTLINK_FILE_NAME: &str = "hotlink.json";
const MIN_PROBE_TIMEOUT_SECS: u64 = 1;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    Info,
    /// Warning level.
    #[default]
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration loaded from `config.toml` and CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path. Logs go to stderr when unset.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Hotlink registry (JSON). Defaults to `hotlink.json` beside the
    /// config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotlink_config: Option<PathBuf>,

    /// Image probe settings.
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Rewrite settings.
    #[serde(default)]
    pub rewrite: RewriteConfig,
}

/// Image probe configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Per-request timeout in seconds.
    #[serde(default = "default_probe_timeout")]
    pub timeout_secs: u64,

    /// User agent sent with probe requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ProbeConfig {
    /// Returns the per-request timeout, raised to at least one second.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        if self.timeout_secs < MIN_PROBE_TIMEOUT_SECS {
            warn!(
                configured = self.timeout_secs,
                minimum = MIN_PROBE_TIMEOUT_SECS,
                "Probe timeout too small, using minimum"
            );
            return Duration::from_secs(MIN_PROBE_TIMEOUT_SECS);
        }
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_probe_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Rewrite configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteConfig {
    /// Text emitted for hotlink-protected images; `{site}` is replaced by
    /// the site name.
    #[serde(default = "default_notice_template")]
    pub notice_template: String,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            notice_template: default_notice_template(),
        }
    }
}

fn default_probe_timeout() -> u64 {
    5
}

fn default_user_agent() -> String {
    format!("{APP_NAME}/{}", env!("CARGO_PKG_VERSION"))
}

fn default_notice_template() -> String {
    DEFAULT_NOTICE_TEMPLATE.to_string()
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(hotlink_config) = &args.hotlink_config {
            self.hotlink_config = Some(hotlink_config.clone());
        }
        if let Some(timeout) = args.probe_timeout {
            self.probe.timeout_secs = timeout;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// Returns effective config path.
    #[must_use]
    pub fn effective_config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(Self::default_config_path)
    }

    /// Returns effective hotlink registry path.
    #[must_use]
    pub fn effective_hotlink_path(&self) -> Option<PathBuf> {
        self.hotlink_config.clone().or_else(|| {
            self.effective_config_path()
                .and_then(|path| path.parent().map(|dir| dir.join(HOTLINK_FILE_NAME)))
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::default(),
            hotlink_config: None,
            probe: ProbeConfig::default(),
            rewrite: RewriteConfig::default(),
        }
    }
}
