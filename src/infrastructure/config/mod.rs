//! Application configuration.

pub mod app_config;
pub mod args;
pub mod hotlink_store;
pub mod storage;

pub use app_config::{AppConfig, LogLevel, ProbeConfig, RewriteConfig};
pub use args::{CliArgs, Command, OutputFormat};
pub use hotlink_store::HotlinkStore;
pub use storage::{ConfigError, StorageManager};
