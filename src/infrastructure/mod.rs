//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// HTTP adapters.
pub mod http;

pub use config::{
    AppConfig, CliArgs, Command, HotlinkStore, LogLevel, OutputFormat, ProbeConfig, StorageManager,
};
pub use http::HttpImageProbe;
