//! Presentation layer: host plugin adapter and console output.

/// Console rendering.
pub mod output;
/// Host plugin adapter.
pub mod plugin;

pub use output::render_reply;
pub use plugin::{MANIFEST, PluginManifest, Reply, ResponseEvent, ResponsePlugin};
