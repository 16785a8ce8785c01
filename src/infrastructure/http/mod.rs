//! HTTP adapters.

pub mod image_probe_client;

pub use image_probe_client::HttpImageProbe;
