//! md2img - rewrites chat-bot responses so image links become images.
//!
//! Markdown images, Markdown links and bare URLs are located in a response.
//! The first one is checked against a registry of hotlink-protected sites and
//! probed over HTTP; a verified image becomes an image segment, everything
//! else stays text.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and services.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing the host adapter and console output.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "md2img";
