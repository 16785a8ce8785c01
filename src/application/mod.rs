//! Application layer with use cases and services.

/// Stateless helpers for scanning and classifying URLs.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use use_cases::{CheckHotlinkUseCase, HotlinkVerdict, RewriteResponseUseCase, SourcedSegment};
