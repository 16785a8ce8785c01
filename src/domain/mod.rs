//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{HotlinkConfig, MatchKind, RewriteOutcome, Segment, UrlMatch};
pub use errors::ProbeError;
pub use ports::ImageProbePort;
