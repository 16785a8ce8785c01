//! Domain entity definitions.

mod hotlink;
mod segment;
mod url_match;

pub use hotlink::HotlinkConfig;
pub use segment::{RewriteOutcome, Segment};
pub use url_match::{MatchKind, UrlMatch};
