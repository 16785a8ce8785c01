//! Use case implementations.

mod check_hotlink_use_case;
mod rewrite_response_use_case;

pub use check_hotlink_use_case::{CheckHotlinkUseCase, HotlinkVerdict};
pub use rewrite_response_use_case::{RewriteResponseUseCase, SourcedSegment};
