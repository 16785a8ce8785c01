//! Port definition for probing URLs over the network.

use async_trait::async_trait;

use crate::domain::errors::ProbeError;

/// Port for looking up the content type a server reports for a URL.
#[async_trait]
pub trait ImageProbePort: Send + Sync {
    /// Returns the `Content-Type` header of the resolved response, if any.
    async fn content_type(&self, url: &str) -> Result<Option<String>, ProbeError>;
}
