//! HTTP implementation of the image probe.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, header, redirect};
use tracing::{debug, trace};

use crate::domain::errors::ProbeError;
use crate::domain::ports::ImageProbePort;
use crate::infrastructure::config::ProbeConfig;

const MAX_REDIRECTS: usize = 5;

/// Probes URLs with a HEAD request, retrying once with GET when the server
/// rejects HEAD.
pub struct HttpImageProbe {
    client: Client,
}

impl std::fmt::Debug for HttpImageProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpImageProbe").finish_non_exhaustive()
    }
}

impl HttpImageProbe {
    /// Creates probe from configuration.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        Self::with_timeout(config.timeout(), &config.user_agent)
    }

    /// Creates probe with an explicit per-request timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_timeout(timeout: Duration, user_agent: &str) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| ProbeError::client(e.to_string()))?;

        Ok(Self { client })
    }

    fn map_error(url: &str, e: &reqwest::Error) -> ProbeError {
        if e.is_timeout() {
            ProbeError::Timeout
        } else if e.is_connect() {
            ProbeError::connect(e.to_string())
        } else if e.is_builder() {
            ProbeError::invalid_url(url)
        } else {
            ProbeError::request(e.to_string())
        }
    }

    fn content_type_of(response: &Response) -> Option<String> {
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    }
}

#[async_trait]
impl ImageProbePort for HttpImageProbe {
    async fn content_type(&self, url: &str) -> Result<Option<String>, ProbeError> {
        trace!(url, "Sending HEAD probe");
        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|e| Self::map_error(url, &e))?;

        let response = match response.status() {
            StatusCode::METHOD_NOT_ALLOWED | StatusCode::FORBIDDEN => {
                debug!(url, status = %response.status(), "HEAD rejected, retrying with GET");
                // Only the headers are inspected; the body is dropped unread.
                self.client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| Self::map_error(url, &e))?
            }
            _ => response,
        };

        Ok(Self::content_type_of(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn probe() -> HttpImageProbe {
        HttpImageProbe::new(&ProbeConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_head_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/cat.png"))
            .respond_with(ResponseTemplate::new(200).insert_header("content-type", "image/png"))
            .expect(1)
            .mount(&server)
            .await;

        let content_type = probe()
            .content_type(&format!("{}/cat.png", server.uri()))
            .await
            .unwrap();

        assert_eq!(content_type.as_deref(), Some("image/png"));
    }

    #[tokio::test]
    async fn test_get_fallback_on_method_not_allowed() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/pic"))
            .respond_with(ResponseTemplate::new(405))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/pic"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "image/jpeg")
                    .set_body_bytes(vec![0xFF, 0xD8, 0xFF]),
            )
            .expect(1)
            .mount(&server)
            .await;

        let content_type = probe()
            .content_type(&format!("{}/pic", server.uri()))
            .await
            .unwrap();

        assert_eq!(content_type.as_deref(), Some("image/jpeg"));
    }

    #[tokio::test]
    async fn test_get_fallback_on_forbidden() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).insert_header("content-type", "text/html"))
            .expect(1)
            .mount(&server)
            .await;

        let content_type = probe()
            .content_type(&format!("{}/page", server.uri()))
            .await
            .unwrap();

        assert_eq!(content_type.as_deref(), Some("text/html"));
    }

    #[tokio::test]
    async fn test_no_retry_on_other_errors() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let content_type = probe()
            .content_type(&format!("{}/missing.png", server.uri()))
            .await
            .unwrap();

        assert_eq!(content_type, None);
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "image/png")
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let probe = HttpImageProbe::with_timeout(Duration::from_millis(100), "test").unwrap();
        let err = probe
            .content_type(&format!("{}/slow.png", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, ProbeError::Timeout));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let err = probe()
            .content_type("http://127.0.0.1:1/x.png")
            .await
            .unwrap_err();

        assert!(err.is_network_error());
    }
}
