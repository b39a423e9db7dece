//! HTTP delivery sink using `reqwest`.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use super::{DeliveryError, DeliverySink};

/// Sends payloads to a fixed endpoint with HTTP PUT.
///
/// Timeouts are whatever the default `reqwest` client provides; the pipeline
/// adds none of its own.
pub struct HttpDeliverySink {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpDeliverySink {
    /// Create a sink targeting the given endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Endpoint this sink delivers to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DeliverySink for HttpDeliverySink {
    async fn put(&self, body: String, content_type: &str) -> Result<u16, DeliveryError> {
        let response = self
            .client
            .put(&self.endpoint)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| DeliveryError {
                message: e.to_string(),
            })?;

        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_keeps_configured_endpoint() {
        let sink = HttpDeliverySink::new("https://example.com/ingest");
        assert_eq!(sink.endpoint(), "https://example.com/ingest");
    }
}
