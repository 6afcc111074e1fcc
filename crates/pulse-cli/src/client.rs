use async_trait::async_trait;
use reqwest::Client;

use pulse_core::error::Error;
use pulse_core::source::HealthSource;
use pulse_core::types::HealthReport;

/// Health source backed by an HTTP GET to the pulse server's root path.
pub struct HttpHealthSource {
    base_url: String,
    client: Client,
}

impl HttpHealthSource {
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl HealthSource for HttpHealthSource {
    async fn fetch(&self) -> Result<HealthReport, Error> {
        let resp = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(Error::Request(format!(
                "unexpected status: {}",
                resp.status()
            )));
        }

        // Decode into the shared report type so a malformed payload is
        // caught here instead of propagating untyped JSON to the view.
        resp.json::<HealthReport>()
            .await
            .map_err(|e| Error::InvalidPayload(e.to_string()))
    }
}
