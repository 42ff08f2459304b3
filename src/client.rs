use std::{future::Future, time::Duration};

use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    error::TransportError,
    types::{ShortenRequest, ShortenResponse},
};

/// The remote side of the workflow: turns a long URL into whatever the
/// service returns in `shortUrl` (normally a short code).
pub trait ShortenService {
    fn shorten(&self, original_url: &str) -> impl Future<Output = Result<String, TransportError>>;
}

/// `POST <base>/shorten` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpShortener {
    client: Client,
    endpoint: String,
}

impl HttpShortener {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("linkform/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/shorten", base_url.trim_end_matches('/')),
        })
    }
}

impl ShortenService for HttpShortener {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn shorten(&self, original_url: &str) -> Result<String, TransportError> {
        let request = ShortenRequest {
            original_url: original_url.to_string(),
        };
        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        let body: ShortenResponse = response
            .json()
            .await
            .map_err(|e| TransportError::MalformedResponse(e.to_string()))?;
        debug!(short_url = %body.short_url, "Shortening service replied");
        Ok(body.short_url)
    }
}
