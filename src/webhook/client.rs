//! src/webhook/client.rs

use async_trait::async_trait;
use reqwest::Client;

use crate::config::WebhookSettings;
use crate::webhook::{Relay, WebhookPayload};

pub struct WebhookClient {
    http_client: Client,
    url: String,
}

impl WebhookClient {
    pub fn new(settings: WebhookSettings) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout_ms) = settings.timeout_ms {
            builder = builder.timeout(std::time::Duration::from_millis(timeout_ms));
        }

        Ok(Self {
            http_client: builder.build()?,
            url: settings.url,
        })
    }
}

#[async_trait]
impl Relay for WebhookClient {
    /// Posts `payload` as JSON. Only transport failures are errors, the
    /// webhook's status and body are never looked at.
    #[tracing::instrument(name = "Relaying booking to the webhook", skip(self, payload))]
    async fn deliver(&self, payload: &WebhookPayload<'_>) -> Result<(), anyhow::Error> {
        self.http_client
            .post(&self.url)
            .json(payload)
            .send()
            .await?;

        Ok(())
    }
}
