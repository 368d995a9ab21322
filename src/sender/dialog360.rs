use super::{DeliveryReceipt, MessageSender};
use crate::config::ProviderConfig;
use crate::text;
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::info;

const MESSAGES_URL: &str = "https://waba-v2.360dialog.io/v1/messages";

/// 360dialog WhatsApp Cloud API sender.
pub struct Dialog360Sender {
    client: reqwest::Client,
    api_key: String,
    country_code: String,
}

impl Dialog360Sender {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .context("provider.api_key is required for the dialog360 provider")?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.send_timeout_ms))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key,
            country_code: config.country_code.clone(),
        })
    }
}

#[async_trait::async_trait]
impl MessageSender for Dialog360Sender {
    async fn send(&self, identity: &str, body: &str) -> Result<DeliveryReceipt> {
        let to = text::canonical_phone(identity, &self.country_code);

        let payload = serde_json::json!({
            "messaging_product": "whatsapp",
            "to": to,
            "type": "text",
            "text": { "body": body },
        });

        let response = self
            .client
            .post(MESSAGES_URL)
            .header("D360-API-KEY", &self.api_key)
            .json(&payload)
            .send()
            .await
            .context("360dialog request failed")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            anyhow::bail!("360dialog rejected message ({status}): {detail}");
        }

        let reply: serde_json::Value = response
            .json()
            .await
            .context("Failed to decode 360dialog response")?;
        let message_id = reply["messages"][0]["id"].as_str().map(str::to_string);

        info!("Delivered message to {} via 360dialog", to);

        Ok(DeliveryReceipt { message_id })
    }

    fn name(&self) -> &str {
        "dialog360"
    }
}
