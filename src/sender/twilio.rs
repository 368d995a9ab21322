use super::{DeliveryReceipt, MessageSender};
use crate::config::ProviderConfig;
use crate::text;
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::info;

/// Twilio WhatsApp sender.
pub struct TwilioSender {
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
    country_code: String,
}

impl TwilioSender {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let account_sid = config
            .account_sid
            .clone()
            .context("provider.account_sid is required for the twilio provider")?;
        let auth_token = config
            .auth_token
            .clone()
            .context("provider.auth_token is required for the twilio provider")?;
        let from_number = config
            .from_number
            .clone()
            .context("provider.from_number is required for the twilio provider")?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.send_timeout_ms))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            account_sid,
            auth_token,
            from_number,
            country_code: config.country_code.clone(),
        })
    }

    fn messages_url(&self) -> String {
        format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.account_sid
        )
    }
}

#[async_trait::async_trait]
impl MessageSender for TwilioSender {
    async fn send(&self, identity: &str, body: &str) -> Result<DeliveryReceipt> {
        let to = format!(
            "whatsapp:+{}",
            text::canonical_phone(identity, &self.country_code)
        );
        let from = format!("whatsapp:+{}", self.from_number.trim_start_matches('+'));

        let params = [("From", from.as_str()), ("To", to.as_str()), ("Body", body)];

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await
            .context("Twilio request failed")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            anyhow::bail!("Twilio rejected message ({status}): {detail}");
        }

        let reply: serde_json::Value = response
            .json()
            .await
            .context("Failed to decode Twilio response")?;
        let message_id = reply["sid"].as_str().map(str::to_string);

        info!("Delivered message to {} via Twilio", to);

        Ok(DeliveryReceipt { message_id })
    }

    fn name(&self) -> &str {
        "twilio"
    }
}
