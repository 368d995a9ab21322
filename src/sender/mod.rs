//! Outbound message delivery
//!
//! The conversation core only knows the `MessageSender` capability; the
//! provider-specific plumbing lives in the thin implementations here:
//! - `Dialog360Sender`: 360dialog WhatsApp Cloud API
//! - `TwilioSender`: Twilio WhatsApp messaging

pub mod dialog360;
pub mod twilio;

pub use dialog360::Dialog360Sender;
pub use twilio::TwilioSender;

use crate::config::ProviderConfig;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Result of one delivery attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Provider-assigned message id, when the provider returns one
    pub message_id: Option<String>,
}

/// Outbound chat delivery capability.
///
/// Implementations must surface failures as errors; a silent no-op would let
/// the conversation advance while the reporter sees nothing. One attempt per
/// call, no internal retries.
#[async_trait::async_trait]
pub trait MessageSender: Send + Sync {
    /// Deliver one text message to the given identity.
    async fn send(&self, identity: &str, body: &str) -> Result<DeliveryReceipt>;

    /// Provider name for logging.
    fn name(&self) -> &str;
}

/// Message provider factory.
pub struct SenderFactory;

impl SenderFactory {
    /// Create the provider implementation named by the configuration.
    pub fn create(config: &ProviderConfig) -> Result<Arc<dyn MessageSender>> {
        match config.kind.as_str() {
            "dialog360" => Ok(Arc::new(Dialog360Sender::new(config)?)),
            "twilio" => Ok(Arc::new(TwilioSender::new(config)?)),
            other => anyhow::bail!("Unsupported message provider: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_config(kind: &str) -> ProviderConfig {
        ProviderConfig {
            kind: kind.to_string(),
            api_key: Some("key".to_string()),
            account_sid: Some("AC123".to_string()),
            auth_token: Some("token".to_string()),
            from_number: Some("14155238886".to_string()),
            country_code: "964".to_string(),
            send_timeout_ms: 10_000,
        }
    }

    #[test]
    fn test_factory_builds_each_provider() {
        assert_eq!(
            SenderFactory::create(&provider_config("dialog360"))
                .unwrap()
                .name(),
            "dialog360"
        );
        assert_eq!(
            SenderFactory::create(&provider_config("twilio"))
                .unwrap()
                .name(),
            "twilio"
        );
    }

    #[test]
    fn test_factory_rejects_unknown_provider() {
        assert!(SenderFactory::create(&provider_config("smoke-signals")).is_err());
    }

    #[test]
    fn test_dialog360_requires_api_key() {
        let mut config = provider_config("dialog360");
        config.api_key = None;
        assert!(Dialog360Sender::new(&config).is_err());
    }

    #[test]
    fn test_twilio_requires_credentials() {
        let mut config = provider_config("twilio");
        config.account_sid = None;
        assert!(TwilioSender::new(&config).is_err());
    }
}
