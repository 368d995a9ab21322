use serde::{Deserialize, Serialize};

/// Inbound webhook payload, WhatsApp Cloud API shape (as delivered by
/// 360dialog). Only the parts the service reads are modeled; everything
/// else in the payload is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub entry: Vec<WebhookEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookEntry {
    #[serde(default)]
    pub changes: Vec<WebhookChange>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookChange {
    #[serde(default)]
    pub value: WebhookValue,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookValue {
    #[serde(default)]
    pub messages: Vec<InboundMessage>,
}

/// One inbound message; only `type == "text"` entries carry a text body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Sender phone number
    pub from: String,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBody {
    pub body: String,
}

impl WebhookPayload {
    /// Text messages in delivery order as (sender, body); other message
    /// kinds (media, reactions, statuses) are skipped.
    pub fn text_messages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entry
            .iter()
            .flat_map(|entry| entry.changes.iter())
            .flat_map(|change| change.value.messages.iter())
            .filter(|message| message.kind == "text")
            .filter_map(|message| {
                message
                    .text
                    .as_ref()
                    .map(|text| (message.from.as_str(), text.body.as_str()))
            })
    }
}
