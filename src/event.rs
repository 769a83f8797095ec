//! Typed chat-message event carried in the decrypted payload body.

use serde::Deserialize;

use crate::error::PushCryptoError;

/// The JSON event body a sealed payload decrypts to.
///
/// Timestamps and IDs stay as strings; the push pipeline forwards them,
/// it does not interpret them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageEvent {
    pub sender_id: String,
    pub recipient_id: String,
    pub transaction_id: String,
    pub group_id: String,
    pub message_id: String,
    pub collapse_id: String,
    pub message_type: String,
    pub message_body: String,
    pub sender_display_name: String,
    #[serde(default)]
    pub client_message_id: String,
    pub original_arrival_time: String,
    #[serde(default)]
    pub priority: String,
    pub version: String,
    /// Opaque per-message metadata, itself a JSON string on the wire.
    #[serde(default, rename = "acsChatMessageMetadata")]
    pub message_metadata: String,
}

/// Parse a decrypted payload body into a typed event.
pub fn parse_event(plaintext: &str) -> Result<ChatMessageEvent, PushCryptoError> {
    Ok(serde_json::from_str(plaintext)?)
}
