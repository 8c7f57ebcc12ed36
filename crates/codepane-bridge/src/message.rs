/// Outbound notification model for the host bridge.
use serde::{Deserialize, Serialize};

/// Empty `payload` object for notifications that carry no data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyPayload {}

/// A notification sent from the editor surface to its hosting application.
///
/// Serializes as `{"type": "...", "payload": ...}`. Messages are not
/// retained after transmission and no acknowledgment is tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum BridgeMessage {
    /// Emitted exactly once, when the editor surface finishes wiring.
    EditorReady(EmptyPayload),
    /// Emitted after every buffer mutation, carrying the raw source text.
    CodeChanged(String),
}

impl BridgeMessage {
    /// The startup notification.
    pub fn editor_ready() -> Self {
        Self::EditorReady(EmptyPayload {})
    }

    /// A content notification carrying the current buffer text.
    pub fn code_changed(code: impl Into<String>) -> Self {
        Self::CodeChanged(code.into())
    }

    /// The wire-level `type` field of this message.
    pub fn message_type(&self) -> &'static str {
        match self {
            Self::EditorReady(_) => "EditorReady",
            Self::CodeChanged(_) => "CodeChanged",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_ready_wire_format() {
        let json = serde_json::to_string(&BridgeMessage::editor_ready()).unwrap();
        assert_eq!(json, r#"{"type":"EditorReady","payload":{}}"#);
    }

    #[test]
    fn test_code_changed_wire_format() {
        let json = serde_json::to_string(&BridgeMessage::code_changed("var x = 1;")).unwrap();
        assert_eq!(json, r#"{"type":"CodeChanged","payload":"var x = 1;"}"#);
    }

    #[test]
    fn test_code_changed_preserves_raw_text() {
        // Payload is the raw buffer text, not markup: quotes and newlines
        // survive JSON encoding.
        let message = BridgeMessage::code_changed("line1\n\"two\"");
        let json = serde_json::to_string(&message).unwrap();
        let parsed: BridgeMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, message);
    }

    #[test]
    fn test_message_type() {
        assert_eq!(BridgeMessage::editor_ready().message_type(), "EditorReady");
        assert_eq!(BridgeMessage::code_changed("").message_type(), "CodeChanged");
    }

    #[test]
    fn test_host_side_decode() {
        let parsed: BridgeMessage =
            serde_json::from_str(r#"{"type":"CodeChanged","payload":"abc"}"#).unwrap();
        assert_eq!(parsed, BridgeMessage::code_changed("abc"));
    }
}
