/// Fire-and-forget delivery of bridge messages to the host.
use std::sync::mpsc;

use anyhow::{Context, Result};

use crate::message::BridgeMessage;

/// The one-way outbound channel capability supplied by the host.
pub trait BridgeTransport {
    /// Delivers one JSON-encoded message to the host.
    ///
    /// # Errors
    ///
    /// Returns an error if the host side is gone or refuses the message.
    /// The sender does not retry.
    fn post(&mut self, message: &str) -> Result<()>;
}

/// Sends notifications over an injected transport.
///
/// Delivery is fire-and-forget: no confirmation, no queueing, no retry.
/// When no transport is attached, every send is dropped silently.
pub struct Bridge {
    transport: Option<Box<dyn BridgeTransport>>,
}

impl std::fmt::Debug for Bridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bridge")
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl Bridge {
    /// Creates a bridge over the given transport.
    pub fn new(transport: Box<dyn BridgeTransport>) -> Self {
        Self {
            transport: Some(transport),
        }
    }

    /// Creates a bridge with no transport attached; all sends are dropped.
    pub fn disconnected() -> Self {
        Self { transport: None }
    }

    /// Returns true if a transport is attached.
    pub fn is_connected(&self) -> bool {
        self.transport.is_some()
    }

    /// Encodes and posts a notification.
    ///
    /// Transport absence and post failures are swallowed; the message is
    /// simply lost.
    pub fn send(&mut self, message: &BridgeMessage) {
        let Some(transport) = self.transport.as_mut() else {
            tracing::debug!(
                "no bridge transport attached; dropping {} message",
                message.message_type()
            );
            return;
        };

        match serde_json::to_string(message) {
            Ok(json) => {
                if let Err(e) = transport.post(&json) {
                    tracing::warn!("failed to post {} message: {e}", message.message_type());
                }
            }
            Err(e) => {
                tracing::warn!("failed to encode {} message: {e}", message.message_type());
            }
        }
    }
}

/// Transport backed by a std mpsc channel, for headless hosts and tests.
pub struct ChannelTransport {
    sender: mpsc::Sender<String>,
}

impl ChannelTransport {
    /// Creates the transport and the receiving end the host reads from.
    pub fn new() -> (Self, mpsc::Receiver<String>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender }, receiver)
    }
}

impl BridgeTransport for ChannelTransport {
    fn post(&mut self, message: &str) -> Result<()> {
        self.sender
            .send(message.to_string())
            .context("bridge receiver disconnected")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_over_channel() {
        let (transport, receiver) = ChannelTransport::new();
        let mut bridge = Bridge::new(Box::new(transport));
        assert!(bridge.is_connected());

        bridge.send(&BridgeMessage::code_changed("abc"));

        let json = receiver.try_recv().unwrap();
        assert_eq!(json, r#"{"type":"CodeChanged","payload":"abc"}"#);
    }

    #[test]
    fn test_disconnected_bridge_drops_silently() {
        let mut bridge = Bridge::disconnected();
        assert!(!bridge.is_connected());
        // Must not panic or error; the message is simply lost.
        bridge.send(&BridgeMessage::editor_ready());
        bridge.send(&BridgeMessage::code_changed("x"));
    }

    #[test]
    fn test_post_failure_is_swallowed() {
        let (transport, receiver) = ChannelTransport::new();
        let mut bridge = Bridge::new(Box::new(transport));
        drop(receiver);
        // Receiver is gone; send must still return without panicking.
        bridge.send(&BridgeMessage::code_changed("x"));
    }

    #[test]
    fn test_messages_arrive_in_send_order() {
        let (transport, receiver) = ChannelTransport::new();
        let mut bridge = Bridge::new(Box::new(transport));

        bridge.send(&BridgeMessage::editor_ready());
        bridge.send(&BridgeMessage::code_changed("a"));
        bridge.send(&BridgeMessage::code_changed("ab"));

        let types: Vec<String> = receiver
            .try_iter()
            .map(|json| {
                let parsed: BridgeMessage = serde_json::from_str(&json).unwrap();
                parsed.message_type().to_string()
            })
            .collect();
        assert_eq!(types, ["EditorReady", "CodeChanged", "CodeChanged"]);
    }
}
