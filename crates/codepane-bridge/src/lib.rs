//! One-way message bridge from the editor surface to its host application.
//!
//! Messages are fire-and-forget JSON notifications. The transport is a
//! capability injected by the host; when none is attached, sends are
//! silently dropped.

pub mod message;
pub mod transport;

pub use message::{BridgeMessage, EmptyPayload};
pub use transport::{Bridge, BridgeTransport, ChannelTransport};
