//! Editor surface controller for codepane.
//!
//! Keeps an editable plain-text input, a read-only highlighted overlay,
//! and a line-number gutter in lockstep under edits, scrolling, and
//! host-initiated replacement, and notifies the host over the bridge.
//! The three UI regions are injected as trait objects the host implements;
//! ropey-backed in-memory implementations are provided for headless hosts
//! and tests.

pub mod controller;
pub mod lines;
pub mod memory;
pub mod regions;

pub use controller::EditorController;
pub use lines::{gutter_markup, line_count};
pub use memory::{MemoryGutter, MemoryOverlay, MemoryTextInput};
pub use regions::{Gutter, Overlay, ScrollOffset, TextInput};
