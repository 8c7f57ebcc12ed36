/// In-memory region implementations for headless hosts and tests.
use ropey::Rope;

use crate::regions::{Gutter, Overlay, ScrollOffset, TextInput};

/// A headless text-input widget backed by a rope buffer.
///
/// Mimics the native widget's editing behavior: typed text replaces the
/// active selection, edits happen at the caret, and selection offsets stay
/// clamped to the buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryTextInput {
    buffer: Rope,
    selection: (usize, usize),
    scroll: ScrollOffset,
}

impl MemoryTextInput {
    /// Creates an empty widget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a widget holding `text`, with the caret at the end.
    pub fn with_text(text: &str) -> Self {
        let buffer = Rope::from_str(text);
        let end = buffer.len_chars();
        Self {
            buffer,
            selection: (end, end),
            scroll: ScrollOffset::default(),
        }
    }

    /// Types `text` at the caret, replacing any active selection, and
    /// collapses the caret after the inserted text.
    pub fn insert_text(&mut self, text: &str) {
        let (start, end) = self.selection;
        self.buffer.remove(start..end);
        self.buffer.insert(start, text);
        let caret = start + text.chars().count();
        self.selection = (caret, caret);
    }

    /// Deletes the active selection, or the character before the caret.
    pub fn backspace(&mut self) {
        let (start, end) = self.selection;
        if start < end {
            self.buffer.remove(start..end);
            self.selection = (start, start);
        } else if start > 0 {
            self.buffer.remove(start - 1..start);
            self.selection = (start - 1, start - 1);
        }
    }

    /// Simulates the host scrolling the widget.
    pub fn set_scroll(&mut self, scroll: ScrollOffset) {
        self.scroll = scroll;
    }

    /// Number of characters in the buffer.
    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }
}

impl TextInput for MemoryTextInput {
    fn value(&self) -> String {
        self.buffer.to_string()
    }

    fn set_value(&mut self, text: &str) {
        self.buffer = Rope::from_str(text);
        let end = self.buffer.len_chars();
        self.selection = (end, end);
    }

    fn selection(&self) -> (usize, usize) {
        self.selection
    }

    fn select(&mut self, start: usize, end: usize) {
        let max = self.buffer.len_chars();
        let start = start.min(max);
        let end = end.min(max);
        self.selection = (start.min(end), start.max(end));
    }

    fn scroll(&self) -> ScrollOffset {
        self.scroll
    }
}

/// Captures the markup and scroll state written to the overlay region.
#[derive(Debug, Clone, Default)]
pub struct MemoryOverlay {
    markup: String,
    scroll: ScrollOffset,
}

impl MemoryOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last markup written by the controller.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// The last scroll offsets mirrored by the controller.
    pub fn scroll(&self) -> ScrollOffset {
        self.scroll
    }
}

impl Overlay for MemoryOverlay {
    fn set_markup(&mut self, markup: &str) {
        self.markup = markup.to_string();
    }

    fn set_scroll(&mut self, offset: ScrollOffset) {
        self.scroll = offset;
    }
}

/// Captures the markup and vertical scroll written to the gutter region.
#[derive(Debug, Clone, Default)]
pub struct MemoryGutter {
    markup: String,
    scroll_top: f32,
}

impl MemoryGutter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last line-number markup written by the controller.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// The last vertical offset mirrored by the controller.
    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }
}

impl Gutter for MemoryGutter {
    fn set_markup(&mut self, markup: &str) {
        self.markup = markup.to_string();
    }

    fn set_scroll_top(&mut self, top: f32) {
        self.scroll_top = top;
    }
}
