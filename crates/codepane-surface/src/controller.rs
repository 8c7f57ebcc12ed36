/// The editor surface controller: orchestrates re-render and sync.
use codepane_bridge::{Bridge, BridgeMessage};
use codepane_highlight::Highlighter;

use crate::lines::{gutter_markup, line_count};
use crate::regions::{Gutter, Overlay, TextInput};

/// Literal inserted for a Tab key press.
const TAB_SPACES: &str = "  ";

/// Orchestrates the input widget, overlay, gutter, and bridge.
///
/// All collaborators are injected at construction; the controller owns no
/// text state of its own and re-reads the input widget's buffer on every
/// operation. Construction wires the surface and emits the one-time
/// `EditorReady` notification. A constructed controller is live for its
/// whole lifetime; there is no teardown.
pub struct EditorController<I, O, G> {
    input: I,
    overlay: O,
    gutter: G,
    highlighter: Highlighter,
    bridge: Bridge,
}

impl<I, O, G> EditorController<I, O, G>
where
    I: TextInput,
    O: Overlay,
    G: Gutter,
{
    /// Wires the controller to its regions and announces readiness.
    ///
    /// `EditorReady` is emitted here, exactly once, before any user
    /// interaction, whether or not the bridge has a transport attached.
    /// Like the widget it drives, the controller does not render at
    /// construction; the first paint happens on the first
    /// [`on_content_change`](Self::on_content_change).
    pub fn new(
        input: I,
        overlay: O,
        gutter: G,
        highlighter: Highlighter,
        mut bridge: Bridge,
    ) -> Self {
        bridge.send(&BridgeMessage::editor_ready());
        Self {
            input,
            overlay,
            gutter,
            highlighter,
            bridge,
        }
    }

    /// Re-renders the overlay and gutter from the current buffer and
    /// notifies the host. Call after every buffer mutation.
    pub fn on_content_change(&mut self) {
        let code = self.input.value();
        tracing::trace!("content changed ({} bytes)", code.len());

        let mut markup = self.highlighter.highlight(&code);
        // Trailing break keeps the final line visible even when empty.
        markup.push_str("<br>");
        self.overlay.set_markup(&markup);

        self.gutter.set_markup(&gutter_markup(line_count(&code)));

        self.bridge.send(&BridgeMessage::code_changed(code));
    }

    /// Copies the input widget's scroll offsets onto the overlay (both
    /// axes) and the gutter (vertical only).
    pub fn on_scroll(&mut self) {
        let offset = self.input.scroll();
        self.overlay.set_scroll(offset);
        self.gutter.set_scroll_top(offset.top);
    }

    /// Handles a Tab key press. The host calls this in place of the
    /// platform's native Tab behavior (focus change); routing the key here
    /// is the suppression.
    ///
    /// Replaces the active selection (or inserts at the collapsed caret)
    /// with two spaces and collapses the caret after them.
    pub fn on_tab_key(&mut self) {
        let text = self.input.value();
        let (start, end) = self.input.selection();

        let byte_start = byte_offset(&text, start);
        let byte_end = byte_offset(&text, end);
        let mut edited = String::with_capacity(text.len() + TAB_SPACES.len());
        edited.push_str(&text[..byte_start]);
        edited.push_str(TAB_SPACES);
        edited.push_str(&text[byte_end..]);

        self.input.set_value(&edited);
        let caret = start + TAB_SPACES.len();
        self.input.select(caret, caret);

        self.on_content_change();
    }

    /// Host entry point: replaces the entire buffer, discarding prior
    /// content and any in-progress selection, then re-renders and
    /// notifies. The resulting `CodeChanged` is the only acknowledgment.
    pub fn set_code(&mut self, code: &str) {
        tracing::debug!("host replaced buffer ({} bytes)", code.len());
        self.input.set_value(code);
        self.on_content_change();
    }

    /// The input widget.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Mutable access to the input widget, for hosts feeding edits.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// The overlay region.
    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    /// The gutter region.
    pub fn gutter(&self) -> &G {
        &self.gutter
    }
}

/// Byte offset of the `char_idx`-th character, clamped to the text length.
fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
