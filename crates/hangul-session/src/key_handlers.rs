use tracing::{debug_span, warn};

use hangul_core::CompositionResult;

use super::client::TextClient;
use super::types::{EventKind, HostEvent, KeyEvent};
use super::InputController;

impl<C: TextClient> InputController<C> {
    /// Process a raw host event. Returns true if the event was consumed;
    /// false hands it back to the host.
    pub fn handle_event(&mut self, event: &HostEvent) -> bool {
        if event.kind != EventKind::KeyDown {
            return false;
        }
        let key = KeyEvent::classify(event.key_code, &event.text, event.flags, &self.settings);
        self.handle_key(key)
    }

    /// Process a classified key-down event.
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        let _span = debug_span!("handle_key", ?event).entered();

        if !self.is_active() {
            warn!("key event without an active session");
            return false;
        }

        match event {
            // Finish the syllable, then let the host act on the key.
            KeyEvent::Special(_) | KeyEvent::ModifiedKey => {
                self.flush_composition();
                false
            }
            KeyEvent::Backspace => self.handle_backspace(),
            KeyEvent::Space => self.handle_space(),
            KeyEvent::Text { ref text } => self.handle_text(text),
            KeyEvent::Remapped { ref text } => self.handle_remapped(text),
        }
    }

    fn handle_backspace(&mut self) -> bool {
        if !self.composer.has_composition() {
            return false;
        }
        match self.composer.delete_backward() {
            Some(remaining) => self.mark(&remaining),
            None => self.clear_marked(),
        }
        // Consumed even when emptied, so the host does not also delete a
        // committed character.
        true
    }

    fn handle_space(&mut self) -> bool {
        if !self.composer.has_composition() {
            return false;
        }
        let mut committed = self.composer.finish_composition();
        committed.push(' ');
        self.clear_marked();
        self.insert(&committed);
        true
    }

    /// Only the first character of `text` is composed.
    fn handle_text(&mut self, text: &str) -> bool {
        let Some(key) = text.chars().next() else {
            return false;
        };

        match self.composer.process(key) {
            CompositionResult::Composing(text) => {
                self.mark(&text);
                true
            }
            CompositionResult::Committed {
                committed,
                composing,
            } => {
                self.clear_marked();
                self.insert(&committed);
                if let Some(next) = composing {
                    self.mark(&next);
                }
                true
            }
            CompositionResult::Passthrough => false,
        }
    }

    /// A single remapped character goes through the composer like typed
    /// text. Anything it does not take, and any longer remap, ends the
    /// syllable and is inserted whole.
    fn handle_remapped(&mut self, text: &str) -> bool {
        let mut chars = text.chars();
        if chars.next().is_none() {
            return false;
        }
        if chars.next().is_none() && self.handle_text(text) {
            return true;
        }
        let mut committed = self.composer.finish_composition();
        committed.push_str(text);
        self.clear_marked();
        self.insert(&committed);
        true
    }
}
