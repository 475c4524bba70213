mod proptest_fsm;

use super::client::{ClientEvent, EventBuffer, TextClient};
use super::types::KeyEvent;
use super::InputController;

pub(super) fn active() -> InputController<EventBuffer> {
    let mut controller = InputController::new();
    controller.activate(EventBuffer::new());
    controller
}

// Helper: simulate typing a string one character at a time
pub(super) fn type_string<C: TextClient>(controller: &mut InputController<C>, s: &str) -> Vec<bool> {
    s.chars()
        .map(|ch| controller.handle_key(KeyEvent::text(&ch.to_string())))
        .collect()
}

pub(super) fn take_events(controller: &mut InputController<EventBuffer>) -> Vec<ClientEvent> {
    controller
        .client_mut()
        .map(EventBuffer::take_events)
        .unwrap_or_default()
}

pub(super) fn marked(text: &str) -> ClientEvent {
    ClientEvent::SetMarkedText {
        text: text.to_string(),
        caret: text.chars().count(),
    }
}

pub(super) fn inserted(text: &str) -> ClientEvent {
    ClientEvent::InsertText {
        text: text.to_string(),
    }
}

/// Minimal text field: committed text plus a replaceable pre-edit region.
#[derive(Debug, Default)]
pub(super) struct Document {
    pub text: String,
    pub marked: String,
    pub inserts: usize,
}

impl Document {
    /// What the user sees on screen.
    pub fn visible(&self) -> String {
        format!("{}{}", self.text, self.marked)
    }

    /// Host-side handling of a key the controller did not consume.
    pub fn native_backspace(&mut self) {
        self.text.pop();
    }
}

impl TextClient for Document {
    fn set_marked_text(&mut self, text: &str, _caret: usize) {
        self.marked = text.to_string();
    }

    fn insert_text(&mut self, text: &str) {
        // Insertion replaces any marked range.
        self.marked.clear();
        self.text.push_str(text);
        self.inserts += 1;
    }
}
