/// The text-insertion point the controller writes into.
///
/// Borrowed from the host for the lifetime of an active session.
pub trait TextClient {
    /// Replace the whole pre-edit buffer with `text`, caret at `caret`
    /// characters from its start. An empty `text` clears the marking.
    fn set_marked_text(&mut self, text: &str, caret: usize);

    /// Insert finished text at the insertion point.
    fn insert_text(&mut self, text: &str);
}

impl<T: TextClient + ?Sized> TextClient for &mut T {
    fn set_marked_text(&mut self, text: &str, caret: usize) {
        (**self).set_marked_text(text, caret);
    }

    fn insert_text(&mut self, text: &str) {
        (**self).insert_text(text);
    }
}

impl<T: TextClient + ?Sized> TextClient for Box<T> {
    fn set_marked_text(&mut self, text: &str, caret: usize) {
        (**self).set_marked_text(text, caret);
    }

    fn insert_text(&mut self, text: &str) {
        (**self).insert_text(text);
    }
}

/// One client operation, in the order the controller issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    SetMarkedText { text: String, caret: usize },
    InsertText { text: String },
}

/// Client that records operations for a host to replay later.
#[derive(Debug, Default)]
pub struct EventBuffer {
    events: Vec<ClientEvent>,
}

impl EventBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ClientEvent] {
        &self.events
    }

    /// Drain recorded events, leaving the buffer empty.
    pub fn take_events(&mut self) -> Vec<ClientEvent> {
        std::mem::take(&mut self.events)
    }
}

impl TextClient for EventBuffer {
    fn set_marked_text(&mut self, text: &str, caret: usize) {
        self.events.push(ClientEvent::SetMarkedText {
            text: text.to_string(),
            caret,
        });
    }

    fn insert_text(&mut self, text: &str) {
        self.events.push(ClientEvent::InsertText {
            text: text.to_string(),
        });
    }
}
