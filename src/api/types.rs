use hangul_session::ClientEvent;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum HangulError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Event-driven response from handle_key / commit / lifecycle calls.
#[derive(Debug, Default, uniffi::Record)]
pub struct HangulKeyResponse {
    pub consumed: bool,
    /// Client operations, in the order the host must apply them.
    pub events: Vec<HangulEvent>,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum HangulEvent {
    /// Replace the marked range; an empty `text` removes it.
    SetMarkedText { text: String, caret: u32 },
    InsertText { text: String },
}

impl From<ClientEvent> for HangulEvent {
    fn from(event: ClientEvent) -> Self {
        match event {
            ClientEvent::SetMarkedText { text, caret } => HangulEvent::SetMarkedText {
                text,
                caret: u32::try_from(caret).unwrap_or(u32::MAX),
            },
            ClientEvent::InsertText { text } => HangulEvent::InsertText { text },
        }
    }
}

pub(super) fn convert_to_events(consumed: bool, events: Vec<ClientEvent>) -> HangulKeyResponse {
    HangulKeyResponse {
        consumed,
        events: events.into_iter().map(HangulEvent::from).collect(),
    }
}
