use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hangul_session::{EventBuffer, HostEvent, InputController, SessionRegistry, SessionToken};

use super::types::convert_to_events;
use super::HangulKeyResponse;

/// Owns every input session of the input method process.
///
/// Sessions are addressed by opaque `u64` tokens. A token that is unknown
/// or already closed yields an empty, not-consumed response.
#[derive(uniffi::Object)]
pub struct HangulEngine {
    sessions: Mutex<SessionRegistry<EventBuffer>>,
}

impl HangulEngine {
    fn sessions(&self) -> MutexGuard<'_, SessionRegistry<EventBuffer>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against the session and collect the events it produced.
    fn with_session(
        &self,
        token: u64,
        f: impl FnOnce(&mut InputController<EventBuffer>) -> bool,
    ) -> HangulKeyResponse {
        let mut sessions = self.sessions();
        let Some(controller) = sessions.get_mut(SessionToken::from_raw(token)) else {
            return HangulKeyResponse::default();
        };
        let consumed = f(controller);
        let events = controller
            .client_mut()
            .map(EventBuffer::take_events)
            .unwrap_or_default();
        convert_to_events(consumed, events)
    }
}

fn released_events(client: Option<EventBuffer>) -> HangulKeyResponse {
    let events = client.map(|mut c| c.take_events()).unwrap_or_default();
    convert_to_events(false, events)
}

#[uniffi::export]
impl HangulEngine {
    #[uniffi::constructor]
    fn new() -> Arc<Self> {
        Arc::new(Self {
            sessions: Mutex::new(SessionRegistry::new()),
        })
    }

    fn open_session(&self) -> u64 {
        self.sessions().open().to_raw()
    }

    /// Start a session. If the host skipped `deactivate`, the response
    /// carries the flush of the previous activation.
    fn activate(&self, token: u64) -> HangulKeyResponse {
        let mut sessions = self.sessions();
        match sessions.get_mut(SessionToken::from_raw(token)) {
            Some(controller) => released_events(controller.activate(EventBuffer::new())),
            None => HangulKeyResponse::default(),
        }
    }

    fn deactivate(&self, token: u64) -> HangulKeyResponse {
        let mut sessions = self.sessions();
        match sessions.get_mut(SessionToken::from_raw(token)) {
            Some(controller) => released_events(controller.deactivate()),
            None => HangulKeyResponse::default(),
        }
    }

    fn handle_key(&self, token: u64, key_code: u16, text: String, flags: u8) -> HangulKeyResponse {
        let event = HostEvent::key_down(key_code, &text, flags);
        self.with_session(token, |c| c.handle_event(&event))
    }

    fn commit_composition(&self, token: u64) -> HangulKeyResponse {
        self.with_session(token, |c| {
            c.commit_composition();
            false
        })
    }

    fn cancel_composition(&self, token: u64) -> HangulKeyResponse {
        self.with_session(token, |c| {
            c.cancel_composition();
            false
        })
    }

    fn composing_text(&self, token: u64) -> String {
        self.sessions()
            .get(SessionToken::from_raw(token))
            .map(|c| c.composing_text())
            .unwrap_or_default()
    }

    fn is_composing(&self, token: u64) -> bool {
        self.sessions()
            .get(SessionToken::from_raw(token))
            .is_some_and(|c| c.is_composing())
    }

    /// Deactivate and free the session; the response carries any flush.
    fn close_session(&self, token: u64) -> HangulKeyResponse {
        released_events(self.sessions().close(SessionToken::from_raw(token)))
    }

    fn session_count(&self) -> u32 {
        u32::try_from(self.sessions().len()).unwrap_or(u32::MAX)
    }
}
