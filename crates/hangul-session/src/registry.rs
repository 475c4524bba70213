use tracing::{debug, warn};

use super::client::TextClient;
use super::InputController;

/// Opaque handle to a session in a [`SessionRegistry`].
///
/// The generation changes every time a slot is reused, so a token kept
/// past `close` never reaches the next session in that slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken {
    index: u32,
    generation: u32,
}

impl SessionToken {
    /// Pack into a single integer for FFI.
    pub fn to_raw(self) -> u64 {
        (u64::from(self.generation) << 32) | u64::from(self.index)
    }

    pub fn from_raw(raw: u64) -> Self {
        Self {
            index: raw as u32,
            generation: (raw >> 32) as u32,
        }
    }
}

struct Slot<C> {
    generation: u32,
    controller: Option<InputController<C>>,
}

/// Arena of sessions, one controller per text client.
pub struct SessionRegistry<C> {
    slots: Vec<Slot<C>>,
    free: Vec<u32>,
}

impl<C: TextClient> Default for SessionRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TextClient> SessionRegistry<C> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Open a new, inactive session.
    pub fn open(&mut self) -> SessionToken {
        self.insert(InputController::new())
    }

    pub fn insert(&mut self, controller: InputController<C>) -> SessionToken {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    controller: None,
                });
                (self.slots.len() - 1) as u32
            }
        };
        let slot = &mut self.slots[index as usize];
        slot.controller = Some(controller);
        let token = SessionToken {
            index,
            generation: slot.generation,
        };
        debug!(?token, "session opened");
        token
    }

    pub fn get(&self, token: SessionToken) -> Option<&InputController<C>> {
        self.slots
            .get(token.index as usize)
            .filter(|slot| slot.generation == token.generation)
            .and_then(|slot| slot.controller.as_ref())
    }

    pub fn get_mut(&mut self, token: SessionToken) -> Option<&mut InputController<C>> {
        let controller = self
            .slots
            .get_mut(token.index as usize)
            .filter(|slot| slot.generation == token.generation)
            .and_then(|slot| slot.controller.as_mut());
        if controller.is_none() {
            warn!(?token, "unknown or closed session token");
        }
        controller
    }

    /// Deactivate (flushing pending text) and free the session. Returns the
    /// released client, if the session was active.
    pub fn close(&mut self, token: SessionToken) -> Option<C> {
        let slot = self
            .slots
            .get_mut(token.index as usize)
            .filter(|slot| slot.generation == token.generation)?;
        let mut controller = slot.controller.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(token.index);
        debug!(?token, "session closed");
        controller.deactivate()
    }

    /// Number of open sessions.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
