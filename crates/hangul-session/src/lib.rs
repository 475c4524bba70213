//! Input-method session layer for Hangul composition.
//!
//! `InputController` owns one `HangulComposer` per text-client session,
//! classifies host key events, and writes marked and committed text into
//! the attached `TextClient`. The Swift frontend forwards IMKit callbacks
//! here through the root crate's API layer.

mod client;
mod commit;
mod key_handlers;
mod lifecycle;
mod registry;
mod types;

#[cfg(test)]
mod tests;

use hangul_core::settings::{settings, Settings};
use hangul_core::{CompositionState, HangulComposer};

pub use client::{ClientEvent, EventBuffer, TextClient};
pub use registry::{SessionRegistry, SessionToken};
pub use types::{
    key, EventKind, HostEvent, KeyEvent, SpecialKey, FLAG_HAS_MODIFIER, FLAG_OPTION, FLAG_SHIFT,
};

/// Mediates between host key events and one text client.
///
/// Inactive until `activate` hands it a client; every other call made
/// while inactive is a logged no-op.
pub struct InputController<C> {
    composer: HangulComposer,
    client: Option<C>,
    settings: Settings,
}

impl<C: TextClient> Default for InputController<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TextClient> InputController<C> {
    pub fn new() -> Self {
        Self::with_settings(settings().clone())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            composer: HangulComposer::new(),
            client: None,
            settings,
        }
    }

    pub fn is_active(&self) -> bool {
        self.client.is_some()
    }

    pub fn is_composing(&self) -> bool {
        self.composer.has_composition()
    }

    /// Pending pre-edit text (the host's "original string").
    pub fn composing_text(&self) -> String {
        self.composer.composing_text()
    }

    pub fn composition_state(&self) -> CompositionState {
        self.composer.state()
    }

    pub fn client(&self) -> Option<&C> {
        self.client.as_ref()
    }

    pub fn client_mut(&mut self) -> Option<&mut C> {
        self.client.as_mut()
    }

    fn mark(&mut self, text: &str) {
        if let Some(client) = self.client.as_mut() {
            client.set_marked_text(text, text.chars().count());
        }
    }

    fn clear_marked(&mut self) {
        if let Some(client) = self.client.as_mut() {
            client.set_marked_text("", 0);
        }
    }

    fn insert(&mut self, text: &str) {
        if let Some(client) = self.client.as_mut() {
            client.insert_text(text);
        }
    }
}
