use tracing::{debug, warn};

use super::client::TextClient;
use super::InputController;

impl<C: TextClient> InputController<C> {
    /// Insert whatever is composing as final text. Returns true if anything
    /// was inserted.
    pub(super) fn flush_composition(&mut self) -> bool {
        if !self.composer.has_composition() {
            return false;
        }
        let committed = self.composer.finish_composition();
        if committed.is_empty() {
            return false;
        }
        debug!(%committed, "flush composition");
        self.clear_marked();
        self.insert(&committed);
        true
    }

    /// Host-requested commit (IMKit `commitComposition`).
    pub fn commit_composition(&mut self) {
        if !self.is_active() {
            warn!("commit_composition without an active session");
            return;
        }
        self.flush_composition();
    }

    /// Host-requested cancel: the pending syllable is dropped, not inserted.
    pub fn cancel_composition(&mut self) {
        if !self.is_active() {
            warn!("cancel_composition without an active session");
            return;
        }
        let had_composition = self.composer.has_composition();
        self.composer.reset();
        if had_composition {
            self.clear_marked();
        }
    }
}
