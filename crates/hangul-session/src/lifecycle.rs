use tracing::{debug, warn};

use super::client::TextClient;
use super::InputController;

impl<C: TextClient> InputController<C> {
    /// Attach `client` and start from an empty composition.
    ///
    /// Hosts sometimes activate again without deactivating first; the
    /// previous client is flushed, released and returned in that case.
    pub fn activate(&mut self, client: C) -> Option<C> {
        let previous = if self.is_active() {
            warn!("activate while already active; releasing previous client");
            self.deactivate()
        } else {
            None
        };
        self.composer.reset();
        self.client = Some(client);
        debug!("session activated");
        previous
    }

    /// Flush pending text into the client, then release it.
    pub fn deactivate(&mut self) -> Option<C> {
        if !self.is_active() {
            warn!("deactivate without an active session");
            self.composer.reset();
            return None;
        }
        self.flush_composition();
        self.composer.reset();
        debug!("session deactivated");
        self.client.take()
    }
}
