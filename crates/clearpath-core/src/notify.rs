//! Notification center: ordered queue of transient UI messages
//!
//! Auto-dismiss timing is owned by the presentation layer; the store only
//! guarantees that a late timer dismissing an already-closed toast is
//! harmless.

use shared_types::{Notification, NotificationKind};
use uuid::Uuid;

use crate::changes::ChangeNotifier;

#[derive(Default)]
pub struct NotificationCenter {
    queue: Vec<Notification>,
    pub changes: ChangeNotifier,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.queue
    }

    /// Append a notification and return its generated id.
    pub fn push(
        &mut self,
        kind: NotificationKind,
        title: Option<String>,
        message: &str,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        self.queue.push(Notification {
            id: id.clone(),
            kind,
            title,
            message: message.to_string(),
        });
        self.changes.emit();
        id
    }

    /// Remove by id; no-op when already removed, so a UI timer and a manual
    /// close can race without harm.
    pub fn dismiss(&mut self, id: &str) {
        let before = self.queue.len();
        self.queue.retain(|n| n.id != id);
        if self.queue.len() < before {
            self.changes.emit();
        }
    }
}
