//! Change notification for the presentation layer
//!
//! Every store emits through a [`ChangeNotifier`] after each successful
//! mutation. Views register a callback and re-render when it fires; tests
//! can instead compare [`ChangeNotifier::version`] snapshots. Listeners run
//! synchronously on the single UI writer, so no locking is involved.

/// Handle returned by [`ChangeNotifier::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut()>;

#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
    version: u64,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; no-op if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    /// Bump the version and invoke every listener. Called by the owning
    /// store after each successful mutation.
    pub fn emit(&mut self) {
        self.version += 1;
        for (_, listener) in &mut self.listeners {
            listener();
        }
    }

    /// Monotonic mutation counter, starting at 0.
    pub fn version(&self) -> u64 {
        self.version
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .field("version", &self.version)
            .finish()
    }
}
