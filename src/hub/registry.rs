//! Connection registry
//!
//! Owns the set of live subscriber handles. Constructed once at startup and
//! shared by reference with the broadcast hub and the subscription endpoint;
//! no other component holds a long-lived handle to a subscriber.

use std::collections::HashMap;

use parking_lot::RwLock;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

/// Unique identifier for one subscriber connection
pub type SubscriberId = Uuid;

/// Registry of currently connected event-stream subscribers
#[derive(Default)]
pub struct ConnectionRegistry {
    subscribers: RwLock<HashMap<SubscriberId, UnboundedSender<String>>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a subscriber handle and return its id
    pub fn add(&self, sender: UnboundedSender<String>) -> SubscriberId {
        let id = Uuid::new_v4();
        self.subscribers.write().insert(id, sender);
        id
    }

    /// Remove a subscriber if present. Idempotent: removing an id that is
    /// already gone is a no-op and returns `false`.
    pub fn remove(&self, id: SubscriberId) -> bool {
        self.subscribers.write().remove(&id).is_some()
    }

    /// Visit every currently registered handle, in unspecified order.
    ///
    /// The read lock is held for the duration of the visit, so callbacks must
    /// not re-enter the registry; collect ids and call [`remove`] afterwards.
    ///
    /// [`remove`]: ConnectionRegistry::remove
    pub fn for_each(&self, mut f: impl FnMut(SubscriberId, &UnboundedSender<String>)) {
        for (id, sender) in self.subscribers.read().iter() {
            f(*id, sender);
        }
    }

    /// Number of currently registered subscribers
    pub fn len(&self) -> usize {
        self.subscribers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn test_add_and_remove() {
        let registry = ConnectionRegistry::new();
        let (tx, _rx) = mpsc::unbounded_channel();

        let id = registry.add(tx);
        assert_eq!(registry.len(), 1);

        assert!(registry.remove(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let registry = ConnectionRegistry::new();
        let (tx, _rx) = mpsc::unbounded_channel();

        let id = registry.add(tx);
        assert!(registry.remove(id));
        // Second removal of the same id is a no-op, not an error
        assert!(!registry.remove(id));
        assert!(!registry.remove(Uuid::new_v4()));
    }

    #[test]
    fn test_for_each_visits_every_handle_once() {
        let registry = ConnectionRegistry::new();
        let (tx_a, _rx_a) = mpsc::unbounded_channel();
        let (tx_b, _rx_b) = mpsc::unbounded_channel();
        registry.add(tx_a);
        registry.add(tx_b);

        let mut seen = Vec::new();
        registry.for_each(|id, _sender| seen.push(id));
        assert_eq!(seen.len(), 2);
        assert_ne!(seen[0], seen[1]);
    }
}
