//! Broadcast fan-out
//!
//! Writes one serialized envelope to every live subscriber. Best-effort: a
//! write failure to one subscriber evicts it and never interrupts delivery
//! to the rest. No acknowledgment, retry, or cross-call ordering guarantee.

use std::sync::Arc;

use crate::hub::protocol::Envelope;
use crate::hub::registry::ConnectionRegistry;

/// Fans envelopes out to every subscriber in the registry
pub struct EventHub {
    registry: Arc<ConnectionRegistry>,
}

impl EventHub {
    pub fn new(registry: Arc<ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// Serialize `envelope` once and send it to every subscriber registered
    /// at the moment of the call. Returns how many subscribers it reached.
    ///
    /// Subscribers whose channel is closed are evicted as a side effect.
    pub fn broadcast(&self, envelope: &Envelope) -> usize {
        let frame = envelope.to_frame();

        let mut delivered = 0;
        let mut dead = Vec::new();
        self.registry.for_each(|id, sender| {
            if sender.send(frame.clone()).is_ok() {
                delivered += 1;
            } else {
                dead.push(id);
            }
        });

        for id in dead {
            self.registry.remove(id);
            tracing::debug!("Evicted closed subscriber {}", id);
        }

        delivered
    }
}
