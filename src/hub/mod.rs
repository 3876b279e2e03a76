//! Subscriber hub
//!
//! Tracks live event-stream subscribers and fans search outcomes out to them.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                        SUBSCRIBER HUB                         │
//! ├───────────────────────────────────────────────────────────────┤
//! │                                                               │
//! │  ConnectionRegistry (RwLock)                                  │
//! │    subscriber_id ──► UnboundedSender<String>                  │
//! │                                                               │
//! │  EventHub::broadcast(envelope)                                │
//! │    - serialize once                                           │
//! │    - send to every registered sender                          │
//! │    - evict senders whose channel is closed                    │
//! │                                                               │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Delivery is best-effort: a dead subscriber never blocks delivery to the
//! rest, and nothing is retried or re-ordered. Subscribers are inserted by
//! the SSE handler, removed when their stream drops, and evicted when a
//! write fails.

pub mod broadcast;
pub mod protocol;
pub mod registry;

pub use broadcast::EventHub;
pub use protocol::Envelope;
pub use registry::{ConnectionRegistry, SubscriberId};
