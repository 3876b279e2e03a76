//! Subscriber response stream
//!
//! Adapts one subscriber's channel into the SSE response body and ties its
//! registry entry to the stream's lifetime: when the transport closes and
//! axum drops the body, the subscriber is removed from the registry.

use std::convert::Infallible;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::response::sse::Event;
use futures_util::Stream;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::hub::{ConnectionRegistry, SubscriberId};

/// SSE body for one subscriber connection
pub struct SubscriberStream {
    id: SubscriberId,
    registry: Arc<ConnectionRegistry>,
    rx: UnboundedReceiver<String>,
}

impl SubscriberStream {
    pub fn new(
        id: SubscriberId,
        registry: Arc<ConnectionRegistry>,
        rx: UnboundedReceiver<String>,
    ) -> Self {
        Self { id, registry, rx }
    }
}

impl Stream for SubscriberStream {
    type Item = std::result::Result<Event, Infallible>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx
            .poll_recv(cx)
            .map(|frame| frame.map(|data| Ok(Event::default().data(data))))
    }
}

impl Drop for SubscriberStream {
    fn drop(&mut self) {
        // Removal is idempotent; the hub may already have evicted this id
        // after a failed write.
        if self.registry.remove(self.id) {
            tracing::info!("Subscriber {} disconnected", self.id);
        }
    }
}
