//! Event hand-off to the transport layer.
//!
//! Batching, retries and network delivery happen behind [`EventSink`].

use crate::model::CapturedEvent;

/// Receives captured events.
pub trait EventSink {
    /// Accept one event. Delivery failures are the sink's own concern.
    fn enqueue(&mut self, event: CapturedEvent);
}

/// Buffers events in memory until drained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySink {
    events: Vec<CapturedEvent>,
}

impl MemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffered events, oldest first.
    pub fn events(&self) -> &[CapturedEvent] {
        &self.events
    }

    /// Take all buffered events, oldest first.
    pub fn drain(&mut self) -> Vec<CapturedEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for MemorySink {
    fn enqueue(&mut self, event: CapturedEvent) {
        self.events.push(event);
    }
}

impl<K: EventSink + ?Sized> EventSink for &mut K {
    fn enqueue(&mut self, event: CapturedEvent) {
        (**self).enqueue(event);
    }
}
