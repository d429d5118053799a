//! EventSink port - lifecycle event recording.

use std::sync::Mutex;

use crate::domain::PostEvent;

/// Records domain events.
///
/// A passive collaborator: the engine emits on every phase transition and
/// terminal outcome, and never lets the sink influence control flow.
/// Emission is infallible from the caller's perspective.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &PostEvent);
}

/// Sink that drops everything. The default when nobody is listening.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&self, _event: &PostEvent) {}
}

/// Sink that keeps every event in memory, for assertions in tests and for
/// embedders that want to inspect a run after the fact.
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<PostEvent>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn events(&self) -> Vec<PostEvent> {
        self.events.lock().expect("sink lock poisoned").clone()
    }
}

impl EventSink for CollectingSink {
    fn emit(&self, event: &PostEvent) {
        self.events
            .lock()
            .expect("sink lock poisoned")
            .push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_sink_records_in_order() {
        let sink = CollectingSink::new();
        sink.emit(&PostEvent::RunCompleted {
            processed: 1,
            posted: 1,
            failed: 0,
        });
        sink.emit(&PostEvent::RunCompleted {
            processed: 2,
            posted: 1,
            failed: 1,
        });

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            PostEvent::RunCompleted {
                processed: 2,
                posted: 1,
                failed: 1,
            }
        );
    }
}
