//! EventSink implementations.

use std::sync::{Mutex, PoisonError};

use log::info;

use crate::domain::DomainEvent;
use crate::ports::EventSink;

/// Collects every event in memory. Used by tests and the demo CLI.
#[derive(Debug, Default)]
pub struct InMemoryEventSink {
    events: Mutex<Vec<DomainEvent>>,
}

impl InMemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn take(&self) -> Vec<DomainEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl EventSink for InMemoryEventSink {
    fn emit(&self, event: DomainEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

/// Writes each event to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn emit(&self, event: DomainEvent) {
        match serde_json::to_string(&event) {
            Ok(json) => info!("{}: {json}", event.name()),
            Err(_) => info!("{}: {event:?}", event.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn emit(&self, _event: DomainEvent) {}
}
