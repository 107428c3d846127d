//! EventSink port - where domain events go.

use crate::domain::DomainEvent;

pub trait EventSink: Send + Sync {
    fn emit(&self, event: DomainEvent);
}
