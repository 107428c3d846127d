//! Impls - port implementations.
//!
//! # Included
//! - **RandomScorer / FixedScorer**: score strategies
//! - **SimulatedEvaluator / SimulatedExtractor**: timer-backed mock AI calls
//! - **InMemoryEventSink / LogEventSink / NoopEventSink**: event delivery

pub mod event_sinks;
pub mod scorers;
pub mod simulated;

pub use self::event_sinks::{InMemoryEventSink, LogEventSink, NoopEventSink};
pub use self::scorers::{FixedScorer, RandomScorer};
pub use self::simulated::{SimulatedEvaluator, SimulatedExtractor};
