//! Ports - abstraction layer.
//!
//! Each trait hides something the state containers must not depend on
//! directly: wall-clock time, id generation, randomness, simulated AI calls
//! and notification delivery.

pub mod clock;
pub mod evaluator;
pub mod event_sink;
pub mod id_generator;
pub mod scorer;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::evaluator::{DocumentExtractor, SkillEvaluator};
pub use self::event_sink::EventSink;
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::scorer::{MatchScorer, ScoringInput};
