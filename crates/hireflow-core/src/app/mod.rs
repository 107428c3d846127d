//! App - state containers composed from the domain and the ports.
//!
//! - **TriageBuilder**: wiring and fail-fast validation
//! - **TriageWorkflow**: accept / schedule / reject, round board edits
//! - **EvaluationSlot**: one cancellable simulated async operation

pub mod builder;
pub mod evaluation;
pub mod triage;

pub use self::builder::{BuildError, TriageBuilder};
pub use self::evaluation::{EvaluationSlot, EvaluationState};
pub use self::triage::TriageWorkflow;
