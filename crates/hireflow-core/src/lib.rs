//! hireflow-core
//!
//! Applicant triage and interview-round tracking for a recruiting workflow.
//!
//! # Modules
//! - **domain**: records, state containers and errors (applicants, decision
//!   ledger, round board, scheduler dialog, job postings, events)
//! - **ports**: seams for time, ids, scoring, async evaluation and events
//! - **impls**: random/fixed scorers, simulated evaluators, event sinks
//! - **app**: the triage workflow, its builder and evaluation slots
//! - **config**: `TriageConfig`
//! - **seed**: sample applicants, rounds and job postings

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod seed;

pub use app::{BuildError, EvaluationSlot, EvaluationState, TriageBuilder, TriageWorkflow};
pub use config::{ConfigError, TriageConfig};
