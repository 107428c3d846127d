//! Errors - one enum per concern.
//!
//! Every error here is recoverable by the caller: validation failures are
//! shown inline and the user retries. Nothing in the triage workflow is fatal.

use chrono::NaiveDate;
use thiserror::Error;

use super::ids::{ApplicantId, RoundKey};

/// Form input that cannot be accepted as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field '{0}' is missing")]
    MissingField(&'static str),

    #[error("interview date {date} is before today ({today})")]
    DateInPast { date: NaiveDate, today: NaiveDate },

    #[error("'{0}' is not an offered time slot")]
    InvalidTimeSlot(String),

    #[error("{0} minutes is not an offered interview duration")]
    InvalidDuration(u32),
}

/// Round board configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("unknown interview round '{0}'")]
    UnknownRound(RoundKey),

    #[error("interview round '{0}' is configured twice")]
    DuplicateRound(RoundKey),

    #[error("a board needs at least one interview round")]
    NoRounds,

    #[error("applicant '{0}' is listed in more than one round")]
    ApplicantInTwoRounds(ApplicantId),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("scheduler dialog is not open")]
    Closed,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Failures of the combined accept / schedule / reject workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriageError {
    #[error("unknown applicant '{0}'")]
    UnknownApplicant(ApplicantId),

    #[error(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Failures of simulated evaluation and extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("document has no readable content")]
    EmptyDocument,

    #[error("evaluation was cancelled")]
    Cancelled,

    #[error("evaluation failed: {0}")]
    Failed(String),
}
