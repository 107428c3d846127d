//! Events - domain events emitted by the triage workflow.
//!
//! These replace the toast notifications of the recruiter screen: whatever
//! renders notifications subscribes through an `EventSink`.

use serde::{Deserialize, Serialize};

use super::ids::{ApplicantId, RoundKey, ScheduleId};
use super::schedule::ScheduleRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DomainEvent {
    /// Accept was clicked; the scheduler dialog is open for this applicant.
    AcceptRequested { applicant: ApplicantId },

    /// The scheduler dialog produced a record.
    InterviewScheduled {
        applicant: ApplicantId,
        schedule: ScheduleRecord,
    },

    /// The ledger recorded the accept. `round` is where the applicant was
    /// admitted, `None` if it was already on the board.
    ApplicantAccepted {
        applicant: ApplicantId,
        schedule: ScheduleId,
        round: Option<RoundKey>,
    },

    ApplicantRejected { applicant: ApplicantId },

    ApplicantMoved {
        applicant: ApplicantId,
        from: RoundKey,
        to: RoundKey,
    },

    RoundAdded { round: RoundKey, title: String },

    RoundUpdated { round: RoundKey },
}

impl DomainEvent {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            DomainEvent::AcceptRequested { .. } => "accept_requested",
            DomainEvent::InterviewScheduled { .. } => "interview_scheduled",
            DomainEvent::ApplicantAccepted { .. } => "applicant_accepted",
            DomainEvent::ApplicantRejected { .. } => "applicant_rejected",
            DomainEvent::ApplicantMoved { .. } => "applicant_moved",
            DomainEvent::RoundAdded { .. } => "round_added",
            DomainEvent::RoundUpdated { .. } => "round_updated",
        }
    }
}
