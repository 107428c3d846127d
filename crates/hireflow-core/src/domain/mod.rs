//! Domain model: records, state containers and their errors.
//!
//! Everything here is plain owned data mutated through `&mut self`; no module
//! in `domain` touches the clock, randomness or the async runtime.

pub mod applicant;
pub mod board;
pub mod decision;
pub mod errors;
pub mod events;
pub mod ids;
pub mod job;
pub mod round;
pub mod schedule;
pub mod score;

pub use applicant::{Applicant, ScoreUpdate, rank_applicants, search_applicants};
pub use board::{MoveOutcome, Round, RoundBoard};
pub use decision::{DecisionCounts, DecisionLedger, DecisionStatus};
pub use errors::{BoardError, EvaluationError, SchedulerError, TriageError, ValidationError};
pub use events::DomainEvent;
pub use ids::{ApplicantId, RoundKey, ScheduleId};
pub use job::{
    DepartmentGroup, JobExtraction, JobFilter, JobPosting, RequiredSkill, SkillLevel,
    group_by_department, search_jobs,
};
pub use round::{
    AiAssessment, AssessmentQuestion, AssessmentQuestions, AssessmentSkills, InterviewType, NewRound,
    RoundConfig, RoundUpdate,
};
pub use schedule::{DialogContext, InterviewDuration, ScheduleRecord, SchedulerDialog, TimeSlot};
pub use score::{MatchTier, Score, SkillRating, overall_score};
