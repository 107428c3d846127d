//! MatchScorer port - pluggable score generation.
//!
//! Every number the mock screens present as an "AI" score goes through this
//! trait, so tests can swap the random strategy for a fixed one.

use crate::domain::Score;

/// What is being scored: a skill name, an applicant name, a job title.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub subject: &'a str,
}

impl<'a> ScoringInput<'a> {
    pub fn subject(subject: &'a str) -> Self {
        Self { subject }
    }
}

pub trait MatchScorer: Send + Sync {
    fn score(&self, input: &ScoringInput<'_>) -> Score;
}
