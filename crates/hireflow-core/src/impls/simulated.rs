//! Simulated evaluator and extractor.
//!
//! Both wait for a fixed delay on the tokio timer and then return mock data.
//! Dropping or aborting the future before the delay elapses yields nothing.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::domain::{EvaluationError, JobExtraction, RequiredSkill, Score, SkillLevel};
use crate::ports::{DocumentExtractor, MatchScorer, ScoringInput, SkillEvaluator};

pub struct SimulatedEvaluator<S> {
    delay: Duration,
    scorer: S,
}

impl<S: MatchScorer> SimulatedEvaluator<S> {
    pub fn new(delay: Duration, scorer: S) -> Self {
        Self { delay, scorer }
    }
}

#[async_trait]
impl<S: MatchScorer> SkillEvaluator for SimulatedEvaluator<S> {
    async fn evaluate(&self, skill: &str) -> Result<Score, EvaluationError> {
        if skill.trim().is_empty() {
            return Err(EvaluationError::Failed("no skill given".into()));
        }
        tokio::time::sleep(self.delay).await;
        let score = self.scorer.score(&ScoringInput::subject(skill));
        debug!("evaluated skill {skill}: {score}");
        Ok(score)
    }
}

/// Returns the same extraction for every non-empty document.
pub struct SimulatedExtractor {
    delay: Duration,
}

impl SimulatedExtractor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl DocumentExtractor for SimulatedExtractor {
    async fn extract(&self, document: &str) -> Result<JobExtraction, EvaluationError> {
        if document.trim().is_empty() {
            return Err(EvaluationError::EmptyDocument);
        }
        tokio::time::sleep(self.delay).await;
        Ok(canned_extraction())
    }
}

fn canned_extraction() -> JobExtraction {
    JobExtraction {
        title: "Senior Software Engineer".into(),
        department: "Engineering".into(),
        location: "San Francisco, CA".into(),
        employment_type: "full-time".into(),
        salary: "$120,000 - $150,000".into(),
        description: "We are looking for a Senior Software Engineer to join our dynamic team. \
                      You will be responsible for developing high-quality software solutions \
                      and mentoring junior developers."
            .into(),
        skills: vec![
            RequiredSkill::new("React", SkillLevel::Expert),
            RequiredSkill::new("TypeScript", SkillLevel::Intermediate),
            RequiredSkill::new("Node.js", SkillLevel::Expert),
            RequiredSkill::new("AWS", SkillLevel::Intermediate),
        ],
    }
}
