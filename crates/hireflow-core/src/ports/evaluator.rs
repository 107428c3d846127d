//! Evaluator ports - asynchronous "AI" operations.
//!
//! Both operations have the same observable contract: a pending phase of
//! unspecified length, then a resolved value or an error.

use async_trait::async_trait;

use crate::domain::{EvaluationError, JobExtraction, Score};

#[async_trait]
pub trait SkillEvaluator: Send + Sync {
    async fn evaluate(&self, skill: &str) -> Result<Score, EvaluationError>;
}

#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(&self, document: &str) -> Result<JobExtraction, EvaluationError>;
}
