//! EvaluationSlot - pending/resolved state of one simulated async operation.
//!
//! A slot backs one UI element (a skill card, the document upload box). It
//! owns at most one in-flight task; starting again or cancelling aborts the
//! previous one, and a generation counter keeps a late result from landing
//! after the user has moved on.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, warn};
use tokio::task::JoinHandle;

use crate::domain::{EvaluationError, JobExtraction, Score};
use crate::ports::{DocumentExtractor, SkillEvaluator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationState<T> {
    Idle,
    Pending,
    Resolved(T),
    Failed(String),
    Cancelled,
}

impl<T> EvaluationState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, EvaluationState::Pending)
    }
}

struct SlotInner<T> {
    generation: u64,
    state: EvaluationState<T>,
}

pub struct EvaluationSlot<T> {
    inner: Arc<Mutex<SlotInner<T>>>,
    handle: Option<JoinHandle<()>>,
}

fn lock<T>(inner: &Mutex<SlotInner<T>>) -> MutexGuard<'_, SlotInner<T>> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T: Clone + Send + 'static> EvaluationSlot<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SlotInner {
                generation: 0,
                state: EvaluationState::Idle,
            })),
            handle: None,
        }
    }

    pub fn state(&self) -> EvaluationState<T> {
        lock(&self.inner).state.clone()
    }

    pub fn is_pending(&self) -> bool {
        lock(&self.inner).state.is_pending()
    }

    /// Spawns `operation` on the current tokio runtime and marks the slot
    /// pending. Any earlier run is aborted first.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn start<F>(&mut self, operation: F)
    where
        F: Future<Output = Result<T, EvaluationError>> + Send + 'static,
    {
        self.abort_in_flight();
        let generation = {
            let mut inner = lock(&self.inner);
            inner.generation += 1;
            inner.state = EvaluationState::Pending;
            inner.generation
        };

        let inner = Arc::clone(&self.inner);
        self.handle = Some(tokio::spawn(async move {
            let result = operation.await;
            let mut guard = lock(&inner);
            if guard.generation != generation {
                debug!("discarding stale evaluation result (run {generation})");
                return;
            }
            guard.state = match result {
                Ok(value) => EvaluationState::Resolved(value),
                Err(EvaluationError::Cancelled) => EvaluationState::Cancelled,
                Err(err) => {
                    warn!("evaluation failed: {err}");
                    EvaluationState::Failed(err.to_string())
                }
            };
        }));
    }

    /// Stops the in-flight run. A pending slot becomes `Cancelled`; a
    /// settled slot keeps its state.
    pub fn cancel(&mut self) {
        self.abort_in_flight();
        let mut inner = lock(&self.inner);
        inner.generation += 1;
        if inner.state.is_pending() {
            inner.state = EvaluationState::Cancelled;
        }
    }

    /// Stops the in-flight run and returns to `Idle`.
    pub fn reset(&mut self) {
        self.abort_in_flight();
        let mut inner = lock(&self.inner);
        inner.generation += 1;
        inner.state = EvaluationState::Idle;
    }

    /// Waits for the current run, if any, and returns the settled state.
    pub async fn wait(&mut self) -> EvaluationState<T> {
        if let Some(handle) = self.handle.take() {
            if let Err(err) = handle.await
                && !err.is_cancelled()
            {
                warn!("evaluation task panicked: {err}");
                let mut inner = lock(&self.inner);
                inner.state = EvaluationState::Failed(err.to_string());
            }
        }
        self.state()
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl<T: Clone + Send + 'static> Default for EvaluationSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for EvaluationSlot<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl EvaluationSlot<Score> {
    /// Starts a skill evaluation.
    pub fn evaluate_skill(&mut self, evaluator: Arc<dyn SkillEvaluator>, skill: impl Into<String>) {
        let skill = skill.into();
        self.start(async move { evaluator.evaluate(&skill).await });
    }
}

impl EvaluationSlot<JobExtraction> {
    /// Starts extracting job details from an uploaded document.
    pub fn extract_document(&mut self, extractor: Arc<dyn DocumentExtractor>, document: impl Into<String>) {
        let document = document.into();
        self.start(async move { extractor.extract(&document).await });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::{FixedScorer, SimulatedEvaluator, SimulatedExtractor};
    use std::time::Duration;

    fn evaluator(score: i64) -> Arc<dyn SkillEvaluator> {
        Arc::new(SimulatedEvaluator::new(
            Duration::from_secs(2),
            FixedScorer(Score::new(score)),
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn pending_then_resolved() {
        let mut slot = EvaluationSlot::new();
        assert_eq!(slot.state(), EvaluationState::Idle);

        slot.evaluate_skill(evaluator(84), "React");
        assert!(slot.is_pending());

        assert_eq!(slot.wait().await, EvaluationState::Resolved(Score::new(84)));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_run_never_lands() {
        let mut slot = EvaluationSlot::new();
        slot.evaluate_skill(evaluator(84), "React");

        tokio::time::sleep(Duration::from_millis(500)).await;
        slot.cancel();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(slot.state(), EvaluationState::Cancelled);
        assert_eq!(slot.wait().await, EvaluationState::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_discards_previous_run() {
        let mut slot = EvaluationSlot::new();
        slot.evaluate_skill(evaluator(70), "React");
        tokio::time::sleep(Duration::from_secs(1)).await;

        slot.evaluate_skill(evaluator(91), "React");
        assert_eq!(slot.wait().await, EvaluationState::Resolved(Score::new(91)));
    }

    #[tokio::test(start_paused = true)]
    async fn reset_returns_to_idle() {
        let mut slot = EvaluationSlot::new();
        slot.evaluate_skill(evaluator(70), "React");
        slot.reset();

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(slot.state(), EvaluationState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn extraction_errors_become_failed() {
        let mut slot = EvaluationSlot::new();
        slot.extract_document(Arc::new(SimulatedExtractor::new(Duration::from_secs(2))), "");

        assert_eq!(
            slot.wait().await,
            EvaluationState::Failed(EvaluationError::EmptyDocument.to_string())
        );
    }
}
