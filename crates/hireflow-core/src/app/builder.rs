//! TriageBuilder - wiring of the triage workflow.
//!
//! Everything has a default, so `TriageBuilder::new().build()` gives the
//! sample job with the three seeded rounds. `build` fails fast on inputs the
//! workflow could not recover from later.

use std::collections::HashSet;
use std::sync::Arc;

use crate::app::triage::TriageWorkflow;
use crate::config::TriageConfig;
use crate::domain::{Applicant, ApplicantId, BoardError, RoundBoard, RoundConfig};
use crate::impls::LogEventSink;
use crate::ports::{Clock, EventSink, IdGenerator, SystemClock, UlidGenerator};
use crate::seed;

/// Builds a [`TriageWorkflow`].
///
/// # Example
/// ```ignore
/// let workflow = TriageBuilder::new()
///     .config(TriageConfig::from_path("triage.json")?)
///     .event_sink(Arc::new(InMemoryEventSink::new()))
///     .build()?;
/// ```
pub struct TriageBuilder {
    applicants: Vec<Applicant>,
    rounds: Vec<RoundConfig>,
    config: TriageConfig,
    clock: Option<Arc<dyn Clock>>,
    id_generator: Option<Arc<dyn IdGenerator>>,
    event_sink: Option<Arc<dyn EventSink>>,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("applicant '{0}' appears more than once")]
    DuplicateApplicant(ApplicantId),

    #[error(transparent)]
    Board(#[from] BoardError),
}

impl TriageBuilder {
    pub fn new() -> Self {
        Self {
            applicants: seed::sample_applicants(),
            rounds: seed::default_rounds(),
            config: TriageConfig::default(),
            clock: None,
            id_generator: None,
            event_sink: None,
        }
    }

    pub fn applicants(mut self, applicants: Vec<Applicant>) -> Self {
        self.applicants = applicants;
        self
    }

    pub fn rounds(mut self, rounds: Vec<RoundConfig>) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn config(mut self, config: TriageConfig) -> Self {
        self.config = config;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = Some(id_generator);
        self
    }

    pub fn event_sink(mut self, event_sink: Arc<dyn EventSink>) -> Self {
        self.event_sink = Some(event_sink);
        self
    }

    /// # Errors
    /// - `DuplicateApplicant` when two records share an id
    /// - `Board` when the rounds are empty or reuse a key
    pub fn build(self) -> Result<TriageWorkflow, BuildError> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = self.applicants.iter().find(|a| !seen.insert(&a.id)) {
            return Err(BuildError::DuplicateApplicant(duplicate.id.clone()));
        }
        let board = RoundBoard::new(self.rounds)?;

        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let id_generator = self
            .id_generator
            .unwrap_or_else(|| Arc::new(UlidGenerator::new(Arc::clone(&clock))));
        let event_sink = self.event_sink.unwrap_or_else(|| Arc::new(LogEventSink));

        Ok(TriageWorkflow::new(
            self.applicants,
            board,
            self.config,
            clock,
            id_generator,
            event_sink,
        ))
    }
}

impl Default for TriageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
