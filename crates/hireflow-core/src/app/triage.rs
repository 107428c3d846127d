//! TriageWorkflow - accept / schedule / reject over one job's applicants.
//!
//! Accepting goes through the scheduler dialog: `request_accept` opens it,
//! `confirm_schedule` commits the decision once the dialog validates.
//! Rejecting commits immediately.

use std::sync::Arc;

use log::{debug, info};

use crate::config::TriageConfig;
use crate::domain::{
    Applicant, ApplicantId, BoardError, DecisionLedger, DecisionStatus, DomainEvent, MoveOutcome,
    NewRound, RoundBoard, RoundConfig, RoundKey, RoundUpdate, ScheduleRecord, SchedulerDialog,
    SchedulerError, ScoreUpdate, TriageError, rank_applicants, search_applicants,
};
use crate::ports::{Clock, EventSink, IdGenerator};

pub struct TriageWorkflow {
    applicants: Vec<Applicant>,
    ledger: DecisionLedger,
    board: RoundBoard,
    dialog: SchedulerDialog,
    pending: Option<ApplicantId>,
    config: TriageConfig,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    events: Arc<dyn EventSink>,
}

impl TriageWorkflow {
    pub(crate) fn new(
        applicants: Vec<Applicant>,
        board: RoundBoard,
        config: TriageConfig,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        let dialog = SchedulerDialog::new(
            clock.today(),
            config.default_duration,
            config.placeholder_link.clone(),
        );
        Self {
            applicants,
            ledger: DecisionLedger::new(),
            board,
            dialog,
            pending: None,
            config,
            clock,
            ids,
            events,
        }
    }

    pub fn applicants(&self) -> &[Applicant] {
        &self.applicants
    }

    pub fn applicant(&self, id: &ApplicantId) -> Option<&Applicant> {
        self.applicants.iter().find(|a| &a.id == id)
    }

    /// Applicants by match score, best first.
    pub fn ranking(&self) -> Vec<&Applicant> {
        rank_applicants(&self.applicants)
    }

    pub fn search(&self, term: &str) -> Vec<&Applicant> {
        search_applicants(&self.applicants, term)
    }

    pub fn update_scores(&mut self, id: &ApplicantId, update: ScoreUpdate) -> Result<&Applicant, TriageError> {
        let applicant = self
            .applicants
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or_else(|| TriageError::UnknownApplicant(id.clone()))?;
        applicant.update_scores(update);
        Ok(applicant)
    }

    pub fn ledger(&self) -> &DecisionLedger {
        &self.ledger
    }

    pub fn status_of(&self, id: &ApplicantId) -> DecisionStatus {
        self.ledger.status_of(id)
    }

    pub fn board(&self) -> &RoundBoard {
        &self.board
    }

    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &SchedulerDialog {
        &self.dialog
    }

    /// The dialog's editable fields (date, time, duration, link).
    pub fn scheduler_mut(&mut self) -> &mut SchedulerDialog {
        &mut self.dialog
    }

    /// Applicant whose accept is waiting on the scheduler dialog.
    pub fn pending(&self) -> Option<&ApplicantId> {
        self.pending.as_ref()
    }

    /// Opens the scheduler dialog for `id`. The ledger is untouched until
    /// [`confirm_schedule`](Self::confirm_schedule) succeeds.
    ///
    /// A request while the dialog is already open retargets it; the fields
    /// entered so far are kept.
    pub fn request_accept(&mut self, id: &ApplicantId) -> Result<(), TriageError> {
        let applicant = self
            .applicants
            .iter()
            .find(|a| &a.id == id)
            .ok_or_else(|| TriageError::UnknownApplicant(id.clone()))?;

        if let Some(previous) = self.pending.replace(id.clone())
            && &previous != id
        {
            debug!("scheduler dialog retargeted from {previous} to {id}");
        }
        self.dialog
            .open(applicant.name.clone(), self.config.first_round_label.clone());
        self.events.emit(DomainEvent::AcceptRequested { applicant: id.clone() });
        Ok(())
    }

    /// Submits the scheduler dialog and, on success, accepts the pending
    /// applicant and admits it to the first round.
    ///
    /// A validation failure leaves the ledger, the board and the dialog
    /// unchanged.
    pub fn confirm_schedule(&mut self) -> Result<ScheduleRecord, TriageError> {
        let today = self.clock.today();
        let Some(id) = self.pending.clone() else {
            return Err(SchedulerError::Closed.into());
        };

        let events = &self.events;
        let record = self.dialog.submit(today, self.ids.generate_schedule_id(), |record| {
            events.emit(DomainEvent::InterviewScheduled {
                applicant: id.clone(),
                schedule: record.clone(),
            });
        })?;
        self.pending = None;

        self.ledger.accept(id.clone());
        let round = self
            .board
            .admit(id.clone())
            .then(|| self.board.first_round().key().clone());
        info!(
            "accepted {id}: {} on {} at {}",
            record.round_label, record.date, record.time
        );
        self.events.emit(DomainEvent::ApplicantAccepted {
            applicant: id,
            schedule: record.id,
            round,
        });
        Ok(record)
    }

    /// Closes the dialog without deciding; the applicant stays pending.
    pub fn cancel_schedule(&mut self) {
        if let Some(id) = self.pending.take() {
            debug!("scheduling cancelled for {id}");
        }
        self.dialog.cancel(self.clock.today());
    }

    /// Rejects `id` right away. No scheduling is involved.
    ///
    /// An applicant already on the board stays where it is.
    pub fn reject(&mut self, id: &ApplicantId) -> Result<(), TriageError> {
        if self.applicant(id).is_none() {
            return Err(TriageError::UnknownApplicant(id.clone()));
        }
        if self.pending.as_ref() == Some(id) {
            self.cancel_schedule();
        }
        if self.ledger.reject(id.clone()) {
            info!("rejected {id}");
            self.events.emit(DomainEvent::ApplicantRejected { applicant: id.clone() });
        }
        Ok(())
    }

    pub fn move_applicant(&mut self, id: &ApplicantId, from: &RoundKey, to: &RoundKey) -> MoveOutcome {
        let outcome = self.board.move_applicant(id, from, to);
        if outcome == MoveOutcome::Moved {
            self.events.emit(DomainEvent::ApplicantMoved {
                applicant: id.clone(),
                from: from.clone(),
                to: to.clone(),
            });
        }
        outcome
    }

    pub fn add_round(&mut self, form: NewRound) -> Result<RoundKey, BoardError> {
        let key = self.board.add_round(form)?;
        let title = self
            .board
            .round(&key)
            .map(|r| r.config.title.clone())
            .unwrap_or_default();
        info!("added round {key} ({title})");
        self.events.emit(DomainEvent::RoundAdded { round: key.clone(), title });
        Ok(key)
    }

    pub fn update_round(&mut self, key: &RoundKey, update: RoundUpdate) -> Result<&RoundConfig, BoardError> {
        let config = self.board.update_round(key, update)?;
        self.events.emit(DomainEvent::RoundUpdated { round: key.clone() });
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::TriageBuilder;
    use crate::domain::{InterviewType, Score, TimeSlot, ValidationError};
    use crate::impls::InMemoryEventSink;
    use crate::ports::FixedClock;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    fn workflow() -> (TriageWorkflow, Arc<InMemoryEventSink>) {
        let sink = Arc::new(InMemoryEventSink::new());
        let workflow = TriageBuilder::new()
            .clock(Arc::new(FixedClock::on(today())))
            .event_sink(sink.clone())
            .build()
            .unwrap();
        (workflow, sink)
    }

    fn id(s: &str) -> ApplicantId {
        ApplicantId::from(s)
    }

    #[test]
    fn request_accept_opens_dialog_without_deciding() {
        let (mut wf, sink) = workflow();
        wf.request_accept(&id("app1")).unwrap();

        assert!(wf.scheduler().is_open());
        let context = wf.scheduler().context().unwrap();
        assert_eq!(context.applicant_name, "Jessica Miller");
        assert_eq!(context.round_label, "Initial Screening");
        assert_eq!(wf.status_of(&id("app1")), DecisionStatus::Pending);
        assert_eq!(sink.take(), vec![DomainEvent::AcceptRequested { applicant: id("app1") }]);
    }

    #[test]
    fn unknown_applicant_is_rejected() {
        let (mut wf, _) = workflow();
        assert_eq!(
            wf.request_accept(&id("nobody")),
            Err(TriageError::UnknownApplicant(id("nobody")))
        );
        assert!(!wf.scheduler().is_open());
        assert!(wf.reject(&id("nobody")).is_err());
    }

    #[test]
    fn confirm_accepts_and_admits() {
        let (mut wf, sink) = workflow();
        wf.request_accept(&id("app1")).unwrap();
        sink.take();
        wf.scheduler_mut().set_time(Some("10:00".parse().unwrap()));

        let record = wf.confirm_schedule().unwrap();

        assert_eq!(record.applicant_name, "Jessica Miller");
        assert_eq!(record.time, "10:00".parse::<TimeSlot>().unwrap());
        assert_eq!(wf.status_of(&id("app1")), DecisionStatus::Accepted);
        assert_eq!(wf.board().occupants(&RoundKey::ordinal(1)), &[id("app1")]);
        assert!(!wf.scheduler().is_open());
        assert!(wf.pending().is_none());

        let names: Vec<_> = sink.take().iter().map(DomainEvent::name).collect();
        assert_eq!(names, ["interview_scheduled", "applicant_accepted"]);
    }

    #[test]
    fn failed_confirm_changes_nothing() {
        let (mut wf, sink) = workflow();
        wf.request_accept(&id("app1")).unwrap();
        sink.take();

        let err = wf.confirm_schedule().unwrap_err();

        assert_eq!(
            err,
            TriageError::Scheduler(SchedulerError::Validation(ValidationError::MissingField("time")))
        );
        assert_eq!(wf.status_of(&id("app1")), DecisionStatus::Pending);
        assert!(wf.board().first_round().applicants().is_empty());
        assert!(wf.scheduler().is_open());
        assert_eq!(wf.pending(), Some(&id("app1")));
        assert!(sink.events().is_empty());
    }

    #[test]
    fn confirm_without_request_is_closed() {
        let (mut wf, _) = workflow();
        assert_eq!(
            wf.confirm_schedule(),
            Err(TriageError::Scheduler(SchedulerError::Closed))
        );
    }

    #[test]
    fn reject_skips_the_dialog() {
        let (mut wf, sink) = workflow();
        wf.reject(&id("app2")).unwrap();

        assert_eq!(wf.status_of(&id("app2")), DecisionStatus::Rejected);
        assert!(!wf.board().contains(&id("app2")));
        assert_eq!(sink.take(), vec![DomainEvent::ApplicantRejected { applicant: id("app2") }]);

        wf.reject(&id("app2")).unwrap();
        assert!(sink.events().is_empty());
    }

    #[test]
    fn rejecting_the_pending_applicant_closes_the_dialog() {
        let (mut wf, _) = workflow();
        wf.request_accept(&id("app3")).unwrap();
        wf.reject(&id("app3")).unwrap();

        assert!(!wf.scheduler().is_open());
        assert!(wf.pending().is_none());
        assert_eq!(wf.status_of(&id("app3")), DecisionStatus::Rejected);
    }

    #[test]
    fn reject_after_accept_keeps_board_position() {
        let (mut wf, _) = workflow();
        wf.request_accept(&id("app1")).unwrap();
        wf.scheduler_mut().set_time(Some("09:30".parse().unwrap()));
        wf.confirm_schedule().unwrap();

        wf.reject(&id("app1")).unwrap();

        assert_eq!(wf.status_of(&id("app1")), DecisionStatus::Rejected);
        assert!(wf.board().contains(&id("app1")));
        assert_eq!(wf.ledger().counts().accepted, 0);
    }

    #[test]
    fn cancel_keeps_applicant_pending() {
        let (mut wf, _) = workflow();
        wf.request_accept(&id("app4")).unwrap();
        wf.cancel_schedule();

        assert!(!wf.scheduler().is_open());
        assert_eq!(wf.status_of(&id("app4")), DecisionStatus::Pending);
        assert!(wf.confirm_schedule().is_err());
    }

    #[test]
    fn moves_emit_only_when_something_moved() {
        let (mut wf, sink) = workflow();
        wf.request_accept(&id("app1")).unwrap();
        wf.scheduler_mut().set_time(Some("10:00".parse().unwrap()));
        wf.confirm_schedule().unwrap();
        sink.take();

        let (r1, r2) = (RoundKey::ordinal(1), RoundKey::ordinal(2));
        assert_eq!(wf.move_applicant(&id("app1"), &r2, &r1), MoveOutcome::Dropped);
        assert_eq!(wf.move_applicant(&id("app1"), &r1, &r1), MoveOutcome::Unchanged);
        assert!(sink.events().is_empty());

        assert_eq!(wf.move_applicant(&id("app1"), &r1, &r2), MoveOutcome::Moved);
        assert_eq!(sink.events().len(), 1);
    }

    #[test]
    fn round_edits_are_announced() {
        let (mut wf, sink) = workflow();
        let key = wf
            .add_round(NewRound::new("Panel Interview", "Senior Manager", "Board Room"))
            .unwrap();
        assert_eq!(key, RoundKey::ordinal(4));

        let update = RoundUpdate {
            interview_type: Some(InterviewType::Behavioral),
            ..RoundUpdate::default()
        };
        let config = wf.update_round(&key, update).unwrap();
        assert_eq!(config.interview_type, InterviewType::Behavioral);

        assert_eq!(
            sink.take(),
            vec![
                DomainEvent::RoundAdded {
                    round: key.clone(),
                    title: "Panel Interview".into()
                },
                DomainEvent::RoundUpdated { round: key },
            ]
        );
    }

    #[test]
    fn score_updates_reorder_the_ranking() {
        let (mut wf, _) = workflow();
        let update = ScoreUpdate {
            match_score: Some(Score::new(99)),
            ..ScoreUpdate::default()
        };
        wf.update_scores(&id("app5"), update).unwrap();

        assert_eq!(wf.ranking()[0].id, id("app5"));
        assert!(wf.update_scores(&id("ghost"), ScoreUpdate::default()).is_err());
    }
}
