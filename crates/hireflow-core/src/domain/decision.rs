//! Decision ledger: accepted / rejected bookkeeping per applicant.
//!
//! The status of an applicant is never stored on the record. It is derived
//! from membership in two id sets, and the ledger keeps an id in at most one
//! of them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ids::ApplicantId;

/// Tri-state recruiting decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionCounts {
    pub accepted: usize,
    pub rejected: usize,
}

/// Accepted and rejected id sets.
///
/// All operations are total: unknown ids can be decided speculatively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionLedger {
    accepted: BTreeSet<ApplicantId>,
    rejected: BTreeSet<ApplicantId>,
}

impl DecisionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `id` accepted, withdrawing any earlier rejection.
    ///
    /// Returns `false` when `id` was already accepted (no-op).
    pub fn accept(&mut self, id: ApplicantId) -> bool {
        self.rejected.remove(&id);
        self.accepted.insert(id)
    }

    /// Marks `id` rejected, withdrawing any earlier acceptance.
    ///
    /// Returns `false` when `id` was already rejected (no-op).
    pub fn reject(&mut self, id: ApplicantId) -> bool {
        self.accepted.remove(&id);
        self.rejected.insert(id)
    }

    pub fn status_of(&self, id: &ApplicantId) -> DecisionStatus {
        if self.accepted.contains(id) {
            DecisionStatus::Accepted
        } else if self.rejected.contains(id) {
            DecisionStatus::Rejected
        } else {
            DecisionStatus::Pending
        }
    }

    pub fn accepted(&self) -> impl Iterator<Item = &ApplicantId> {
        self.accepted.iter()
    }

    pub fn rejected(&self) -> impl Iterator<Item = &ApplicantId> {
        self.rejected.iter()
    }

    pub fn counts(&self) -> DecisionCounts {
        DecisionCounts {
            accepted: self.accepted.len(),
            rejected: self.rejected.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ApplicantId {
        ApplicantId::from(s)
    }

    #[test]
    fn unknown_ids_are_pending() {
        let ledger = DecisionLedger::new();
        assert_eq!(ledger.status_of(&id("nobody")), DecisionStatus::Pending);
    }

    #[test]
    fn accept_then_reject_leaves_only_rejected() {
        let mut ledger = DecisionLedger::new();
        ledger.accept(id("app1"));
        ledger.reject(id("app1"));

        assert_eq!(ledger.status_of(&id("app1")), DecisionStatus::Rejected);
        assert_eq!(ledger.accepted().count(), 0);
        assert_eq!(ledger.rejected().collect::<Vec<_>>(), [&id("app1")]);
    }

    #[test]
    fn reject_then_accept_leaves_only_accepted() {
        let mut ledger = DecisionLedger::new();
        ledger.reject(id("app1"));
        ledger.accept(id("app1"));

        assert_eq!(ledger.status_of(&id("app1")), DecisionStatus::Accepted);
        assert_eq!(ledger.counts(), DecisionCounts { accepted: 1, rejected: 0 });
    }

    #[test]
    fn repeated_accept_is_a_noop() {
        let mut ledger = DecisionLedger::new();
        assert!(ledger.accept(id("app1")));
        assert!(!ledger.accept(id("app1")));
        assert_eq!(ledger.counts().accepted, 1);
    }

    #[test]
    fn speculative_decisions_on_unknown_ids() {
        let mut ledger = DecisionLedger::new();
        ledger.reject(id("ghost"));
        assert_eq!(ledger.status_of(&id("ghost")), DecisionStatus::Rejected);
    }
}
