//! Round board: the partition of accepted applicants across interview rounds.
//!
//! Each applicant on the board sits in exactly one round. The only writers of
//! the per-round collections are [`RoundBoard::admit`] and
//! [`RoundBoard::move_applicant`].

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};

use super::errors::BoardError;
use super::ids::{ApplicantId, RoundKey};
use super::round::{NewRound, RoundConfig, RoundUpdate};

/// A configured round together with its occupants, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    pub config: RoundConfig,
    applicants: Vec<ApplicantId>,
}

impl Round {
    fn new(config: RoundConfig) -> Self {
        Self {
            config,
            applicants: Vec::new(),
        }
    }

    pub fn key(&self) -> &RoundKey {
        &self.config.key
    }

    pub fn applicants(&self) -> &[ApplicantId] {
        &self.applicants
    }

    pub fn contains(&self, id: &ApplicantId) -> bool {
        self.applicants.contains(id)
    }
}

/// What a move request did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The applicant left the source round and was appended to the target.
    Moved,
    /// Source and target are the same round.
    Unchanged,
    /// The applicant was not in the claimed source round (stale drag state),
    /// or a round key was unknown. The board was not touched.
    Dropped,
}

/// Deserialized boards go through the same checks as [`RoundBoard::new`],
/// plus a check that no applicant sits in two rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredBoard")]
pub struct RoundBoard {
    rounds: Vec<Round>,
}

#[derive(Deserialize)]
struct StoredBoard {
    rounds: Vec<StoredRound>,
}

#[derive(Deserialize)]
struct StoredRound {
    config: RoundConfig,
    #[serde(default)]
    applicants: Vec<ApplicantId>,
}

impl TryFrom<StoredBoard> for RoundBoard {
    type Error = BoardError;

    fn try_from(stored: StoredBoard) -> Result<Self, Self::Error> {
        let (configs, occupants): (Vec<_>, Vec<_>) = stored
            .rounds
            .into_iter()
            .map(|r| (r.config, r.applicants))
            .unzip();
        let mut board = RoundBoard::new(configs)?;
        for (round, applicants) in board.rounds.iter_mut().zip(occupants) {
            round.applicants = applicants;
        }

        let mut seen = HashSet::new();
        for id in board.rounds.iter().flat_map(|r| r.applicants.iter()) {
            if !seen.insert(id) {
                return Err(BoardError::ApplicantInTwoRounds(id.clone()));
            }
        }
        Ok(board)
    }
}

impl RoundBoard {
    /// Builds a board from rounds in declaration order.
    ///
    /// The first round is where newly admitted applicants land, so at least
    /// one round is required. Keys must be unique.
    pub fn new(configs: Vec<RoundConfig>) -> Result<Self, BoardError> {
        if configs.is_empty() {
            return Err(BoardError::NoRounds);
        }
        let mut rounds: Vec<Round> = Vec::with_capacity(configs.len());
        for config in configs {
            if rounds.iter().any(|r| r.config.key == config.key) {
                return Err(BoardError::DuplicateRound(config.key));
            }
            rounds.push(Round::new(config));
        }
        Ok(Self { rounds })
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn first_round(&self) -> &Round {
        // `new` refuses an empty board and rounds are never removed.
        &self.rounds[0]
    }

    pub fn round(&self, key: &RoundKey) -> Option<&Round> {
        self.rounds.iter().find(|r| &r.config.key == key)
    }

    /// Occupants of `key`; empty for an unknown round.
    pub fn occupants(&self, key: &RoundKey) -> &[ApplicantId] {
        self.round(key).map(Round::applicants).unwrap_or(&[])
    }

    pub fn round_of(&self, id: &ApplicantId) -> Option<&RoundKey> {
        self.rounds.iter().find(|r| r.contains(id)).map(Round::key)
    }

    pub fn contains(&self, id: &ApplicantId) -> bool {
        self.round_of(id).is_some()
    }

    /// Places a newly accepted applicant at the back of the first round.
    ///
    /// Returns `false` without changes when the applicant is already on the
    /// board, wherever it currently sits.
    pub fn admit(&mut self, id: ApplicantId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.rounds[0].applicants.push(id);
        true
    }

    /// Moves `id` from `from` to the back of `to`.
    ///
    /// Stale requests are dropped silently: if `id` is not in `from`, or
    /// either key is unknown, the board is left exactly as it was.
    pub fn move_applicant(&mut self, id: &ApplicantId, from: &RoundKey, to: &RoundKey) -> MoveOutcome {
        if from == to {
            return MoveOutcome::Unchanged;
        }
        let Some(source) = self.index_of(from) else {
            debug!("dropping move of {id}: unknown source round {from}");
            return MoveOutcome::Dropped;
        };
        let Some(target) = self.index_of(to) else {
            debug!("dropping move of {id}: unknown target round {to}");
            return MoveOutcome::Dropped;
        };
        let Some(position) = self.rounds[source].applicants.iter().position(|a| a == id) else {
            debug!("dropping move of {id}: not in round {from}");
            return MoveOutcome::Dropped;
        };

        let applicant = self.rounds[source].applicants.remove(position);
        self.rounds[target].applicants.push(applicant);
        MoveOutcome::Moved
    }

    /// Appends a new, empty round and returns its key.
    ///
    /// The key is `round<N+1>` for a board of N rounds, skipping forward past
    /// any key already taken by a custom configuration.
    pub fn add_round(&mut self, form: NewRound) -> Result<RoundKey, BoardError> {
        let mut n = self.rounds.len() + 1;
        let key = loop {
            let candidate = RoundKey::ordinal(n);
            if self.index_of(&candidate).is_none() {
                break candidate;
            }
            n += 1;
        };
        let config = form.into_config(key.clone())?;
        self.rounds.push(Round::new(config));
        Ok(key)
    }

    /// Edits a round's configuration. Occupants and key are untouched.
    pub fn update_round(&mut self, key: &RoundKey, update: RoundUpdate) -> Result<&RoundConfig, BoardError> {
        let index = self
            .index_of(key)
            .ok_or_else(|| BoardError::UnknownRound(key.clone()))?;
        let config = &mut self.rounds[index].config;
        config.apply(update)?;
        Ok(config)
    }

    fn index_of(&self, key: &RoundKey) -> Option<usize> {
        self.rounds.iter().position(|r| &r.config.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ValidationError;
    use crate::domain::round::InterviewType;
    use crate::seed::default_rounds;

    fn id(s: &str) -> ApplicantId {
        ApplicantId::from(s)
    }

    fn key(n: usize) -> RoundKey {
        RoundKey::ordinal(n)
    }

    fn seeded_board(applicants: &[&str]) -> RoundBoard {
        let mut board = RoundBoard::new(default_rounds()).unwrap();
        for a in applicants {
            board.admit(id(a));
        }
        board
    }

    #[test]
    fn board_requires_rounds_with_unique_keys() {
        assert_eq!(RoundBoard::new(Vec::new()), Err(BoardError::NoRounds));

        let duplicate = vec![
            RoundConfig::new("round1", "A", "X", "Y"),
            RoundConfig::new("round1", "B", "X", "Y"),
        ];
        assert_eq!(
            RoundBoard::new(duplicate),
            Err(BoardError::DuplicateRound(key(1)))
        );
    }

    #[test]
    fn admitted_applicants_land_in_first_round_once() {
        let mut board = seeded_board(&["app1", "app2"]);
        assert!(!board.admit(id("app1")));

        assert_eq!(board.occupants(&key(1)), [id("app1"), id("app2")]);
        assert!(board.occupants(&key(2)).is_empty());
    }

    #[test]
    fn admit_does_not_pull_applicant_back_to_first_round() {
        let mut board = seeded_board(&["app1"]);
        board.move_applicant(&id("app1"), &key(1), &key(3));

        assert!(!board.admit(id("app1")));
        assert_eq!(board.round_of(&id("app1")), Some(&key(3)));
    }

    #[test]
    fn move_appends_to_target_and_removes_from_source() {
        let mut board = seeded_board(&["app1", "app2", "app3"]);
        board.move_applicant(&id("app3"), &key(1), &key(2));

        let outcome = board.move_applicant(&id("app1"), &key(1), &key(2));

        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(board.occupants(&key(1)), [id("app2")]);
        assert_eq!(board.occupants(&key(2)), [id("app3"), id("app1")]);
    }

    #[test]
    fn move_to_same_round_keeps_order() {
        let mut board = seeded_board(&["app1", "app2", "app3"]);
        let before = board.clone();

        assert_eq!(
            board.move_applicant(&id("app2"), &key(1), &key(1)),
            MoveOutcome::Unchanged
        );
        assert_eq!(board, before);
    }

    #[test]
    fn stale_moves_leave_board_untouched() {
        let mut board = seeded_board(&["app1", "app2"]);
        board.move_applicant(&id("app2"), &key(1), &key(2));
        let before = board.clone();

        // app2 is no longer in round1
        assert_eq!(
            board.move_applicant(&id("app2"), &key(1), &key(3)),
            MoveOutcome::Dropped
        );
        assert_eq!(
            board.move_applicant(&id("app1"), &key(1), &RoundKey::from("nowhere")),
            MoveOutcome::Dropped
        );
        assert_eq!(
            board.move_applicant(&id("ghost"), &key(1), &key(2)),
            MoveOutcome::Dropped
        );
        assert_eq!(board, before);
    }

    #[test]
    fn last_round_keeps_applicants() {
        let mut board = seeded_board(&["app1"]);
        board.move_applicant(&id("app1"), &key(1), &key(2));
        board.move_applicant(&id("app1"), &key(2), &key(3));

        assert_eq!(board.occupants(&key(3)), [id("app1")]);
    }

    #[test]
    fn added_round_gets_next_key_and_starts_empty() {
        let mut board = seeded_board(&["app1"]);
        let new_key = board
            .add_round(NewRound::new("Panel Interview", "Senior Manager", "Board Room"))
            .unwrap();

        assert_eq!(new_key, key(4));
        let round = board.round(&new_key).unwrap();
        assert_eq!(round.config.interview_type, InterviewType::Technical);
        assert!(round.applicants().is_empty());
        assert_eq!(board.len(), 4);
    }

    #[test]
    fn invalid_round_is_not_added() {
        let mut board = seeded_board(&[]);
        let err = board
            .add_round(NewRound::new("Panel Interview", "", "Board Room"))
            .unwrap_err();

        assert_eq!(err, BoardError::Validation(ValidationError::MissingField("interviewer")));
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn generated_key_skips_custom_keys() {
        let mut board = RoundBoard::new(vec![RoundConfig::new("round2", "Only", "X", "Y")]).unwrap();
        let new_key = board.add_round(NewRound::new("Next", "X", "Y")).unwrap();
        assert_eq!(new_key, key(3));
    }

    #[test]
    fn editing_a_round_keeps_occupants() {
        let mut board = seeded_board(&["app1", "app2"]);
        let updated = board
            .update_round(
                &key(1),
                RoundUpdate {
                    title: Some("Phone Screen".into()),
                    ..RoundUpdate::default()
                },
            )
            .unwrap();
        assert_eq!(updated.title, "Phone Screen");
        assert_eq!(board.occupants(&key(1)), [id("app1"), id("app2")]);

        assert_eq!(
            board.update_round(&RoundKey::from("round9"), RoundUpdate::default()),
            Err(BoardError::UnknownRound(RoundKey::from("round9")))
        );
    }

    fn stored(rounds: &str) -> Result<RoundBoard, serde_json::Error> {
        serde_json::from_str(&format!(r#"{{ "rounds": {rounds} }}"#))
    }

    fn stored_round(round_key: &str, applicants: &[&str]) -> String {
        format!(
            r#"{{ "config": {{ "key": "{round_key}", "title": "T", "interviewer": "I", "venue": "V" }}, "applicants": {} }}"#,
            serde_json::to_string(applicants).unwrap()
        )
    }

    #[test]
    fn board_survives_a_json_round_trip() {
        let mut board = seeded_board(&["app1", "app2"]);
        board.move_applicant(&id("app2"), &key(1), &key(3));

        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<RoundBoard>(&json).unwrap(), board);
    }

    #[test]
    fn stored_board_without_rounds_is_refused() {
        let err = stored("[]").unwrap_err();
        assert!(err.to_string().contains(&BoardError::NoRounds.to_string()));
    }

    #[test]
    fn stored_board_with_repeated_key_is_refused() {
        let rounds = format!(
            "[{}, {}, {}]",
            stored_round("round1", &[]),
            stored_round("round2", &[]),
            stored_round("round2", &[])
        );
        let err = stored(&rounds).unwrap_err();
        assert!(err.to_string().contains(&BoardError::DuplicateRound(key(2)).to_string()));
    }

    #[test]
    fn stored_board_with_applicant_in_two_rounds_is_refused() {
        let rounds = format!(
            "[{}, {}]",
            stored_round("round1", &["a1"]),
            stored_round("round2", &["a1"])
        );
        let err = stored(&rounds).unwrap_err();
        assert!(err.to_string().contains(&BoardError::ApplicantInTwoRounds(id("a1")).to_string()));

        let rounds = format!("[{}]", stored_round("round1", &["a1", "a1"]));
        assert!(stored(&rounds).is_err());
    }
}
