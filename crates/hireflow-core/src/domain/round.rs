//! Interview round configuration and the forms that create or edit it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::ValidationError;
use super::ids::RoundKey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewType {
    #[default]
    Technical,
    Behavioral,
    Assessment,
    Final,
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InterviewType::Technical => "technical",
            InterviewType::Behavioral => "behavioral",
            InterviewType::Assessment => "assessment",
            InterviewType::Final => "final",
        };
        f.write_str(label)
    }
}

/// AI-run assessment attached to a round: either skills the AI generates
/// questions for, or custom questions with their expected answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "lowercase")]
pub enum AiAssessment {
    Skills(AssessmentSkills),
    Questions(AssessmentQuestions),
}

/// Skill labels, trimmed, non-blank and unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AssessmentSkills(Vec<String>);

impl AssessmentSkills {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `Ok(false)` when the skill is already listed.
    pub fn add(&mut self, skill: &str) -> Result<bool, ValidationError> {
        let skill = required("skill", skill)?;
        if self.0.contains(&skill) {
            return Ok(false);
        }
        self.0.push(skill);
        Ok(true)
    }

    pub fn remove(&mut self, skill: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|s| s != skill);
        self.0.len() != before
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for AssessmentSkills {
    fn from(raw: Vec<String>) -> Self {
        let mut skills = Self::new();
        for skill in raw {
            // blanks are dropped on load
            let _ = skills.add(&skill);
        }
        skills
    }
}

impl From<AssessmentSkills> for Vec<String> {
    fn from(skills: AssessmentSkills) -> Self {
        skills.0
    }
}

/// A custom question and the answer the interviewer expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentQuestion {
    pub id: u32,
    pub question: String,
    pub answer: String,
}

/// Custom questions in insertion order. Ids are unique within the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<AssessmentQuestion>", into = "Vec<AssessmentQuestion>")]
pub struct AssessmentQuestions(Vec<AssessmentQuestion>);

impl AssessmentQuestions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a question; both texts must be non-blank. Returns its id.
    pub fn add(&mut self, question: &str, answer: &str) -> Result<u32, ValidationError> {
        let question = required("question", question)?;
        let answer = required("answer", answer)?;
        let id = self.0.iter().map(|q| q.id + 1).max().unwrap_or(1);
        self.0.push(AssessmentQuestion { id, question, answer });
        Ok(id)
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.0.len();
        self.0.retain(|q| q.id != id);
        self.0.len() != before
    }

    pub fn get(&self, id: u32) -> Option<&AssessmentQuestion> {
        self.0.iter().find(|q| q.id == id)
    }

    pub fn as_slice(&self) -> &[AssessmentQuestion] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<AssessmentQuestion>> for AssessmentQuestions {
    fn from(raw: Vec<AssessmentQuestion>) -> Self {
        let mut questions: Vec<AssessmentQuestion> = Vec::with_capacity(raw.len());
        for q in raw {
            let (Ok(question), Ok(answer)) = (required("question", &q.question), required("answer", &q.answer)) else {
                continue;
            };
            if questions.iter().any(|kept| kept.id == q.id) {
                continue;
            }
            questions.push(AssessmentQuestion { id: q.id, question, answer });
        }
        Self(questions)
    }
}

impl From<AssessmentQuestions> for Vec<AssessmentQuestion> {
    fn from(questions: AssessmentQuestions) -> Self {
        questions.0
    }
}

/// One stage of the hiring pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundConfig {
    pub key: RoundKey,
    pub title: String,
    pub interviewer: String,
    pub venue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default)]
    pub interview_type: InterviewType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_assessment: Option<AiAssessment>,
}

impl RoundConfig {
    pub fn new(
        key: impl Into<RoundKey>,
        title: impl Into<String>,
        interviewer: impl Into<String>,
        venue: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            interviewer: interviewer.into(),
            venue: venue.into(),
            duration: None,
            interview_type: InterviewType::default(),
            ai_assessment: None,
        }
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = normalize_optional(Some(duration.into()));
        self
    }

    pub fn with_type(mut self, interview_type: InterviewType) -> Self {
        self.interview_type = interview_type;
        self
    }

    /// Applies an edit in place. Nothing changes if the edit fails validation.
    pub fn apply(&mut self, update: RoundUpdate) -> Result<(), ValidationError> {
        let title = match update.title {
            Some(title) => Some(required("title", &title)?),
            None => None,
        };
        let interviewer = match update.interviewer {
            Some(interviewer) => Some(required("interviewer", &interviewer)?),
            None => None,
        };
        let venue = match update.venue {
            Some(venue) => Some(required("venue", &venue)?),
            None => None,
        };

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(interviewer) = interviewer {
            self.interviewer = interviewer;
        }
        if let Some(venue) = venue {
            self.venue = venue;
        }
        if let Some(duration) = update.duration {
            self.duration = normalize_optional(Some(duration));
        }
        if let Some(interview_type) = update.interview_type {
            self.interview_type = interview_type;
        }
        if let Some(ai_assessment) = update.ai_assessment {
            self.ai_assessment = ai_assessment;
        }
        Ok(())
    }
}

/// The "add round" form. Title, interviewer and venue are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRound {
    pub title: String,
    pub interviewer: String,
    pub venue: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub interview_type: Option<InterviewType>,
    #[serde(default)]
    pub ai_assessment: Option<AiAssessment>,
}

impl NewRound {
    pub fn new(title: impl Into<String>, interviewer: impl Into<String>, venue: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            interviewer: interviewer.into(),
            venue: venue.into(),
            ..Self::default()
        }
    }

    /// Validates the form and turns it into a config under `key`.
    pub fn into_config(self, key: RoundKey) -> Result<RoundConfig, ValidationError> {
        let title = required("title", &self.title)?;
        let interviewer = required("interviewer", &self.interviewer)?;
        let venue = required("venue", &self.venue)?;
        Ok(RoundConfig {
            key,
            title,
            interviewer,
            venue,
            duration: normalize_optional(self.duration),
            interview_type: self.interview_type.unwrap_or_default(),
            ai_assessment: self.ai_assessment,
        })
    }
}

/// Partial edit of an existing round. `None` keeps the current value; for
/// `ai_assessment`, `Some(None)` removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundUpdate {
    pub title: Option<String>,
    pub interviewer: Option<String>,
    pub venue: Option<String>,
    pub duration: Option<String>,
    pub interview_type: Option<InterviewType>,
    pub ai_assessment: Option<Option<AiAssessment>>,
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
