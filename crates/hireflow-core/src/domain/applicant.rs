//! Applicant record and the ranking-table queries over it.

use serde::{Deserialize, Deserializer, Serialize};

use super::ids::ApplicantId;
use super::score::{MatchTier, Score};

/// One candidate under consideration for one job.
///
/// Records are created from sample data and only change through
/// [`Applicant::update_scores`]. Skill labels are unique within a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub id: ApplicantId,
    pub name: String,
    pub match_score: Score,
    pub technical_score: Score,
    pub soft_skills_score: Score,
    pub cultural_fit_score: Score,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    #[serde(default, deserialize_with = "unique_skills")]
    skills: Vec<String>,
}

/// Partial edit from the metrics surface. `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreUpdate {
    pub match_score: Option<Score>,
    pub technical_score: Option<Score>,
    pub soft_skills_score: Option<Score>,
    pub cultural_fit_score: Option<Score>,
}

impl Applicant {
    pub fn new(id: impl Into<ApplicantId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            match_score: Score::MIN,
            technical_score: Score::MIN,
            soft_skills_score: Score::MIN,
            cultural_fit_score: Score::MIN,
            experience: String::new(),
            education: String::new(),
            skills: Vec::new(),
        }
    }

    /// Sets match, technical, soft-skill and cultural-fit scores, clamping each.
    pub fn with_scores(mut self, matched: i64, technical: i64, soft_skills: i64, cultural_fit: i64) -> Self {
        self.match_score = Score::new(matched);
        self.technical_score = Score::new(technical);
        self.soft_skills_score = Score::new(soft_skills);
        self.cultural_fit_score = Score::new(cultural_fit);
        self
    }

    pub fn with_background(mut self, experience: impl Into<String>, education: impl Into<String>) -> Self {
        self.experience = experience.into();
        self.education = education.into();
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for skill in skills {
            self.add_skill(skill);
        }
        self
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Appends a skill label. Returns `false` (and keeps the first
    /// occurrence in place) when the label is already present.
    pub fn add_skill(&mut self, skill: impl Into<String>) -> bool {
        let skill = skill.into();
        if self.skills.contains(&skill) {
            return false;
        }
        self.skills.push(skill);
        true
    }

    pub fn update_scores(&mut self, update: ScoreUpdate) {
        if let Some(score) = update.match_score {
            self.match_score = score;
        }
        if let Some(score) = update.technical_score {
            self.technical_score = score;
        }
        if let Some(score) = update.soft_skills_score {
            self.soft_skills_score = score;
        }
        if let Some(score) = update.cultural_fit_score {
            self.cultural_fit_score = score;
        }
    }

    pub fn tier(&self) -> MatchTier {
        self.match_score.tier()
    }

    /// Case-insensitive substring match on the name or any skill label.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.skills.iter().any(|s| s.to_lowercase().contains(&term))
    }
}

fn unique_skills<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    let mut skills = Vec::with_capacity(raw.len());
    for skill in raw {
        if !skills.contains(&skill) {
            skills.push(skill);
        }
    }
    Ok(skills)
}

/// Applicants matching `term`, in input order. An empty term matches all.
pub fn search_applicants<'a>(applicants: &'a [Applicant], term: &str) -> Vec<&'a Applicant> {
    applicants.iter().filter(|a| a.matches(term)).collect()
}

/// Applicants ordered by match score, highest first. Ties keep input order.
pub fn rank_applicants(applicants: &[Applicant]) -> Vec<&Applicant> {
    let mut ranked: Vec<&Applicant> = applicants.iter().collect();
    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked
}
