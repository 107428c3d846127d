//! Job postings, their department grouping and listing search.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Expert,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub name: String,
    pub level: SkillLevel,
}

impl RequiredSkill {
    pub fn new(name: impl Into<String>, level: SkillLevel) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub posted_date: String,
    pub applicants: u32,
    #[serde(default)]
    pub skills: Vec<RequiredSkill>,
}

impl JobPosting {
    /// Case-insensitive substring match on title, department or a skill name.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.department.to_lowercase().contains(&term)
            || self
                .skills
                .iter()
                .any(|s| s.name.to_lowercase().contains(&term))
    }
}

/// Postings of one department, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentGroup<'a> {
    pub department: &'a str,
    pub jobs: Vec<&'a JobPosting>,
}

/// Groups postings by department. Departments appear in the order they are
/// first seen.
pub fn group_by_department(jobs: &[JobPosting]) -> Vec<DepartmentGroup<'_>> {
    let mut groups: Vec<DepartmentGroup<'_>> = Vec::new();
    for job in jobs {
        match groups.iter_mut().find(|g| g.department == job.department) {
            Some(group) => group.jobs.push(job),
            None => groups.push(DepartmentGroup {
                department: &job.department,
                jobs: vec![job],
            }),
        }
    }
    groups
}

/// Listing filters. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl JobFilter {
    pub fn term(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    pub fn accepts(&self, job: &JobPosting) -> bool {
        job.matches(&self.term)
            && self
                .employment_type
                .as_deref()
                .is_none_or(|t| job.employment_type.contains(t))
            && self
                .location
                .as_deref()
                .is_none_or(|l| job.location.contains(l))
    }
}

/// Postings accepted by `filter`, in input order.
pub fn search_jobs<'a>(jobs: &'a [JobPosting], filter: &JobFilter) -> Vec<&'a JobPosting> {
    jobs.iter().filter(|j| filter.accepts(j)).collect()
}

/// Structured fields pulled out of an uploaded job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobExtraction {
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub salary: String,
    pub description: String,
    pub skills: Vec<RequiredSkill>,
}
