//! Sample data loaded when a job's ranking table is opened.

use crate::domain::{
    Applicant, InterviewType, JobPosting, RequiredSkill, RoundConfig, SkillLevel,
};

/// The five ranked applicants of the "Senior Frontend Developer" posting.
pub fn sample_applicants() -> Vec<Applicant> {
    vec![
        Applicant::new("app1", "Jessica Miller")
            .with_scores(92, 95, 90, 88)
            .with_background("5 years", "Master's in Computer Science")
            .with_skills(["React", "TypeScript", "UI/UX Design", "Node.js"]),
        Applicant::new("app2", "Michael Chen")
            .with_scores(89, 92, 85, 90)
            .with_background("4 years", "Bachelor's in Software Engineering")
            .with_skills(["React", "JavaScript", "CSS", "UI Design"]),
        Applicant::new("app3", "Sarah Johnson")
            .with_scores(87, 88, 92, 85)
            .with_background("3 years", "Bachelor's in Computer Science")
            .with_skills(["React", "TypeScript", "Frontend Development"]),
        Applicant::new("app4", "David Wilson")
            .with_scores(84, 89, 80, 82)
            .with_background("6 years", "Bachelor's in Software Engineering")
            .with_skills(["React", "Redux", "JavaScript", "HTML/CSS"]),
        Applicant::new("app5", "Emily Brown")
            .with_scores(80, 78, 88, 85)
            .with_background("2 years", "Bachelor's in Information Technology")
            .with_skills(["React", "JavaScript", "Responsive Design"]),
    ]
}

/// The three rounds every board starts with.
pub fn default_rounds() -> Vec<RoundConfig> {
    vec![
        RoundConfig::new("round1", "Initial Screening", "HR Team", "Conference Room A")
            .with_duration("30 minutes")
            .with_type(InterviewType::Behavioral),
        RoundConfig::new("round2", "Technical Interview", "Tech Lead", "Meeting Room B")
            .with_duration("60 minutes")
            .with_type(InterviewType::Technical),
        RoundConfig::new("round3", "Final Interview", "CTO", "Executive Office")
            .with_duration("45 minutes")
            .with_type(InterviewType::Final),
    ]
}

pub fn sample_jobs() -> Vec<JobPosting> {
    fn posting(
        id: &str,
        title: &str,
        department: &str,
        location: &str,
        posted_date: &str,
        applicants: u32,
        skills: &[(&str, SkillLevel)],
    ) -> JobPosting {
        JobPosting {
            id: id.into(),
            title: title.into(),
            department: department.into(),
            location: location.into(),
            employment_type: "Full-time".into(),
            posted_date: posted_date.into(),
            applicants,
            skills: skills
                .iter()
                .map(|(name, level)| RequiredSkill::new(*name, *level))
                .collect(),
        }
    }

    use SkillLevel::{Expert, Intermediate};
    vec![
        posting(
            "1",
            "Senior Frontend Developer",
            "IT Department",
            "San Francisco, CA",
            "May 10, 2025",
            24,
            &[("React", Expert), ("TypeScript", Expert), ("UI/UX", Intermediate)],
        ),
        posting(
            "2",
            "Backend Engineer",
            "IT Department",
            "Remote",
            "May 15, 2025",
            18,
            &[("Node.js", Expert), ("SQL", Expert), ("AWS", Intermediate)],
        ),
        posting(
            "3",
            "Financial Analyst",
            "Finance Department",
            "New York, NY",
            "May 12, 2025",
            15,
            &[
                ("Financial Modeling", Expert),
                ("Excel", Expert),
                ("Data Analysis", Intermediate),
            ],
        ),
        posting(
            "4",
            "Digital Marketing Specialist",
            "Marketing Department",
            "Chicago, IL",
            "May 18, 2025",
            22,
            &[
                ("SEO", Intermediate),
                ("Content Marketing", Expert),
                ("Social Media", Expert),
            ],
        ),
    ]
}
