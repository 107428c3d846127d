//! Percentage scores and the tiers derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A percentage score, always within `[0, 100]`.
///
/// Construction clamps instead of failing, and so does deserialization:
/// `150` becomes `100` and `-3` becomes `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: Score = Score(0);
    pub const MAX: Score = Score(100);

    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn tier(self) -> MatchTier {
        MatchTier::from(self)
    }

    pub fn rating(self) -> SkillRating {
        SkillRating::from(self)
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Banding of a match score used by the ranking table and the round board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// 90 and above.
    Excellent,
    /// 80 to 89.
    Strong,
    Fair,
}

impl From<Score> for MatchTier {
    fn from(score: Score) -> Self {
        match score.value() {
            90.. => MatchTier::Excellent,
            80..=89 => MatchTier::Strong,
            _ => MatchTier::Fair,
        }
    }
}

/// Label shown next to an evaluated skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillRating {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl From<Score> for SkillRating {
    fn from(score: Score) -> Self {
        match score.value() {
            90.. => SkillRating::Expert,
            80..=89 => SkillRating::Advanced,
            70..=79 => SkillRating::Intermediate,
            _ => SkillRating::Beginner,
        }
    }
}

impl fmt::Display for SkillRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkillRating::Beginner => "Beginner",
            SkillRating::Intermediate => "Intermediate",
            SkillRating::Advanced => "Advanced",
            SkillRating::Expert => "Expert",
        };
        f.write_str(label)
    }
}

/// Rounded mean of a set of scores, half rounding up.
///
/// Returns `None` when there is nothing to average.
pub fn overall_score(scores: &[Score]) -> Option<Score> {
    if scores.is_empty() {
        return None;
    }
    let n = scores.len() as u64;
    let sum: u64 = scores.iter().map(|s| u64::from(s.value())).sum();
    Some(Score::new(((sum + n / 2) / n) as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-3, 0)]
    #[case(0, 0)]
    #[case(42, 42)]
    #[case(100, 100)]
    #[case(150, 100)]
    fn scores_are_clamped(#[case] raw: i64, #[case] expected: u8) {
        assert_eq!(Score::new(raw).value(), expected);
    }

    #[test]
    fn deserialization_clamps() {
        let score: Score = serde_json::from_str("130").unwrap();
        assert_eq!(score, Score::MAX);

        let score: Score = serde_json::from_str("-1").unwrap();
        assert_eq!(score, Score::MIN);
    }

    #[rstest]
    #[case(92, MatchTier::Excellent)]
    #[case(90, MatchTier::Excellent)]
    #[case(89, MatchTier::Strong)]
    #[case(80, MatchTier::Strong)]
    #[case(79, MatchTier::Fair)]
    fn match_tier_thresholds(#[case] raw: i64, #[case] tier: MatchTier) {
        assert_eq!(Score::new(raw).tier(), tier);
    }

    #[rstest]
    #[case(95, SkillRating::Expert)]
    #[case(85, SkillRating::Advanced)]
    #[case(70, SkillRating::Intermediate)]
    #[case(65, SkillRating::Beginner)]
    fn skill_rating_thresholds(#[case] raw: i64, #[case] rating: SkillRating) {
        assert_eq!(Score::new(raw).rating(), rating);
    }

    #[test]
    fn overall_score_rounds_half_up() {
        let scores = [Score::new(80), Score::new(85)];
        assert_eq!(overall_score(&scores), Some(Score::new(83)));

        let scores = [Score::new(70), Score::new(71), Score::new(71)];
        assert_eq!(overall_score(&scores), Some(Score::new(71)));
    }

    #[test]
    fn overall_score_of_nothing_is_none() {
        assert_eq!(overall_score(&[]), None);
    }
}
