//! MatchScorer implementations.

use rand::Rng;

use crate::domain::Score;
use crate::ports::{MatchScorer, ScoringInput};

/// Uniform random integer score within an inclusive range.
#[derive(Debug, Clone, Copy)]
pub struct RandomScorer {
    min: u8,
    max: u8,
}

impl RandomScorer {
    /// Bounds are clamped to `[0, 100]` and swapped if given in reverse.
    pub fn new(min: u8, max: u8) -> Self {
        let (min, max) = (min.min(100), max.min(100));
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn bounds(&self) -> (u8, u8) {
        (self.min, self.max)
    }
}

impl Default for RandomScorer {
    /// 65 to 95, the spread of the skill evaluation screen.
    fn default() -> Self {
        Self::new(65, 95)
    }
}

impl MatchScorer for RandomScorer {
    fn score(&self, _input: &ScoringInput<'_>) -> Score {
        let value = rand::thread_rng().gen_range(self.min..=self.max);
        Score::new(i64::from(value))
    }
}

/// Always the same score.
#[derive(Debug, Clone, Copy)]
pub struct FixedScorer(pub Score);

impl MatchScorer for FixedScorer {
    fn score(&self, _input: &ScoringInput<'_>) -> Score {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_scores_stay_in_range() {
        let scorer = RandomScorer::default();
        for _ in 0..500 {
            let score = scorer.score(&ScoringInput::subject("React")).value();
            assert!((65..=95).contains(&score), "{score} out of range");
        }
    }

    #[test]
    fn reversed_bounds_are_normalized() {
        assert_eq!(RandomScorer::new(90, 70).bounds(), (70, 90));
        assert_eq!(RandomScorer::new(120, 200).bounds(), (100, 100));
    }

    #[test]
    fn fixed_scorer_is_deterministic() {
        let scorer = FixedScorer(Score::new(77));
        assert_eq!(scorer.score(&ScoringInput::subject("SQL")), Score::new(77));
    }
}
