//! Student records and validated scores.

use std::fmt;

use crate::core::grade::{Grade, letter_grade};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Score outside `[0, 100]` (or not a number at all).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreOutOfRange(pub f64);

impl fmt::Display for ScoreOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "score {} is outside {MIN_SCORE}..={MAX_SCORE}", self.0)
    }
}

impl std::error::Error for ScoreOutOfRange {}

/// A score known to lie in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    pub fn new(value: f64) -> Result<Self, ScoreOutOfRange> {
        if (MIN_SCORE..=MAX_SCORE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScoreOutOfRange(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn grade(self) -> Grade {
        letter_grade(self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    /// Not required to be unique.
    pub id: i32,
    pub name: String,
    pub score: Score,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(Score::new(0.0).map(Score::value), Ok(0.0));
        assert_eq!(Score::new(100.0).map(Score::value), Ok(100.0));
    }

    #[test]
    fn rejects_out_of_range_and_nan() {
        assert_eq!(Score::new(100.01), Err(ScoreOutOfRange(100.01)));
        assert_eq!(Score::new(-0.5), Err(ScoreOutOfRange(-0.5)));
        assert!(Score::new(f64::NAN).is_err());
    }

    #[test]
    fn score_knows_its_grade() {
        let score = Score::new(84.5).expect("in range");
        assert_eq!(score.grade(), Grade::B);
    }
}
