use std::fmt::Display;

use serde::Serialize;
use sleepdash_types::ScoreResult;

/// Badge shown next to the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreGrade {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreGrade {
    pub fn from_score(score: ScoreResult) -> Self {
        match score.score {
            80.. => ScoreGrade::Excellent,
            60..80 => ScoreGrade::Good,
            _ => ScoreGrade::NeedsImprovement,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreGrade::Excellent => "優秀",
            ScoreGrade::Good => "良好",
            ScoreGrade::NeedsImprovement => "改善推奨",
        }
    }
}

impl Display for ScoreGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(score: u8) -> ScoreGrade {
        ScoreGrade::from_score(ScoreResult { score })
    }

    #[test]
    fn thresholds() {
        assert_eq!(grade(100), ScoreGrade::Excellent);
        assert_eq!(grade(80), ScoreGrade::Excellent);
        assert_eq!(grade(79), ScoreGrade::Good);
        assert_eq!(grade(60), ScoreGrade::Good);
        assert_eq!(grade(59), ScoreGrade::NeedsImprovement);
        assert_eq!(grade(0), ScoreGrade::NeedsImprovement);
    }

    #[test]
    fn labels() {
        assert_eq!(ScoreGrade::Good.to_string(), "良好");
    }
}
