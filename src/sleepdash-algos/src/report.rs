use std::fmt::Display;

use chrono::NaiveDate;
use serde::Serialize;
use sleepdash_types::{DashboardData, Insight, QualityProfile, ScoreResult, SleepGoal};

use crate::{GoalProgress, MetricsAnalyzer, ScoreGrade, StatsSummary};

/// Everything the dashboard shows for one day, computed from a backend payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub date: Option<NaiveDate>,
    pub score: ScoreResult,
    pub grade: ScoreGrade,
    pub streak: u32,
    pub stats: StatsSummary,
    pub quality: QualityProfile,
    pub goal: GoalProgress,
    pub insights: Vec<Insight>,
}

impl DashboardReport {
    /// `default_goal` applies when the payload carries no goal of its own.
    pub fn build(data: &DashboardData, default_goal: SleepGoal) -> Self {
        let today = data.today.as_ref();
        let goal = data.goal_or(default_goal);
        let score = MetricsAnalyzer::compute_score(today);

        Self {
            date: today.and_then(|t| t.date),
            score,
            grade: ScoreGrade::from_score(score),
            streak: data.streak,
            stats: StatsSummary::new(today),
            quality: MetricsAnalyzer::compute_quality_profile(today),
            goal: GoalProgress::new(today, goal),
            insights: MetricsAnalyzer::generate_insights(today, &data.history, goal, data.streak),
        }
    }
}

impl Display for DashboardReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(date) = self.date {
            writeln!(f, "Date: {}", date.format("%Y-%m-%d"))?;
        }
        writeln!(f, "Sleep score: {} ({})", self.score.score, self.grade)?;
        writeln!(f, "Streak: {} days", self.streak)?;
        writeln!(f, "Stats:\n{}", self.stats)?;
        writeln!(f, "Quality:")?;
        for (label, value) in self.quality.dimensions() {
            writeln!(f, "\t{label}: {value:.0}")?;
        }
        writeln!(f, "Goal: {}", self.goal)?;
        write!(f, "Insights:")?;
        for insight in &self.insights {
            write!(f, "\n\t{insight}")?;
        }
        Ok(())
    }
}
