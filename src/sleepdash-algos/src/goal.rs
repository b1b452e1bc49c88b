use std::fmt::Display;

use serde::Serialize;
use sleepdash_types::{DailySleepMetrics, SleepGoal};

use crate::helpers::ratio_math::round_float;

/// How far last night's sleep got towards the goal.
///
/// `percent` is not capped; sleeping past the goal reads above 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    pub goal_minutes: u32,
    pub actual_minutes: u32,
    pub remaining_minutes: u32,
    pub percent: f64,
}

impl GoalProgress {
    pub fn new(today: Option<&DailySleepMetrics>, goal: SleepGoal) -> Self {
        let goal_minutes = goal.minutes();
        let actual_minutes = today.map(|t| t.total_sleep_minutes).unwrap_or_default();

        let percent = if goal_minutes == 0 {
            0.0
        } else {
            round_float(f64::from(actual_minutes) / f64::from(goal_minutes) * 100.0)
        };

        Self {
            goal_minutes,
            actual_minutes,
            remaining_minutes: goal_minutes.saturating_sub(actual_minutes),
            percent,
        }
    }

    pub fn is_met(&self) -> bool {
        self.actual_minutes >= self.goal_minutes
    }
}

impl Display for GoalProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}分 ({:.1}%), 残り{}分",
            self.actual_minutes, self.goal_minutes, self.percent, self.remaining_minutes
        )
    }
}
