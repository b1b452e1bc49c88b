use serde::{Deserialize, Serialize};

use crate::{DailySleepMetrics, HistoryWindow, SleepGoal, serde_helpers};

/// Payload of the dashboard-data endpoint for one user and date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default)]
    pub today: Option<DailySleepMetrics>,
    #[serde(default)]
    pub history: HistoryWindow,
    #[serde(default, deserialize_with = "serde_helpers::minutes")]
    pub streak: u32,
    #[serde(
        default,
        deserialize_with = "serde_helpers::goal_minutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub goal_minutes: Option<SleepGoal>,
}

impl DashboardData {
    /// The payload's goal, or `default` when it is missing or zero.
    pub fn goal_or(&self, default: SleepGoal) -> SleepGoal {
        self.goal_minutes
            .filter(|goal| goal.minutes() > 0)
            .unwrap_or(default)
    }
}
