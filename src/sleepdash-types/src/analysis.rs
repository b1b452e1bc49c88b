use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Composite sleep score, 0-100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
}

impl ScoreResult {
    pub const MAX: u8 = 100;
}

/// Per-dimension quality for the radar view, each value in `0.0..=100.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityProfile {
    pub total_sleep: f64,
    pub deep_sleep: f64,
    pub rem_sleep: f64,
    pub hrv: f64,
    pub efficiency: f64,
}

impl QualityProfile {
    /// Dimensions in radar order with their display labels.
    pub fn dimensions(&self) -> [(&'static str, f64); 5] {
        [
            ("総睡眠", self.total_sleep),
            ("深い睡眠", self.deep_sleep),
            ("REM睡眠", self.rem_sleep),
            ("HRV", self.hrv),
            ("睡眠効率", self.efficiency),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Trend,
    Hrv,
    DeepSleep,
    Goal,
    Streak,
    KeepTracking,
}

impl InsightKind {
    pub fn icon(self) -> &'static str {
        match self {
            InsightKind::Trend => "📈",
            InsightKind::Hrv => "💚",
            InsightKind::DeepSleep => "🌟",
            InsightKind::Goal => "🎯",
            InsightKind::Streak => "🔥",
            InsightKind::KeepTracking => "💤",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub icon: String,
    pub text: String,
}

impl Insight {
    pub fn new(kind: InsightKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            icon: kind.icon().to_owned(),
            text: text.into(),
        }
    }
}

impl Display for Insight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.icon, self.text)
    }
}

/// Nightly sleep target in minutes. Deployments pick their own default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SleepGoal(pub u32);

impl SleepGoal {
    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl From<u32> for SleepGoal {
    fn from(minutes: u32) -> Self {
        Self(minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insight_icon_follows_kind() {
        let insight = Insight::new(InsightKind::Goal, "done");
        assert_eq!(insight.icon, "🎯");
        assert_eq!(insight.to_string(), "🎯 done");
    }

    #[test]
    fn quality_profile_uses_camel_case() {
        let profile = QualityProfile {
            total_sleep: 50.0,
            ..Default::default()
        };
        let value = serde_json::to_value(profile).unwrap();
        assert_eq!(value["totalSleep"], 50.0);
        assert_eq!(value["remSleep"], 0.0);
    }

    #[test]
    fn insight_kind_names() {
        let value = serde_json::to_value(InsightKind::KeepTracking).unwrap();
        assert_eq!(value, "keep_tracking");
    }
}
