pub mod analysis;
pub mod dashboard;
pub mod metrics;

mod serde_helpers;

pub use analysis::{Insight, InsightKind, QualityProfile, ScoreResult, SleepGoal};
pub use dashboard::DashboardData;
pub use metrics::{DailySleepMetrics, HistoryWindow};
