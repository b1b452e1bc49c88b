pub(crate) mod analyzer;
pub use analyzer::MetricsAnalyzer;

pub(crate) mod quality;

pub(crate) mod insights;

pub(crate) mod grade;
pub use grade::ScoreGrade;

pub(crate) mod goal;
pub use goal::GoalProgress;

pub(crate) mod stats;
pub use stats::StatsSummary;

pub(crate) mod report;
pub use report::DashboardReport;

pub mod helpers;
