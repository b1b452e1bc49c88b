use sleepdash_types::{DailySleepMetrics, Insight, InsightKind, SleepGoal};

use crate::{MetricsAnalyzer, helpers::ratio_math::mean};

impl MetricsAnalyzer {
    /// Days on each side of the trend comparison.
    pub const TREND_WINDOW: usize = 3;
    pub const STREAK_DAYS: u32 = 7;

    /// Runs every insight rule in a fixed order and returns those that fired.
    /// When none fire, a single "keep tracking" insight is returned instead.
    pub fn generate_insights(
        today: Option<&DailySleepMetrics>,
        history: &[DailySleepMetrics],
        goal: SleepGoal,
        streak_days: u32,
    ) -> Vec<Insight> {
        let mut insights: Vec<Insight> = [
            Self::trend_insight(history),
            today.and_then(Self::hrv_insight),
            today.and_then(Self::deep_sleep_insight),
            today.and_then(|t| Self::goal_insight(t, goal)),
            Self::streak_insight(streak_days),
        ]
        .into_iter()
        .flatten()
        .collect();

        if insights.is_empty() {
            insights.push(Insight::new(
                InsightKind::KeepTracking,
                "継続的な記録で、より詳細なインサイトが得られます",
            ));
        }

        insights
    }

    /// Compares the mean total sleep of the last three days against the three
    /// before. Needs two full windows of history.
    fn trend_insight(history: &[DailySleepMetrics]) -> Option<Insight> {
        if history.len() < Self::TREND_WINDOW * 2 {
            return None;
        }

        let totals = history
            .iter()
            .map(|d| f64::from(d.total_sleep_minutes))
            .collect::<Vec<_>>();
        let (earlier, recent) = totals.split_at(totals.len() - Self::TREND_WINDOW);
        let previous = &earlier[earlier.len() - Self::TREND_WINDOW..];

        let recent_avg = mean(recent);
        let previous_avg = mean(previous);
        if recent_avg <= previous_avg {
            return None;
        }

        let gained_hours = (recent_avg - previous_avg) / 60.0;
        Some(Insight::new(
            InsightKind::Trend,
            format!("直近3日間の平均睡眠時間が改善しています（+{gained_hours:.1}時間）"),
        ))
    }

    fn hrv_insight(today: &DailySleepMetrics) -> Option<Insight> {
        let hrv = today.hrv_milliseconds?;
        (hrv >= Self::IDEAL_HRV_MS).then(|| {
            Insight::new(
                InsightKind::Hrv,
                "HRVが良好な範囲です。回復状態が優れています",
            )
        })
    }

    fn deep_sleep_insight(today: &DailySleepMetrics) -> Option<Insight> {
        if today.deep_sleep_minutes == 0 {
            return None;
        }

        let deep = today.deep_sleep_percent()?;
        (deep >= Self::IDEAL_DEEP_PERCENT).then(|| {
            Insight::new(
                InsightKind::DeepSleep,
                format!("深い睡眠の割合が理想的です（{deep:.1}%）"),
            )
        })
    }

    fn goal_insight(today: &DailySleepMetrics, goal: SleepGoal) -> Option<Insight> {
        (today.total_sleep_minutes >= goal.minutes())
            .then(|| Insight::new(InsightKind::Goal, "今日の睡眠目標を達成しました！"))
    }

    fn streak_insight(streak_days: u32) -> Option<Insight> {
        (streak_days >= Self::STREAK_DAYS).then(|| {
            Insight::new(
                InsightKind::Streak,
                format!("{streak_days}日連続で目標達成中！素晴らしいです"),
            )
        })
    }
}
