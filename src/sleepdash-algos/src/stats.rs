use std::fmt::Display;

use serde::Serialize;
use sleepdash_types::DailySleepMetrics;

const NO_VALUE: &str = "--";

/// Headline numbers formatted for display; `--` where there is nothing to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    pub total_sleep: String,
    pub deep_sleep: String,
    pub hrv: String,
    pub efficiency: String,
}

impl StatsSummary {
    pub fn new(today: Option<&DailySleepMetrics>) -> Self {
        let Some(today) = today else {
            return Self::empty();
        };

        let total_sleep = if today.has_data() {
            format!("{:.1}時間", today.sleep_hours())
        } else {
            NO_VALUE.to_owned()
        };

        let deep_sleep = if today.deep_sleep_minutes > 0 {
            format!("{}分", today.deep_sleep_minutes)
        } else {
            NO_VALUE.to_owned()
        };

        Self {
            total_sleep,
            deep_sleep,
            hrv: Self::optional(today.hrv_milliseconds, " ms"),
            efficiency: Self::optional(today.efficiency_percent, "%"),
        }
    }

    fn empty() -> Self {
        Self {
            total_sleep: NO_VALUE.to_owned(),
            deep_sleep: NO_VALUE.to_owned(),
            hrv: NO_VALUE.to_owned(),
            efficiency: NO_VALUE.to_owned(),
        }
    }

    fn optional(value: Option<f64>, unit: &str) -> String {
        match value {
            Some(v) if v > 0.0 => format!("{v}{unit}"),
            _ => NO_VALUE.to_owned(),
        }
    }
}

impl Display for StatsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\t総睡眠時間: {}", self.total_sleep)?;
        writeln!(f, "\t深い睡眠: {}", self.deep_sleep)?;
        writeln!(f, "\tHRV: {}", self.hrv)?;
        write!(f, "\t睡眠効率: {}", self.efficiency)
    }
}
