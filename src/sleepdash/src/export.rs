use std::io::Write;

use sleepdash_types::{DailySleepMetrics, HistoryWindow};

const HEADERS: [&str; 8] = [
    "日付",
    "総睡眠時間(分)",
    "深い睡眠(分)",
    "浅い睡眠(分)",
    "REM睡眠(分)",
    "覚醒時間(分)",
    "HRV",
    "安静時心拍数",
];

/// Writes one CSV row per history day. Zero or missing values are left empty.
pub fn write_history_csv<W: Write>(writer: W, history: &HistoryWindow) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADERS)?;
    for day in history {
        wtr.write_record(row(day))?;
    }
    wtr.flush()?;
    Ok(())
}

fn row(day: &DailySleepMetrics) -> [String; 8] {
    let minutes = |m: u32| if m > 0 { m.to_string() } else { String::new() };
    let optional = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();

    [
        day.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        minutes(day.total_sleep_minutes),
        minutes(day.deep_sleep_minutes),
        minutes(day.light_sleep_minutes),
        minutes(day.rem_sleep_minutes),
        minutes(day.awake_minutes),
        optional(day.hrv_milliseconds),
        optional(day.resting_heart_rate_bpm),
    ]
}
