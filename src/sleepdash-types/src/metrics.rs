use std::ops::Deref;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::serde_helpers;

/// One night of sleep as reported by the dashboard backend.
///
/// Stage minutes are taken as given. Nothing checks that
/// `deep + light + rem <= total`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySleepMetrics {
    #[serde(
        default,
        deserialize_with = "serde_helpers::flexible_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<NaiveDate>,
    #[serde(
        rename = "totalSleep",
        alias = "totalSleepMinutes",
        default,
        deserialize_with = "serde_helpers::minutes"
    )]
    pub total_sleep_minutes: u32,
    #[serde(
        rename = "deepSleep",
        alias = "deepSleepMinutes",
        default,
        deserialize_with = "serde_helpers::minutes"
    )]
    pub deep_sleep_minutes: u32,
    #[serde(
        rename = "lightSleep",
        alias = "lightSleepMinutes",
        default,
        deserialize_with = "serde_helpers::minutes"
    )]
    pub light_sleep_minutes: u32,
    #[serde(
        rename = "remSleep",
        alias = "remSleepMinutes",
        default,
        deserialize_with = "serde_helpers::minutes"
    )]
    pub rem_sleep_minutes: u32,
    #[serde(
        rename = "awakeDuration",
        alias = "awakeMinutes",
        default,
        deserialize_with = "serde_helpers::minutes"
    )]
    pub awake_minutes: u32,
    #[serde(
        rename = "hrv",
        alias = "hrvMilliseconds",
        default,
        deserialize_with = "serde_helpers::positive",
        skip_serializing_if = "Option::is_none"
    )]
    pub hrv_milliseconds: Option<f64>,
    #[serde(
        rename = "restingHeartRate",
        alias = "restingHeartRateBpm",
        default,
        deserialize_with = "serde_helpers::positive",
        skip_serializing_if = "Option::is_none"
    )]
    pub resting_heart_rate_bpm: Option<f64>,
    #[serde(
        rename = "efficiency",
        alias = "efficiencyPercent",
        default,
        deserialize_with = "serde_helpers::positive",
        skip_serializing_if = "Option::is_none"
    )]
    pub efficiency_percent: Option<f64>,
}

impl DailySleepMetrics {
    /// A zero total means the backend had no sleep recorded for the day.
    pub fn has_data(&self) -> bool {
        self.total_sleep_minutes > 0
    }

    pub fn sleep_hours(&self) -> f64 {
        f64::from(self.total_sleep_minutes) / 60.0
    }

    /// Share of total sleep spent in `minutes`, in percent. `None` without data.
    pub fn stage_percent(&self, minutes: u32) -> Option<f64> {
        if !self.has_data() {
            return None;
        }
        Some(f64::from(minutes) / f64::from(self.total_sleep_minutes) * 100.0)
    }

    pub fn deep_sleep_percent(&self) -> Option<f64> {
        self.stage_percent(self.deep_sleep_minutes)
    }

    pub fn rem_sleep_percent(&self) -> Option<f64> {
        self.stage_percent(self.rem_sleep_minutes)
    }
}

/// Chronologically ascending run of days preceding (and usually including)
/// the evaluated day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryWindow(pub Vec<DailySleepMetrics>);

impl HistoryWindow {
    pub fn new(days: Vec<DailySleepMetrics>) -> Self {
        Self(days)
    }
}

impl Deref for HistoryWindow {
    type Target = [DailySleepMetrics];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<DailySleepMetrics>> for HistoryWindow {
    fn from(days: Vec<DailySleepMetrics>) -> Self {
        Self(days)
    }
}

impl<'a> IntoIterator for &'a HistoryWindow {
    type Item = &'a DailySleepMetrics;
    type IntoIter = std::slice::Iter<'a, DailySleepMetrics>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_field_names() {
        let json = r#"{
            "date": "2025-03-01",
            "totalSleep": 452,
            "deepSleep": 95,
            "lightSleep": 230,
            "remSleep": 100,
            "awakeDuration": 27,
            "hrv": 58.5,
            "restingHeartRate": 54,
            "efficiency": 91
        }"#;

        let day: DailySleepMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(day.total_sleep_minutes, 452);
        assert_eq!(day.deep_sleep_minutes, 95);
        assert_eq!(day.light_sleep_minutes, 230);
        assert_eq!(day.rem_sleep_minutes, 100);
        assert_eq!(day.awake_minutes, 27);
        assert_eq!(day.hrv_milliseconds, Some(58.5));
        assert_eq!(day.resting_heart_rate_bpm, Some(54.0));
        assert_eq!(day.efficiency_percent, Some(91.0));
    }

    #[test]
    fn decodes_long_field_names() {
        let json = r#"{
            "totalSleepMinutes": 480,
            "deepSleepMinutes": 120,
            "awakeMinutes": 10,
            "hrvMilliseconds": 65,
            "efficiencyPercent": 90
        }"#;

        let day: DailySleepMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(day.total_sleep_minutes, 480);
        assert_eq!(day.deep_sleep_minutes, 120);
        assert_eq!(day.awake_minutes, 10);
        assert_eq!(day.hrv_milliseconds, Some(65.0));
        assert_eq!(day.efficiency_percent, Some(90.0));
    }

    #[test]
    fn missing_and_null_fields_default() {
        let json = r#"{ "totalSleep": null, "hrv": null, "remSleep": "" }"#;

        let day: DailySleepMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(day, DailySleepMetrics::default());
        assert!(!day.has_data());
    }

    #[test]
    fn loose_numbers() {
        let json = r#"{
            "totalSleep": "420",
            "deepSleep": 80.6,
            "awakeDuration": -5,
            "hrv": 0,
            "restingHeartRate": "abc"
        }"#;

        let day: DailySleepMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(day.total_sleep_minutes, 420);
        assert_eq!(day.deep_sleep_minutes, 81);
        assert_eq!(day.awake_minutes, 0);
        assert_eq!(day.hrv_milliseconds, None);
        assert_eq!(day.resting_heart_rate_bpm, None);
    }

    #[test]
    fn rfc3339_date() {
        let json = r#"{ "date": "2025-03-01T23:30:00+09:00" }"#;
        let day: DailySleepMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2025, 3, 1));
    }

    #[test]
    fn invalid_date_is_an_error() {
        let json = r#"{ "date": "March 1st" }"#;
        assert!(serde_json::from_str::<DailySleepMetrics>(json).is_err());
    }

    #[test]
    fn serializes_backend_field_names() {
        let day = DailySleepMetrics {
            date: NaiveDate::from_ymd_opt(2025, 3, 1),
            total_sleep_minutes: 400,
            hrv_milliseconds: Some(42.0),
            ..Default::default()
        };

        let value = serde_json::to_value(&day).unwrap();
        assert_eq!(value["date"], "2025-03-01");
        assert_eq!(value["totalSleep"], 400);
        assert_eq!(value["hrv"], 42.0);
        assert!(value.get("efficiency").is_none());
    }

    #[test]
    fn stage_percent_without_data() {
        let day = DailySleepMetrics {
            deep_sleep_minutes: 60,
            ..Default::default()
        };
        assert_eq!(day.deep_sleep_percent(), None);
    }

    #[test]
    fn stage_percent() {
        let day = DailySleepMetrics {
            total_sleep_minutes: 400,
            deep_sleep_minutes: 100,
            rem_sleep_minutes: 80,
            ..Default::default()
        };
        assert_eq!(day.deep_sleep_percent(), Some(25.0));
        assert_eq!(day.rem_sleep_percent(), Some(20.0));
    }

    #[test]
    fn history_is_a_json_array() {
        let history: HistoryWindow =
            serde_json::from_str(r#"[{ "totalSleep": 400 }, { "totalSleep": 410 }]"#).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].total_sleep_minutes, 410);
    }
}
