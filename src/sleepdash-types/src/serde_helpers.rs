//! Lenient readers for the dashboard backend's JSON.
//!
//! The backend is a spreadsheet script, so numbers show up as JSON numbers,
//! numeric strings, empty strings or `null` depending on the row.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

use crate::SleepGoal;

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    fn value(self) -> Option<f64> {
        match self {
            LooseNumber::Number(n) => Some(n),
            LooseNumber::Text(s) => s.trim().parse().ok(),
        }
    }
}

fn loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(value
        .and_then(LooseNumber::value)
        .filter(|v| v.is_finite()))
}

fn round_minutes(value: f64) -> u32 {
    value.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

/// Minute counts: absent, `null` or unparsable read as 0, fractions are
/// rounded and negatives clamp to 0.
///
/// Rounding happens before scoring, so 419.6 reads as 420 and lands in the
/// 7h duration tier.
pub(crate) fn minutes<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose_number(deserializer)?
        .map(round_minutes)
        .unwrap_or_default())
}

/// A goal that rounds to 0 minutes or less is absent, so the caller's
/// default applies.
pub(crate) fn goal_minutes<'de, D>(deserializer: D) -> Result<Option<SleepGoal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose_number(deserializer)?
        .map(round_minutes)
        .filter(|m| *m > 0)
        .map(SleepGoal))
}

/// Optional measurements: anything that is not a positive number is absent.
pub(crate) fn positive<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose_number(deserializer)?.filter(|v| *v > 0.0))
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp; the latter keeps the
/// calendar date at the timestamp's own offset.
pub(crate) fn flexible_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(s) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(Some(date));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(Some(dt.date_naive()));
    }

    Err(serde::de::Error::custom(format!(
        "invalid date '{s}', expected 'YYYY-MM-DD' or an RFC 3339 timestamp"
    )))
}
