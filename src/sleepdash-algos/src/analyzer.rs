use sleepdash_types::{DailySleepMetrics, ScoreResult};

/// Rule-based evaluation of a single night: composite score, radar profile
/// and insights. Holds no state; every call is a pure function of its inputs.
///
/// The composite score is the sum of four capped sub-scores:
/// 1. Duration, max 40: 7-9h scores best, anything recorded earns at least 10
/// 2. Deep sleep share, max 30: 20% of total sleep or more
/// 3. HRV, max 20: only when a reading is present
/// 4. Efficiency, max 10: the backend-reported percentage as given
pub struct MetricsAnalyzer;

impl MetricsAnalyzer {
    pub const DURATION_MAX: u8 = 40;
    pub const DEEP_SLEEP_MAX: u8 = 30;
    pub const HRV_MAX: u8 = 20;
    pub const EFFICIENCY_MAX: u8 = 10;

    pub fn compute_score(today: Option<&DailySleepMetrics>) -> ScoreResult {
        let Some(today) = today.filter(|t| t.has_data()) else {
            return ScoreResult::default();
        };

        let score = Self::duration_points(today.sleep_hours())
            + Self::deep_sleep_points(today.deep_sleep_percent().unwrap_or_default())
            + Self::hrv_points(today.hrv_milliseconds)
            + Self::efficiency_points(today.efficiency_percent);

        ScoreResult {
            score: score.min(ScoreResult::MAX),
        }
    }

    fn duration_points(hours: f64) -> u8 {
        if (7.0..=9.0).contains(&hours) {
            Self::DURATION_MAX
        } else if (6.0..7.0).contains(&hours) {
            30
        } else if (5.0..6.0).contains(&hours) {
            20
        } else {
            10
        }
    }

    fn deep_sleep_points(deep_percent: f64) -> u8 {
        if deep_percent >= 20.0 {
            Self::DEEP_SLEEP_MAX
        } else if deep_percent >= 15.0 {
            20
        } else if deep_percent >= 10.0 {
            10
        } else {
            0
        }
    }

    fn hrv_points(hrv: Option<f64>) -> u8 {
        match hrv {
            Some(hrv) if hrv >= 60.0 => Self::HRV_MAX,
            Some(hrv) if hrv >= 40.0 => 15,
            Some(hrv) if hrv >= 20.0 => 10,
            _ => 0,
        }
    }

    fn efficiency_points(efficiency: Option<f64>) -> u8 {
        match efficiency {
            Some(efficiency) if efficiency >= 85.0 => Self::EFFICIENCY_MAX,
            Some(efficiency) if efficiency >= 75.0 => 7,
            Some(efficiency) if efficiency >= 65.0 => 5,
            _ => 0,
        }
    }
}
