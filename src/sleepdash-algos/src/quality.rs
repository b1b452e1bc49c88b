use sleepdash_types::{DailySleepMetrics, QualityProfile};

use crate::{MetricsAnalyzer, helpers::ratio_math::capped_percent};

impl MetricsAnalyzer {
    pub const IDEAL_SLEEP_HOURS: f64 = 8.0;
    pub const IDEAL_DEEP_PERCENT: f64 = 20.0;
    pub const IDEAL_REM_PERCENT: f64 = 25.0;
    pub const IDEAL_HRV_MS: f64 = 60.0;
    pub const IDEAL_EFFICIENCY_PERCENT: f64 = 85.0;

    /// Linear normalisation of each dimension against its ideal, capped at 100.
    ///
    /// Efficiency is recomputed from asleep vs. awake minutes rather than
    /// taken from the backend's `efficiency_percent`.
    pub fn compute_quality_profile(today: Option<&DailySleepMetrics>) -> QualityProfile {
        let Some(today) = today else {
            return QualityProfile::default();
        };

        let mut quality = QualityProfile {
            total_sleep: capped_percent(today.sleep_hours(), Self::IDEAL_SLEEP_HOURS),
            ..Default::default()
        };

        if let Some(deep) = today.deep_sleep_percent() {
            quality.deep_sleep = capped_percent(deep, Self::IDEAL_DEEP_PERCENT);
        }

        if let Some(rem) = today.rem_sleep_percent() {
            quality.rem_sleep = capped_percent(rem, Self::IDEAL_REM_PERCENT);
        }

        if let Some(hrv) = today.hrv_milliseconds {
            quality.hrv = capped_percent(hrv, Self::IDEAL_HRV_MS);
        }

        if today.has_data() {
            let asleep = f64::from(today.total_sleep_minutes);
            let in_bed = asleep + f64::from(today.awake_minutes);
            quality.efficiency =
                capped_percent(asleep / in_bed * 100.0, Self::IDEAL_EFFICIENCY_PERCENT);
        }

        quality
    }
}
