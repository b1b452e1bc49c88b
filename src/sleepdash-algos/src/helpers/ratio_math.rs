/// `value` as a percentage of `target`, capped to `0.0..=100.0`.
/// NaN (e.g. a zero target with zero value) collapses to 0.
pub fn capped_percent(value: f64, target: f64) -> f64 {
    (value / target * 100.0).max(0.0).min(100.0)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0_f64
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

pub fn round_float(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
