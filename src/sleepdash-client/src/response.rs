use serde::Deserialize;
use sleepdash_types::DashboardData;

use crate::FetchError;

const DEFAULT_BACKEND_ERROR: &str = "failed to fetch dashboard data";

/// Envelope the backend wraps every dashboard payload in.
#[derive(Debug, Deserialize)]
pub struct DashboardResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub data: DashboardData,
}

impl DashboardResponse {
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Unwraps the payload, turning `success: false` into [`FetchError::Backend`].
    pub fn into_result(self) -> Result<DashboardData, FetchError> {
        if !self.success {
            let message = self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BACKEND_ERROR.to_owned());
            return Err(FetchError::Backend(message));
        }

        Ok(self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_envelope() {
        let body = r#"{
            "success": true,
            "today": { "date": "2025-03-07", "totalSleep": 455, "hrv": 61 },
            "history": [{ "date": "2025-03-07", "totalSleep": 455 }],
            "streak": 4,
            "goalMinutes": 420
        }"#;

        let data = DashboardResponse::from_json(body)
            .unwrap()
            .into_result()
            .unwrap();
        let today = data.today.unwrap();
        assert_eq!(today.total_sleep_minutes, 455);
        assert_eq!(today.hrv_milliseconds, Some(61.0));
        assert_eq!(data.history.len(), 1);
        assert_eq!(data.streak, 4);
        assert_eq!(data.goal_minutes.map(|g| g.minutes()), Some(420));
    }

    #[test]
    fn backend_error_message() {
        let body = r#"{ "success": false, "error": "user not found" }"#;
        let err = DashboardResponse::from_json(body)
            .unwrap()
            .into_result()
            .unwrap_err();
        assert!(matches!(err, FetchError::Backend(ref m) if m == "user not found"));
    }

    #[test]
    fn missing_success_is_a_failure() {
        let body = r#"{ "today": { "totalSleep": 400 } }"#;
        let err = DashboardResponse::from_json(body)
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(err.to_string(), "backend error: failed to fetch dashboard data");
    }

    #[test]
    fn malformed_body() {
        let err = DashboardResponse::from_json("<html>moved</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
