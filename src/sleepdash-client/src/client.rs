use chrono::NaiveDate;
use reqwest::{Client, Request};
use sleepdash_types::DashboardData;

use crate::{DashboardResponse, FetchError};

const DASHBOARD_ACTION: &str = "getDashboardDataV2";

/// Who the dashboard is being shown to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// Read-only client for the script backend's dashboard-data endpoint.
pub struct DashboardClient {
    client: Client,
    endpoint: String,
}

impl DashboardClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, session: &Session, date: NaiveDate) -> Result<Request, FetchError> {
        let date = date.format("%Y-%m-%d").to_string();
        let request = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("action", DASHBOARD_ACTION),
                ("userId", session.user_id.as_str()),
                ("date", date.as_str()),
            ])
            .build()?;

        Ok(request)
    }

    pub async fn fetch_dashboard(
        &self,
        session: &Session,
        date: NaiveDate,
    ) -> Result<DashboardData, FetchError> {
        let request = self.request(session, date)?;
        debug!("fetching dashboard data for {date}");

        let resp = self.client.execute(request).await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            warn!("dashboard endpoint returned {status}");
            return Err(FetchError::Status { status, body });
        }

        let data = DashboardResponse::from_json(&body)?.into_result()?;
        info!(
            "loaded dashboard for {date}: {} history days, streak {}",
            data.history.len(),
            data.streak
        );

        Ok(data)
    }
}
