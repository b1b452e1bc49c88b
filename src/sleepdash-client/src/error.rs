use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach dashboard endpoint: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("dashboard endpoint returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("invalid dashboard response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("backend error: {0}")]
    Backend(String),
}
