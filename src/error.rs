use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("remote API error: {0}")]
    RemoteApi(String),

    #[error("invalid data format: {0}")]
    DataFormat(#[from] serde_json::Error),
}

pub type ImportResult<T> = Result<T, ImportError>;

impl ImportError {
    /// Classifies a non-success HTTP response from either API.
    pub fn from_status(service: &str, status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Self::Authentication(format!("{service} returned HTTP {status}: {body}"))
            }
            _ => Self::RemoteApi(format!("{service} returned HTTP {status}: {body}")),
        }
    }
}

impl From<reqwest::Error> for ImportError {
    fn from(e: reqwest::Error) -> Self {
        Self::RemoteApi(e.to_string())
    }
}

/// Turns a non-success response into an [`ImportError`], passing success through.
pub async fn check_status(
    service: &str,
    response: reqwest::Response,
) -> ImportResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ImportError::from_status(service, status, &body))
}
