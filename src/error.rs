use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by calls against the target service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },
    #[error("login response carries no access_token")]
    MissingToken,
}

impl ApiError {
    /// Rejections cost one account and the run continues; transport
    /// failures abort the worker.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Status { .. } | ApiError::MissingToken)
    }
}
