use thiserror::Error;

/// Rejected input on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("City name is required")]
    EmptyCity,
}

/// Why a weather fetch failed.
///
/// The weather screen shows the same message for every variant; the
/// distinction only reaches the logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to weather provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather provider answered with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse weather provider JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unexpected weather provider payload: {0}")]
    Shape(String),
}

/// Why submitting the home screen did not navigate.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
