use thiserror::Error;

/// Failure taxonomy for calls against the NutritionDB API.
///
/// `AuthExpired` carries a global side effect (the adapter tears the session
/// down before returning it); everything else is handled by the screen that
/// made the call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(Box<ureq::Error>),

    #[error("{0}")]
    AuthExpired(String),

    #[error("not allowed: {0}")]
    Forbidden(String),

    #[error("{0}")]
    Rejected(String),

    #[error("unexpected response (HTTP {status}): {body}")]
    Unexpected { status: u16, body: String },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn transport(err: ureq::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}
