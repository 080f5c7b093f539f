use thiserror::Error;

/// Everything that can go wrong between a page and the backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The backend answered 401 to a request carrying a token. The stored
    /// session has already been cleared.
    #[error("session expired, please sign in again")]
    Unauthorized,

    /// Any other non-2xx answer, with the message the backend sent (if any).
    #[error("request failed with status {status}{}", detail(.message))]
    Status { status: u16, message: Option<String> },

    #[error("network error: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    /// Rejected on the client before any request was sent.
    #[error("{0}")]
    Invalid(String),
}

fn detail(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl ApiError {
    /// The message to show a person: the server's own message when there is
    /// one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Invalid(message) => message.clone(),
            ApiError::Unauthorized => self.to_string(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
