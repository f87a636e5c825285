#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by every card API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response text, or a generic description when the body was empty.
        message: String,
    },
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from the raw response text.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let trimmed = body.trim();
        let message = if trimmed.is_empty() {
            format!("Request failed with status {status}")
        } else {
            trimmed.to_owned()
        };
        Self::Status { status, message }
    }

    /// HTTP status code, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// Whether the server rejected a card id that is already taken.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    /// Whether the requested resource does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
