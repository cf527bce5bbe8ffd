//! Error type shared by every HTTP collaborator.

use empleados_api_models::ErrorBody;
use thiserror::Error;

/// Result alias for API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure reported by an [`EmployeesApi`](crate::EmployeesApi) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Reason extracted from the error body, when present.
        message: Option<String>,
    },
    /// The request never produced a response (network, CORS, timeout).
    #[error("request could not be completed: {0}")]
    Transport(String),
    /// The response arrived but its body did not match the expected shape.
    #[error("response could not be decoded: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a raw response body, extracting `error`/`message`.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.text().map(str::to_string));
        Self::Status { status, message }
    }

    /// Server-provided reason, if the error carried one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// Text to show the user: the server reason or the supplied fallback.
    #[must_use]
    pub fn user_message(&self, fallback: impl FnOnce() -> String) -> String {
        self.server_message()
            .map_or_else(fallback, ToString::to_string)
    }
}
