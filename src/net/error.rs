//! Error taxonomy for calls against the remote API.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// HTTP status behind this error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::Unavailable => None,
        }
    }

    /// Message the server sent back, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message } | Self::Status { message, .. } => Some(message),
            Self::Network(_) | Self::Decode(_) | Self::Unavailable => None,
        }
    }

    /// Inline text for a page that failed to load or submit.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) | Self::Unavailable => "Could not reach the server. Please try again.".to_owned(),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
            Self::Unauthorized { message } | Self::Status { message, .. } => message.clone(),
        }
    }
}

/// Fallback message for a non-2xx response without a usable body.
pub(crate) fn status_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}
