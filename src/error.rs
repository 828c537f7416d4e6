//! Client Errors
//!
//! Failures of a favorites round trip, as seen from the page.

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("invalid API base URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("invalid value {value:?} for setting {key}")]
    InvalidSetting { key: &'static str, value: String },

    #[error("control has no data-id attribute")]
    MissingId,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("server answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Short text shown to the user in a notice
    pub fn user_message(&self) -> &'static str {
        match self {
            ClientError::InvalidBaseUrl { .. } | ClientError::InvalidSetting { .. } => {
                "Page configuration is invalid; using defaults."
            }
            ClientError::MissingId => "This item could not be identified.",
            ClientError::Transport(_) => "Could not reach the server. Please try again.",
            ClientError::Status { status, .. } if *status == 401 || *status == 403 => {
                "Please log in to manage your favorites."
            }
            ClientError::Status { .. } => "The server could not complete that request.",
            ClientError::Decode(_) => "The server sent an unexpected reply.",
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}
