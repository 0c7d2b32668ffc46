use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    /// HTTP status of an API rejection, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Request(e) => e.status(),
            ClientError::Decode(_) => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
