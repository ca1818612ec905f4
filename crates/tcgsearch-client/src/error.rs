//! Error types for tcgsearch-client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid upstream base URL: {url}")]
    InvalidBaseUrl { url: String },

    #[error("HTTP client setup failed: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("Could not decode {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Upstream path the error came from, if any
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            ClientError::Transport { endpoint, .. }
            | ClientError::Status { endpoint, .. }
            | ClientError::Decode { endpoint, .. } => Some(endpoint),
            _ => None,
        }
    }
}

/// Result type with ClientError
pub type ClientResult<T> = Result<T, ClientError>;
