use thiserror::Error;

use crate::auth::AuthorizationError;
use crate::forms::ValidationError;

#[derive(Error, Debug)]
pub enum HanjanError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Unauthorized(#[from] AuthorizationError),

    /// A store fetch failed; the store keeps only the message.
    #[error("Failed to load {resource}: {message}")]
    Fetch { resource: String, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl HanjanError {
    /// Network-class failures: the request never produced a usable response.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            HanjanError::Http(_)
                | HanjanError::Api { .. }
                | HanjanError::Payload(_)
                | HanjanError::Fetch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, HanjanError>;
