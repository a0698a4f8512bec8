// Central Error Type for the Client Core

use thiserror::Error;

/// Client-level error type
#[derive(Error, Debug)]
pub enum FatError {
    #[error("Validation error: {0}")]
    Validation(#[from] crate::domain::ValidationError),

    #[error("API error {0}")]
    Api(#[from] crate::domain::ApiError),

    #[error("Transport error: {0}")]
    Transport(#[from] crate::port::TransportError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Response has no result member")]
    MissingResult,
}

impl FatError {
    /// Remote error kind, if this is a daemon-side failure
    pub fn api_kind(&self) -> Option<crate::domain::ApiErrorKind> {
        match self {
            FatError::Api(e) => Some(e.kind),
            _ => None,
        }
    }
}

/// Result type alias using FatError
pub type Result<T> = std::result::Result<T, FatError>;
