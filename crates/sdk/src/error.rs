//! SDK Error Types

use fat_core::domain::{ApiError, ApiErrorKind, ValidationError};
use fat_core::port::TransportError;
use fat_core::FatError;
use fat_infra_http::TransportSetupError;
use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Validation error: {0}")]
    Validation(ValidationError),

    #[error("API error {0}")]
    Api(ApiError),

    #[error("Transport error: {0}")]
    Transport(TransportError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Client setup error: {0}")]
    Setup(#[from] TransportSetupError),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl SdkError {
    /// Remote error kind, if the daemon rejected the call
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        match self {
            SdkError::Api(e) => Some(e.kind),
            _ => None,
        }
    }
}

impl From<FatError> for SdkError {
    fn from(e: FatError) -> Self {
        match e {
            FatError::Validation(v) => SdkError::Validation(v),
            FatError::Api(api) => SdkError::Api(api),
            FatError::Transport(t) => SdkError::Transport(t),
            FatError::Serialization(s) => SdkError::Serialization(s),
            FatError::MissingResult => {
                SdkError::InvalidResponse("response has no result member".to_string())
            }
        }
    }
}
