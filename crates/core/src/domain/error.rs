// Domain Error Types

use crate::domain::envelope::RawResponse;
use serde_json::{Map, Value};
use thiserror::Error;

/// Local parameter validation failure, raised before any request is sent
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "Token validation error: a valid chain id must be present, or both token_id and issuer_id"
    )]
    IdentifyingParams,

    #[error("Missing FCT address: an address is required along with a valid chain id or token_id/issuer_id pair")]
    Address,

    #[error("Missing entry hash: an entry hash is required along with a valid chain id or token_id/issuer_id pair")]
    EntryHash,

    #[error("Missing non-fungible token id: an NF token id is required along with a valid chain id or token_id/issuer_id pair")]
    NfToken,
}

/// Daemon error codes
pub mod code {
    pub const GENERIC: i64 = -1;
    pub const TOKEN_NOT_FOUND: i64 = -32800;
    pub const INVALID_ADDRESS: i64 = -32801;
    pub const TRANSACTION_NOT_FOUND: i64 = -32803;
    pub const INVALID_TRANSACTION: i64 = -32804;
    pub const TOKEN_SYNCING: i64 = -32805;
    pub const NO_EC: i64 = -32806;
}

/// Kind of remote failure reported by the daemon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    Generic,
    TokenNotFound,
    InvalidAddress,
    TransactionNotFound,
    InvalidTransaction,
    TokenSyncing,
    NoEntryCredits,
}

const ERROR_CODES: &[(i64, ApiErrorKind)] = &[
    (code::GENERIC, ApiErrorKind::Generic),
    (code::TOKEN_NOT_FOUND, ApiErrorKind::TokenNotFound),
    (code::INVALID_ADDRESS, ApiErrorKind::InvalidAddress),
    (code::TRANSACTION_NOT_FOUND, ApiErrorKind::TransactionNotFound),
    (code::INVALID_TRANSACTION, ApiErrorKind::InvalidTransaction),
    (code::TOKEN_SYNCING, ApiErrorKind::TokenSyncing),
    (code::NO_EC, ApiErrorKind::NoEntryCredits),
];

impl ApiErrorKind {
    /// Look up the kind for a daemon error code; unknown codes are `Generic`
    pub fn from_code(code: i64) -> Self {
        ERROR_CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, kind)| *kind)
            .unwrap_or(ApiErrorKind::Generic)
    }
}

/// Remote error returned by the daemon with an HTTP status >= 400
#[derive(Error, Debug, Clone)]
#[error("{code}: {message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub code: i64,
    pub message: String,
    pub data: Value,
    pub response: RawResponse,
}

impl ApiError {
    pub const DEFAULT_MESSAGE: &'static str = "An unknown error occurred";

    /// Build from the `error` member of a failure body.
    ///
    /// Missing members fall back to code `-1`, the default message and an
    /// empty data object. Anything that is not a JSON object is treated as a
    /// missing `error` member.
    pub fn from_response(response: RawResponse) -> Self {
        let error = serde_json::from_str::<Value>(&response.body)
            .ok()
            .and_then(|body| body.get("error").cloned())
            .unwrap_or(Value::Null);

        let code = error
            .get("code")
            .and_then(Value::as_i64)
            .unwrap_or(code::GENERIC);
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(Self::DEFAULT_MESSAGE)
            .to_string();
        let data = error
            .get("data")
            .filter(|d| !d.is_null())
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));

        Self {
            kind: ApiErrorKind::from_code(code),
            code,
            message,
            data,
            response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(status: u16, body: Value) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_code_table() {
        assert_eq!(ApiErrorKind::from_code(-1), ApiErrorKind::Generic);
        assert_eq!(ApiErrorKind::from_code(-32800), ApiErrorKind::TokenNotFound);
        assert_eq!(ApiErrorKind::from_code(-32801), ApiErrorKind::InvalidAddress);
        assert_eq!(
            ApiErrorKind::from_code(-32803),
            ApiErrorKind::TransactionNotFound
        );
        assert_eq!(
            ApiErrorKind::from_code(-32804),
            ApiErrorKind::InvalidTransaction
        );
        assert_eq!(ApiErrorKind::from_code(-32805), ApiErrorKind::TokenSyncing);
        assert_eq!(ApiErrorKind::from_code(-32806), ApiErrorKind::NoEntryCredits);
    }

    #[test]
    fn test_unknown_code_is_generic() {
        assert_eq!(ApiErrorKind::from_code(-32802), ApiErrorKind::Generic);
        assert_eq!(ApiErrorKind::from_code(-32601), ApiErrorKind::Generic);
        assert_eq!(ApiErrorKind::from_code(0), ApiErrorKind::Generic);
    }

    #[test]
    fn test_from_response_extracts_fields() {
        let err = ApiError::from_response(response(
            404,
            json!({"error": {"code": -32800, "message": "not found", "data": {"chain-id": "c1"}}}),
        ));

        assert_eq!(err.kind, ApiErrorKind::TokenNotFound);
        assert_eq!(err.code, -32800);
        assert_eq!(err.message, "not found");
        assert_eq!(err.data, json!({"chain-id": "c1"}));
        assert_eq!(err.response.status, 404);
        assert_eq!(err.to_string(), "-32800: not found");
    }

    #[test]
    fn test_from_response_defaults() {
        let err = ApiError::from_response(response(500, json!({"error": {}})));
        assert_eq!(err.kind, ApiErrorKind::Generic);
        assert_eq!(err.code, -1);
        assert_eq!(err.message, ApiError::DEFAULT_MESSAGE);
        assert_eq!(err.data, json!({}));

        let err = ApiError::from_response(RawResponse {
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        });
        assert_eq!(err.kind, ApiErrorKind::Generic);
        assert_eq!(err.code, -1);
        assert_eq!(err.response.body, "<html>Bad Gateway</html>");
    }

    #[test]
    fn test_validation_messages_name_missing_param() {
        assert!(ValidationError::Address.to_string().contains("address"));
        assert!(ValidationError::EntryHash.to_string().contains("entry hash"));
        assert!(ValidationError::NfToken.to_string().contains("NF token"));
        assert!(ValidationError::IdentifyingParams
            .to_string()
            .contains("chain id"));
    }
}
