//! Daemon error responses mapped to typed errors

mod common;

use common::{default_client, respond_with, status};
use fat_sdk::{ApiErrorKind, SdkError, TokenParams};
use serde_json::json;
use wiremock::{MockServer, ResponseTemplate};

#[tokio::test]
async fn test_token_not_found() {
    let server = MockServer::start().await;
    respond_with(
        &server,
        status(404, json!({"error": {"code": -32800, "message": "not found"}})),
    )
    .await;

    let err = default_client(&server)
        .get_issuance(TokenParams::chain("c1"))
        .await
        .unwrap_err();

    match err {
        SdkError::Api(api) => {
            assert_eq!(api.kind, ApiErrorKind::TokenNotFound);
            assert_eq!(api.message, "not found");
            assert_eq!(api.code, -32800);
            assert_eq!(api.data, json!({}));
            assert_eq!(api.response.status, 404);
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_every_table_code() {
    let cases = [
        (-1, ApiErrorKind::Generic),
        (-32800, ApiErrorKind::TokenNotFound),
        (-32801, ApiErrorKind::InvalidAddress),
        (-32803, ApiErrorKind::TransactionNotFound),
        (-32804, ApiErrorKind::InvalidTransaction),
        (-32805, ApiErrorKind::TokenSyncing),
        (-32806, ApiErrorKind::NoEntryCredits),
    ];

    for (code, kind) in cases {
        let server = MockServer::start().await;
        respond_with(
            &server,
            status(400, json!({"error": {"code": code, "message": "m", "data": {"x": 1}}})),
        )
        .await;

        let err = default_client(&server)
            .get_transaction(TokenParams::chain("c1"), Some("e1"))
            .await
            .unwrap_err();

        assert_eq!(err.api_kind(), Some(kind), "code {}", code);
        if let SdkError::Api(api) = err {
            assert_eq!(api.data, json!({"x": 1}));
        }
    }
}

#[tokio::test]
async fn test_unknown_code_is_generic() {
    let server = MockServer::start().await;
    respond_with(
        &server,
        status(500, json!({"error": {"code": -32602, "message": "Invalid params"}})),
    )
    .await;

    let err = default_client(&server)
        .get_stats(TokenParams::chain("c1"))
        .await
        .unwrap_err();

    assert_eq!(err.api_kind(), Some(ApiErrorKind::Generic));
    assert_eq!(err.to_string(), "API error -32602: Invalid params");
}

#[tokio::test]
async fn test_missing_code_defaults_to_generic() {
    let server = MockServer::start().await;
    respond_with(&server, ResponseTemplate::new(503).set_body_string("Service Unavailable")).await;

    let err = default_client(&server)
        .get_daemon_tokens(TokenParams::chain("c1"))
        .await
        .unwrap_err();

    match err {
        SdkError::Api(api) => {
            assert_eq!(api.kind, ApiErrorKind::Generic);
            assert_eq!(api.code, -1);
            assert_eq!(api.message, "An unknown error occurred");
            assert_eq!(api.response.body, "Service Unavailable");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_success_status_ignores_error_member() {
    // Only the status decides; a 200 is read for its result
    let server = MockServer::start().await;
    respond_with(
        &server,
        status(200, json!({"result": {"ok": true}, "error": {"code": -32800}})),
    )
    .await;

    let result = default_client(&server)
        .get_stats(TokenParams::chain("c1"))
        .await
        .unwrap();
    assert_eq!(result, json!({"ok": true}));
}

#[tokio::test]
async fn test_success_without_result() {
    let server = MockServer::start().await;
    respond_with(&server, status(200, json!({"jsonrpc": "2.0", "id": 7}))).await;

    let err = default_client(&server)
        .get_stats(TokenParams::chain("c1"))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::InvalidResponse(_)));
}
