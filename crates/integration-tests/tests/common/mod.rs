//! Shared helpers: a mocked fatd endpoint and clients pointed at it

#![allow(dead_code)]

use std::sync::Arc;

use fat_core::port::FixedIdProvider;
use fat_infra_http::ReqwestTransport;
use fat_sdk::{ClientConfig, FatdClient};
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_PATH: &str = "/v2";
pub const REQUEST_ID: u64 = 7;

/// Answer every POST to the API path with `response`
pub async fn respond_with(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(API_PATH))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

pub fn status(code: u16, body: Value) -> ResponseTemplate {
    ResponseTemplate::new(code).set_body_json(body)
}

/// Client with a fixed request id so envelopes can be matched exactly
pub fn client(server: &MockServer, config: ClientConfig) -> FatdClient {
    let config = ClientConfig {
        host: server.uri(),
        ..config
    };
    FatdClient::with_parts(
        config,
        Arc::new(ReqwestTransport::new().unwrap()),
        Arc::new(FixedIdProvider(REQUEST_ID)),
    )
    .unwrap()
}

pub fn default_client(server: &MockServer) -> FatdClient {
    client(server, ClientConfig::default())
}
