// JSON-RPC 2.0 Envelope

use serde::Serialize;
use serde_json::{Map, Value};

pub const JSONRPC_VERSION: &str = "2.0";

/// Outgoing JSON-RPC request
///
/// `params` is left out of the serialized form when it is `None`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
}

impl RpcRequest {
    /// Build an envelope; an empty params mapping is dropped
    pub fn new(id: u64, method: impl Into<String>, params: Option<Map<String, Value>>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            method: method.into(),
            params: params.filter(|p| !p.is_empty()),
        }
    }
}

/// Raw HTTP response as handed back by the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}
