// JSON-RPC Invocation
use crate::domain::{ApiError, RpcRequest};
use crate::error::{FatError, Result};
use crate::port::{HttpTransport, IdProvider};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// Sends one JSON-RPC request per call and maps the reply
///
/// The invoker holds only immutable configuration; a fresh correlation id is
/// drawn from the [`IdProvider`] for every request.
pub struct RpcInvoker {
    transport: Arc<dyn HttpTransport>,
    id_provider: Arc<dyn IdProvider>,
    url: String,
}

impl RpcInvoker {
    /// Create a new invoker
    ///
    /// # Arguments
    /// * `transport` - HTTP transport adapter
    /// * `id_provider` - Correlation id source
    /// * `url` - Fully resolved endpoint (host joined with API version)
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        id_provider: Arc<dyn IdProvider>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            id_provider,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Build the envelope for `method`
    pub fn build_request(&self, method: &str, params: Option<Map<String, Value>>) -> RpcRequest {
        RpcRequest::new(self.id_provider.next_id(), method, params)
    }

    /// Invoke `method` and return the `result` member verbatim
    ///
    /// A status >= 400 is mapped to [`FatError::Api`] through the daemon
    /// error-code table.
    pub async fn invoke(&self, method: &str, params: Option<Map<String, Value>>) -> Result<Value> {
        let request = self.build_request(method, params);
        let body = serde_json::to_value(&request)?;

        debug!(method = %method, id = request.id, url = %self.url, "Sending JSON-RPC request");

        let response = self.transport.post_json(&self.url, &body).await?;

        if response.is_error() {
            let err = ApiError::from_response(response);
            warn!(
                method = %method,
                id = request.id,
                status = err.response.status,
                code = err.code,
                kind = ?err.kind,
                "Daemon returned an error"
            );
            return Err(FatError::Api(err));
        }

        let mut parsed: Value = serde_json::from_str(&response.body)?;
        match parsed.get_mut("result").map(Value::take) {
            Some(result) => {
                debug!(method = %method, id = request.id, "JSON-RPC request succeeded");
                Ok(result)
            }
            None => Err(FatError::MissingResult),
        }
    }
}
