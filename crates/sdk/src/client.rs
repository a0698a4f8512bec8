//! FAT daemon Client Implementation

use crate::config::ClientConfig;
use crate::error::Result;
use fat_core::application::{RpcInvoker, TokenApi};
use fat_core::domain::TokenParams;
use fat_core::port::{HttpTransport, IdProvider, RandomIdProvider};
use fat_infra_http::{BasicAuth, ReqwestTransport, TransportOptions};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// FAT daemon Client
///
/// Provides a high-level interface to the token ledger operations of `fatd`.
/// Every method performs exactly one JSON-RPC round trip; parameters are
/// validated first and invalid input never reaches the network.
///
/// # Example
///
/// ```no_run
/// use fat_sdk::{ClientConfig, FatdClient, TokenParams};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = FatdClient::new(ClientConfig::new("http://localhost:8078"))?;
/// let issuance = client.get_issuance(TokenParams::chain("b54c4310530dc4dd...")).await?;
/// println!("{}", issuance);
/// # Ok(())
/// # }
/// ```
pub struct FatdClient {
    api: TokenApi,
    config: ClientConfig,
}

impl FatdClient {
    /// Build a client backed by the reqwest transport
    ///
    /// Fails when the host is not a valid URL or the TLS certificate cannot
    /// be loaded.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let options = TransportOptions {
            basic_auth: config.credentials().map(|(username, password)| BasicAuth {
                username: username.to_string(),
                password: password.to_string(),
            }),
            tls_cert: config.tls_cert.clone(),
        };
        let transport = ReqwestTransport::with_options(options)?;

        Self::with_transport(config, Arc::new(transport))
    }

    /// Connect to `url` with default settings
    pub fn connect(url: impl AsRef<str>) -> Result<Self> {
        Self::new(ClientConfig::new(url.as_ref()))
    }

    /// Build a client on a caller-provided transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        Self::with_parts(config, transport, Arc::new(RandomIdProvider))
    }

    /// Build a client with both ports injected (deterministic ids in tests)
    pub fn with_parts(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        id_provider: Arc<dyn IdProvider>,
    ) -> Result<Self> {
        let endpoint = config.endpoint()?;
        debug!(endpoint = %endpoint, "Creating FAT daemon client");

        let invoker = RpcInvoker::new(transport, id_provider, endpoint.as_str());
        let api = TokenApi::new(invoker, config.token_defaults());

        Ok(Self { api, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolved JSON-RPC endpoint
    pub fn url(&self) -> &str {
        self.api.invoker().url()
    }

    /// Balance of a FAT address
    ///
    /// # Arguments
    ///
    /// * `token` - Token identity; unset uses the configured default
    /// * `address` - Address to query; `None` uses the configured FAT, then FCT address
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use fat_sdk::{FatdClient, TokenParams};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = FatdClient::connect("http://localhost:8078")?;
    /// let balance = client
    ///     .get_balance(TokenParams::issued("test", "888888d0..."), Some("FA2jK2HcLnRdS94dEcU27rF3meoJfpUcZPSinpb7AwQvPRY6RL1Q"))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_balance(&self, token: TokenParams, address: Option<&str>) -> Result<Value> {
        Ok(self.api.get_balance(token, address).await?)
    }

    /// Issuance of a token
    pub async fn get_issuance(&self, token: TokenParams) -> Result<Value> {
        Ok(self.api.get_issuance(token).await?)
    }

    /// Raw issuance entry of a token
    pub async fn get_issuance_entry(&self, token: TokenParams) -> Result<Value> {
        Ok(self.api.get_issuance_entry(token).await?)
    }

    /// Supply and transaction statistics of a token
    pub async fn get_stats(&self, token: TokenParams) -> Result<Value> {
        Ok(self.api.get_stats(token).await?)
    }

    /// Transaction by entry hash
    pub async fn get_transaction(
        &self,
        token: TokenParams,
        entry_hash: Option<&str>,
    ) -> Result<Value> {
        Ok(self.api.get_transaction(token, entry_hash).await?)
    }

    /// Raw transaction entry by entry hash
    pub async fn get_transaction_entry(
        &self,
        token: TokenParams,
        entry_hash: Option<&str>,
    ) -> Result<Value> {
        Ok(self.api.get_transaction_entry(token, entry_hash).await?)
    }

    /// Non-fungible token by id
    pub async fn get_nf_token(&self, token: TokenParams, nf_token_id: Option<&str>) -> Result<Value> {
        Ok(self.api.get_nf_token(token, nf_token_id).await?)
    }

    /// Submit a signed transaction with its signature/RCD pairs
    pub async fn send_transaction(
        &self,
        token: TokenParams,
        tx: Value,
        signatures: Value,
    ) -> Result<Value> {
        Ok(self.api.send_transaction(token, tx, signatures).await?)
    }

    /// Tokens tracked by the daemon
    pub async fn get_daemon_tokens(&self, token: TokenParams) -> Result<Value> {
        Ok(self.api.get_daemon_tokens(token).await?)
    }

    /// Daemon version and API properties
    pub async fn get_daemon_properties(&self, token: TokenParams) -> Result<Value> {
        Ok(self.api.get_daemon_properties(token).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;
    use fat_core::domain::ValidationError;
    use fat_infra_http::TransportSetupError;
    use tokio_test::assert_err;

    #[test]
    fn test_url_resolves_version() {
        let client = FatdClient::new(ClientConfig::new("http://127.0.0.1:8078").version("v1"))
            .unwrap();
        assert_eq!(client.url(), "http://127.0.0.1:8078/v1");
    }

    #[test]
    fn test_bad_certificate_path_fails_construction() {
        let result = FatdClient::new(ClientConfig::default().tls_cert("/nonexistent/cert.pem"));
        assert!(matches!(result, Err(SdkError::Setup(_))));
    }

    #[test]
    fn test_file_without_certificates_fails_construction() {
        let path = concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../infra-http/testdata/not-a-certificate.pem"
        );
        let result = FatdClient::new(ClientConfig::default().tls_cert(path));
        assert!(matches!(
            result,
            Err(SdkError::Setup(TransportSetupError::InvalidCertificate { .. }))
        ));
    }

    #[tokio::test]
    async fn test_validation_error_without_daemon() {
        // Nothing listens here; validation must fail before any connection attempt
        let client = FatdClient::connect("http://127.0.0.1:1").unwrap();

        let err = assert_err!(client.get_stats(TokenParams::default()).await);
        assert!(matches!(
            err,
            SdkError::Validation(ValidationError::IdentifyingParams)
        ));
    }
}
