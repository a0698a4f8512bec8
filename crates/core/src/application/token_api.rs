// Token Ledger Operations
//
// One method per daemon call. Each validates its inputs through the
// ParameterResolver before anything reaches the transport.

use crate::application::invoker::RpcInvoker;
use crate::application::resolver::ParameterResolver;
use crate::domain::{Method, TokenParams};
use crate::error::Result;
use serde_json::Value;

/// Client-wide fallbacks used when a call leaves fields unset
#[derive(Debug, Clone, Default)]
pub struct TokenDefaults {
    pub token: TokenParams,
    pub fat_address: Option<String>,
    pub fct_address: Option<String>,
}

/// Named operations of the FAT daemon API
pub struct TokenApi {
    invoker: RpcInvoker,
    defaults: TokenDefaults,
}

impl TokenApi {
    pub fn new(invoker: RpcInvoker, defaults: TokenDefaults) -> Self {
        Self { invoker, defaults }
    }

    pub fn invoker(&self) -> &RpcInvoker {
        &self.invoker
    }

    /// Balance of `address`, falling back to the default FAT then FCT address
    pub async fn get_balance(&self, token: TokenParams, address: Option<&str>) -> Result<Value> {
        let address = address
            .or(self.defaults.fat_address.as_deref())
            .or(self.defaults.fct_address.as_deref());
        self.call(Method::GetBalance, token, address).await
    }

    pub async fn get_issuance(&self, token: TokenParams) -> Result<Value> {
        self.call(Method::GetIssuance, token, None).await
    }

    pub async fn get_issuance_entry(&self, token: TokenParams) -> Result<Value> {
        self.call(Method::GetIssuanceEntry, token, None).await
    }

    pub async fn get_stats(&self, token: TokenParams) -> Result<Value> {
        self.call(Method::GetStats, token, None).await
    }

    pub async fn get_transaction(
        &self,
        token: TokenParams,
        entry_hash: Option<&str>,
    ) -> Result<Value> {
        self.call(Method::GetTransaction, token, entry_hash).await
    }

    pub async fn get_transaction_entry(
        &self,
        token: TokenParams,
        entry_hash: Option<&str>,
    ) -> Result<Value> {
        self.call(Method::GetTransactionEntry, token, entry_hash)
            .await
    }

    pub async fn get_nf_token(&self, token: TokenParams, nf_token_id: Option<&str>) -> Result<Value> {
        self.call(Method::GetNfToken, token, nf_token_id).await
    }

    /// Submit a signed transaction
    ///
    /// # Arguments
    /// * `tx` - Transaction body, sent as `tx`
    /// * `signatures` - Signature/RCD pairs, sent as `signaturesRcds`
    pub async fn send_transaction(
        &self,
        token: TokenParams,
        tx: Value,
        signatures: Value,
    ) -> Result<Value> {
        let token = token.or_defaults(&self.defaults.token);
        let mut params = ParameterResolver::resolve(Method::SendTransaction, &token, None)?;
        params.insert("tx".to_string(), tx);
        params.insert("signaturesRcds".to_string(), signatures);

        self.invoker
            .invoke(Method::SendTransaction.as_str(), Some(params))
            .await
    }

    pub async fn get_daemon_tokens(&self, token: TokenParams) -> Result<Value> {
        self.call(Method::GetDaemonTokens, token, None).await
    }

    pub async fn get_daemon_properties(&self, token: TokenParams) -> Result<Value> {
        self.call(Method::GetDaemonProperties, token, None).await
    }

    async fn call(&self, method: Method, token: TokenParams, extra: Option<&str>) -> Result<Value> {
        let token = token.or_defaults(&self.defaults.token);
        let params = ParameterResolver::resolve(method, &token, extra)?;
        self.invoker.invoke(method.as_str(), Some(params)).await
    }
}
