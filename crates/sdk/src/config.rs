//! Client Configuration
//!
//! Static settings fixed at construction: endpoint, credentials, TLS trust
//! and the default token identity and addresses.

use crate::error::{Result, SdkError};
use fat_core::application::TokenDefaults;
use fat_core::domain::TokenParams;
use reqwest::Url;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "http://localhost:8078";
pub const DEFAULT_API_VERSION: &str = "v2";

/// Environment variable names read by [`ClientConfig::from_env`]
pub mod env {
    pub const HOST: &str = "FATD_HOST";
    pub const API_VERSION: &str = "FATD_API_VERSION";
    pub const RPC_USER: &str = "FATD_RPC_USER";
    pub const RPC_PASSWORD: &str = "FATD_RPC_PASSWORD";
    pub const TLS_CERT: &str = "FATD_TLS_CERT";
    pub const CHAIN_ID: &str = "FATD_CHAIN_ID";
    pub const TOKEN_ID: &str = "FATD_TOKEN_ID";
    pub const ISSUER_ID: &str = "FATD_ISSUER_ID";
    pub const FAT_ADDRESS: &str = "FATD_FAT_ADDRESS";
    pub const FCT_ADDRESS: &str = "FATD_FCT_ADDRESS";
}

/// FAT daemon client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Daemon base URL, including `http://` or `https://`
    pub host: String,
    /// API version path segment resolved against `host`
    pub version: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// PEM certificate trusted for TLS connections
    pub tls_cert: Option<PathBuf>,
    pub chain_id: Option<String>,
    pub token_id: Option<String>,
    pub issuer_id: Option<String>,
    /// Default FAT address for balance lookups
    pub fat_address: Option<String>,
    /// Default factoid address, used when no FAT address is set
    pub fct_address: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            version: DEFAULT_API_VERSION.to_string(),
            username: None,
            password: None,
            tls_cert: None,
            chain_id: None,
            token_id: None,
            issuer_id: None,
            fat_address: None,
            fct_address: None,
        }
    }
}

impl ClientConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }

    /// Load from `FATD_*` environment variables, defaulting what is unset
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            host: get(env::HOST).unwrap_or(defaults.host),
            version: get(env::API_VERSION).unwrap_or(defaults.version),
            username: get(env::RPC_USER),
            password: get(env::RPC_PASSWORD),
            tls_cert: get(env::TLS_CERT).map(PathBuf::from),
            chain_id: get(env::CHAIN_ID),
            token_id: get(env::TOKEN_ID),
            issuer_id: get(env::ISSUER_ID),
            fat_address: get(env::FAT_ADDRESS),
            fct_address: get(env::FCT_ADDRESS),
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn tls_cert(mut self, path: impl Into<PathBuf>) -> Self {
        self.tls_cert = Some(path.into());
        self
    }

    pub fn chain_id(mut self, chain_id: impl Into<String>) -> Self {
        self.chain_id = Some(chain_id.into());
        self
    }

    pub fn token(mut self, token_id: impl Into<String>, issuer_id: impl Into<String>) -> Self {
        self.token_id = Some(token_id.into());
        self.issuer_id = Some(issuer_id.into());
        self
    }

    pub fn fat_address(mut self, address: impl Into<String>) -> Self {
        self.fat_address = Some(address.into());
        self
    }

    pub fn fct_address(mut self, address: impl Into<String>) -> Self {
        self.fct_address = Some(address.into());
        self
    }

    /// Endpoint URL: `version` resolved against `host` (RFC 3986)
    pub fn endpoint(&self) -> Result<Url> {
        let base = Url::parse(&self.host)
            .map_err(|e| SdkError::InvalidUrl(format!("{}: {}", self.host, e)))?;
        base.join(&self.version)
            .map_err(|e| SdkError::InvalidUrl(format!("{} + {}: {}", self.host, self.version, e)))
    }

    /// Credentials, only when both username and password are set
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) => Some((user, pass)),
            _ => None,
        }
    }

    pub(crate) fn token_defaults(&self) -> TokenDefaults {
        TokenDefaults {
            token: TokenParams {
                chain_id: self.chain_id.clone(),
                token_id: self.token_id.clone(),
                issuer_id: self.issuer_id.clone(),
            },
            fat_address: self.fat_address.clone(),
            fct_address: self.fct_address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_endpoint() {
        let url = ClientConfig::default().endpoint().unwrap();
        assert_eq!(url.as_str(), "http://localhost:8078/v2");
    }

    #[test]
    fn test_version_replaces_last_segment() {
        let url = ClientConfig::new("http://localhost:8078/v0")
            .endpoint()
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8078/v2");

        let url = ClientConfig::new("https://fatd.example.com/api/")
            .version("v1")
            .endpoint()
            .unwrap();
        assert_eq!(url.as_str(), "https://fatd.example.com/api/v1");
    }

    #[test]
    fn test_invalid_host() {
        let err = ClientConfig::new("not a url").endpoint().unwrap_err();
        assert!(matches!(err, SdkError::InvalidUrl(_)));
    }

    #[test]
    fn test_credentials_need_both_parts() {
        let mut config = ClientConfig::default();
        config.username = Some("user".to_string());
        assert!(config.credentials().is_none());

        let config = config.basic_auth("user", "pass");
        assert_eq!(config.credentials(), Some(("user", "pass")));
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (env::HOST, "https://fatd:8078"),
            (env::RPC_USER, "rpc"),
            (env::RPC_PASSWORD, "secret"),
            (env::CHAIN_ID, "c1"),
            (env::FCT_ADDRESS, "FA2"),
            (env::API_VERSION, ""),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.host, "https://fatd:8078");
        assert_eq!(config.version, DEFAULT_API_VERSION);
        assert_eq!(config.credentials(), Some(("rpc", "secret")));
        assert_eq!(config.chain_id.as_deref(), Some("c1"));
        assert_eq!(config.fct_address.as_deref(), Some("FA2"));
        assert!(config.tls_cert.is_none());

        let defaults = config.token_defaults();
        assert_eq!(defaults.token, TokenParams::chain("c1"));
    }
}
