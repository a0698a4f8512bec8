// HTTP transport implementation
// reason: reqwest with rustls so a PEM trust file can be added without system OpenSSL
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

use fat_core::domain::RawResponse;
use fat_core::port::{HttpTransport, TransportError};

/// Errors raised while building the transport
#[derive(Error, Debug)]
pub enum TransportSetupError {
    #[error("Failed to read TLS certificate {path}: {source}")]
    ReadCertificate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid TLS certificate {path}: {reason}")]
    InvalidCertificate { path: PathBuf, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// HTTP basic-auth credentials
#[derive(Clone)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Transport construction options
#[derive(Debug, Clone, Default)]
pub struct TransportOptions {
    pub basic_auth: Option<BasicAuth>,
    /// PEM file added to the trusted roots
    pub tls_cert: Option<PathBuf>,
}

/// reqwest-backed [`HttpTransport`]
///
/// Owns a single `reqwest::Client` that is reused for every call.
pub struct ReqwestTransport {
    client: reqwest::Client,
    basic_auth: Option<BasicAuth>,
}

impl ReqwestTransport {
    /// Transport with no credentials and the default trust store
    pub fn new() -> Result<Self, TransportSetupError> {
        Self::with_options(TransportOptions::default())
    }

    pub fn with_options(options: TransportOptions) -> Result<Self, TransportSetupError> {
        let mut builder = reqwest::Client::builder();

        if let Some(path) = &options.tls_cert {
            let certificates = load_certificates(path)?;
            debug!(
                path = %path.display(),
                count = certificates.len(),
                "Trusting custom TLS certificates"
            );
            for certificate in certificates {
                builder = builder.add_root_certificate(certificate);
            }
        }

        Ok(Self {
            client: builder.build()?,
            basic_auth: options.basic_auth,
        })
    }
}

/// Read every certificate in a PEM bundle
///
/// The bundle is parsed here rather than left to `ClientBuilder::build`, which
/// silently skips a file holding no certificate blocks.
fn load_certificates(path: &Path) -> Result<Vec<reqwest::Certificate>, TransportSetupError> {
    let pem = std::fs::read(path).map_err(|source| TransportSetupError::ReadCertificate {
        path: path.to_path_buf(),
        source,
    })?;

    let invalid = |reason: String| TransportSetupError::InvalidCertificate {
        path: path.to_path_buf(),
        reason,
    };

    let certificates =
        reqwest::Certificate::from_pem_bundle(&pem).map_err(|e| invalid(e.to_string()))?;
    if certificates.is_empty() {
        return Err(invalid("no PEM certificate found".to_string()));
    }

    Ok(certificates)
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse, TransportError> {
        let mut request = self.client.post(url).json(body);
        if let Some(auth) = &self.basic_auth {
            request = request.basic_auth(&auth.username, Some(&auth.password));
        }

        let response = request.send().await.map_err(map_send_error)?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        trace!(status, body_len = body.len(), "HTTP response received");

        Ok(RawResponse { status, body })
    }
}

fn map_send_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else if err.is_connect() {
        TransportError::Connection(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}
