//! FAT SDK - Rust Client Library
//!
//! Provides a convenient client for the JSON-RPC API of the FAT daemon
//! (`fatd`): balances, issuance, transactions and daemon properties.
//!
//! # Example
//!
//! ```no_run
//! use fat_sdk::{ApiErrorKind, ClientConfig, FatdClient, TokenParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("http://localhost:8078").basic_auth("rpc", "secret");
//!     let client = FatdClient::new(config)?;
//!
//!     match client.get_stats(TokenParams::issued("test", "888888d0...")).await {
//!         Ok(stats) => println!("Stats: {}", stats),
//!         Err(e) if e.api_kind() == Some(ApiErrorKind::TokenNotFound) => {
//!             println!("Token not found");
//!         }
//!         Err(e) => return Err(e.into()),
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;

pub use client::FatdClient;
pub use config::{ClientConfig, DEFAULT_API_VERSION, DEFAULT_HOST};
pub use error::{Result, SdkError};

pub use fat_core::domain::{ApiError, ApiErrorKind, RawResponse, TokenParams, ValidationError};
pub use fat_core::port::{HttpTransport, IdProvider, TransportError};

pub mod env {
    pub use crate::config::env::*;
}
