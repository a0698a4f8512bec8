// FAT Client Core - Request validation, envelope and error mapping
// NO HTTP client dependencies: transport is reached through port::HttpTransport

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{FatError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
