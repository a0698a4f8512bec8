// Domain Layer - Wire types, token identity and error kinds

pub mod envelope;
pub mod error;
pub mod method;
pub mod params;

// Re-exports
pub use envelope::{RawResponse, RpcRequest, JSONRPC_VERSION};
pub use error::{code, ApiError, ApiErrorKind, ValidationError};
pub use method::{Method, RequiredParam};
pub use params::{TokenParams, TokenSelector};
