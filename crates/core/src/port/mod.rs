// Port Layer - Interfaces for external dependencies

pub mod id_provider; // For deterministic testing
pub mod transport;

// Re-exports
pub use id_provider::{FixedIdProvider, IdProvider, RandomIdProvider};
pub use transport::{HttpTransport, TransportError};

#[cfg(test)]
pub use transport::MockHttpTransport;
