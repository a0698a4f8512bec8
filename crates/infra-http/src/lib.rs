// FAT Infrastructure - HTTP Adapter
// Implements: HttpTransport (reqwest, basic auth, custom TLS trust)

pub mod reqwest_transport;

pub use reqwest_transport::{BasicAuth, ReqwestTransport, TransportOptions, TransportSetupError};
