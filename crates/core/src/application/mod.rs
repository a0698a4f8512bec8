// Application Layer - Parameter resolution, invocation and named operations

pub mod invoker;
pub mod resolver;
pub mod token_api;

pub use invoker::RpcInvoker;
pub use resolver::ParameterResolver;
pub use token_api::{TokenApi, TokenDefaults};
