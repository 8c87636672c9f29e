pub mod cache;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod retry;
pub mod root;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use retry::RetryConfig;
pub use root::{CliOverrides, ClientConfig};
