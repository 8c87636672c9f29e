pub mod builder;
pub mod cache_layer;
pub mod config;
pub mod core;
pub mod retry_layer;

pub use builder::DnsClientBuilder;
pub use cache_layer::{CachingDnsClient, DEFAULT_CACHE_TTL};
pub use config::WireConfig;
pub use core::HickoryDnsClient;
pub use retry_layer::{Backoff, RetryPolicy, RetryingDnsClient, StopCondition};
