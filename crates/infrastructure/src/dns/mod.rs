pub mod cache;
pub mod forwarding;
pub mod resolver;
pub mod transport;

pub use cache::CacheKey;
pub use resolver::{
    Backoff, CachingDnsClient, DnsClientBuilder, HickoryDnsClient, RetryPolicy,
    RetryingDnsClient, StopCondition, WireConfig,
};
