pub mod dns;

pub use dns::{
    Backoff, CachingDnsClient, DnsClientBuilder, HickoryDnsClient, RetryPolicy,
    RetryingDnsClient, StopCondition, WireConfig,
};
