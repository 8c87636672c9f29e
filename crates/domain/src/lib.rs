//! Mesos-DNS Client Domain Layer
pub mod config;
pub mod discovery;
pub mod dns_record;
pub mod errors;
pub mod protocol;
pub mod server_addr;

pub use config::{CliOverrides, ClientConfig, ConfigError};
pub use discovery::{DiscoveryName, DEFAULT_DOMAIN};
pub use dns_record::{DnsRecord, PlainRecord, RecordType, ServiceRecord};
pub use errors::{DomainError, ResolutionError};
pub use protocol::Protocol;
pub use server_addr::{ServerAddr, DEFAULT_DNS_PORT};
