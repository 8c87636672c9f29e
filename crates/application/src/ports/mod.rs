mod dns_client;
mod record_factory;

pub use dns_client::{sort_service_records, DnsClient};
pub use record_factory::{DefaultDnsRecordFactory, DnsRecordFactory};

// Re-export for convenience
pub use mesos_dns_domain::{DnsRecord, RecordType, ServiceRecord};
