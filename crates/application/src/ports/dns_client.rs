use async_trait::async_trait;
use mesos_dns_domain::{DnsRecord, DomainError, RecordType, ServiceRecord};
use std::cmp::Ordering;

#[async_trait]
pub trait DnsClient: Send + Sync {
    /// Resolve `name`, keeping only records whose type is listed in
    /// `record_types`. An empty slice asks for every record type known for
    /// `name`.
    async fn lookup(
        &self,
        name: &str,
        record_types: &[RecordType],
    ) -> Result<Vec<DnsRecord>, DomainError>;

    /// SRV records for `name`, most preferred first.
    ///
    /// Answers that did not parse into a [`ServiceRecord`] are dropped.
    async fn lookup_service_records(&self, name: &str) -> Result<Vec<ServiceRecord>, DomainError> {
        let mut records: Vec<ServiceRecord> = self
            .lookup(name, &[RecordType::SRV])
            .await?
            .into_iter()
            .filter_map(DnsRecord::into_service_record)
            .collect();

        sort_service_records(&mut records);
        Ok(records)
    }
}

/// Priority ascending, then weight descending within a priority.
pub fn sort_service_records(records: &mut [ServiceRecord]) {
    records.sort_by(compare_service_records);
}

fn compare_service_records(a: &ServiceRecord, b: &ServiceRecord) -> Ordering {
    a.priority()
        .cmp(&b.priority())
        .then_with(|| b.weight().cmp(&a.weight()))
}
