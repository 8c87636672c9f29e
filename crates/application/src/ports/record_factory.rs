use mesos_dns_domain::{DnsRecord, DomainError, RecordType};

/// Turns a raw (type, name, value) triple from the wire into a [`DnsRecord`].
pub trait DnsRecordFactory: Send + Sync {
    fn create_record(
        &self,
        record_type: RecordType,
        name: &str,
        value: &str,
    ) -> Result<DnsRecord, DomainError>;
}

/// Parses SRV values into service records and keeps every other type as is.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultDnsRecordFactory;

impl DnsRecordFactory for DefaultDnsRecordFactory {
    fn create_record(
        &self,
        record_type: RecordType,
        name: &str,
        value: &str,
    ) -> Result<DnsRecord, DomainError> {
        DnsRecord::create(record_type, name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srv_value_becomes_service_record() {
        let record = DefaultDnsRecordFactory
            .create_record(RecordType::SRV, "_leader._tcp.mesos", "0 1 5050 master.mesos.")
            .unwrap();

        let srv = record.as_service_record().unwrap();
        assert_eq!(srv.port(), 5050);
        assert_eq!(srv.target(), "master.mesos.");
    }

    #[test]
    fn test_other_types_stay_plain() {
        let record = DefaultDnsRecordFactory
            .create_record(RecordType::A, "leader.mesos", "10.0.0.1")
            .unwrap();

        assert!(!record.is_service_record());
        assert_eq!(record.value(), "10.0.0.1");
    }

    #[test]
    fn test_malformed_srv_is_rejected() {
        let err = DefaultDnsRecordFactory
            .create_record(RecordType::SRV, "_leader._tcp.mesos", "not-an-srv")
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidServiceRecord(_)));
    }
}
