use mesos_dns_domain::{DnsRecord, DomainError, PlainRecord, RecordType};
use std::collections::HashSet;
use std::str::FromStr;

mod helpers;
use helpers::ServiceRecordBuilder;

#[test]
fn test_factory_keeps_non_srv_values_verbatim() {
    let record = DnsRecord::create(RecordType::A, "leader.mesos", "10.0.0.5").unwrap();

    assert_eq!(record.record_type(), RecordType::A);
    assert_eq!(record.name(), "leader.mesos");
    assert_eq!(record.value(), "10.0.0.5");
    assert!(!record.is_service_record());
    assert!(record.as_service_record().is_none());
}

#[test]
fn test_factory_parses_srv_values() {
    let record = DnsRecord::create(
        RecordType::SRV,
        "_leader._tcp.mesos",
        "0 1 5050 leader.mesos.",
    )
    .unwrap();

    assert!(record.is_service_record());
    let srv = record.as_service_record().unwrap();
    assert_eq!(srv.port(), 5050);
    assert_eq!(srv.target(), "leader.mesos.");
    assert_eq!(record.value(), "0 1 5050 leader.mesos.");
}

#[test]
fn test_factory_rejects_unparseable_srv_values() {
    let result = DnsRecord::create(RecordType::SRV, "_leader._tcp.mesos", "not-an-srv");
    assert!(matches!(result, Err(DomainError::InvalidServiceRecord(_))));
}

#[test]
fn test_records_compare_by_all_fields() {
    let a = DnsRecord::plain(RecordType::A, "leader.mesos", "10.0.0.5");
    let same = DnsRecord::Plain(PlainRecord::new(RecordType::A, "leader.mesos", "10.0.0.5"));
    let other_value = DnsRecord::plain(RecordType::A, "leader.mesos", "10.0.0.6");
    let other_type = DnsRecord::plain(RecordType::AAAA, "leader.mesos", "10.0.0.5");

    assert_eq!(a, same);
    assert_ne!(a, other_value);
    assert_ne!(a, other_type);

    let set: HashSet<DnsRecord> = [a, same, other_value, other_type].into_iter().collect();
    assert_eq!(set.len(), 3);
}

#[test]
fn test_into_service_record() {
    let record = ServiceRecordBuilder::new().port(8080).build_record();
    let srv = record.into_service_record().unwrap();
    assert_eq!(srv.port(), 8080);

    let plain = DnsRecord::plain(RecordType::TXT, "foo.mesos", "hello");
    assert!(plain.into_service_record().is_none());
}

#[test]
fn test_record_display() {
    let plain = DnsRecord::plain(RecordType::A, "leader.mesos", "10.0.0.5");
    assert_eq!(plain.to_string(), "leader.mesos A 10.0.0.5");

    let srv = ServiceRecordBuilder::new()
        .name("_leader._tcp.mesos")
        .port(5050)
        .target("leader.mesos.")
        .build_record();
    assert_eq!(
        srv.to_string(),
        "_leader._tcp.mesos SRV priority=0 weight=1 port=5050 target=leader.mesos."
    );
}

#[test]
fn test_record_type_from_str_is_case_insensitive() {
    assert_eq!(RecordType::from_str("srv").unwrap(), RecordType::SRV);
    assert_eq!(RecordType::from_str("Aaaa").unwrap(), RecordType::AAAA);
    assert!(RecordType::from_str("DNSKEY").is_err());
}

#[test]
fn test_record_type_codes_roundtrip() {
    for record_type in RecordType::ALL {
        assert_eq!(RecordType::from_u16(record_type.to_u16()), Some(record_type));
        assert_eq!(RecordType::from_str(record_type.as_str()).unwrap(), record_type);
    }
    assert_eq!(RecordType::from_u16(48), None);
}

#[test]
fn test_record_type_join() {
    assert_eq!(RecordType::join(&[RecordType::A, RecordType::AAAA]), "A, AAAA");
    assert_eq!(RecordType::join(&[]), "");
}
