use mesos_dns_domain::{DnsRecord, ServiceRecord};

pub fn format_record(record: &DnsRecord) -> String {
    match record.as_service_record() {
        Some(srv) => format_service_record(srv),
        None => format!("{}\t{}\t{}", record.name(), record.record_type(), record.value()),
    }
}

pub fn format_service_record(record: &ServiceRecord) -> String {
    format!(
        "{}\tSRV\t{} {} {} {}",
        record.name(),
        record.priority(),
        record.weight(),
        record.port(),
        record.target()
    )
}

pub fn print_records(records: &[DnsRecord]) {
    for record in records {
        println!("{}", format_record(record));
    }
}

pub fn print_service_records(records: &[ServiceRecord]) {
    for record in records {
        println!("{}", format_service_record(record));
    }
}
