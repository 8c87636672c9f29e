#![allow(dead_code)]
use mesos_dns_domain::{DnsRecord, RecordType, ServiceRecord};

pub struct ServiceRecordBuilder {
    name: String,
    priority: u16,
    weight: u16,
    port: u16,
    target: String,
}

impl ServiceRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "_framework._tcp.marathon.mesos".to_string(),
            priority: 0,
            weight: 1,
            port: 41569,
            target: "marathon.mesos.".to_string(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn priority(mut self, priority: u16) -> Self {
        self.priority = priority;
        self
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn target(mut self, target: &str) -> Self {
        self.target = target.to_string();
        self
    }

    pub fn value(&self) -> String {
        format!(
            "{} {} {} {}",
            self.priority, self.weight, self.port, self.target
        )
    }

    pub fn build(self) -> ServiceRecord {
        ServiceRecord::parse(self.name.clone(), self.value()).unwrap()
    }

    pub fn build_record(self) -> DnsRecord {
        DnsRecord::create(RecordType::SRV, self.name.clone(), self.value()).unwrap()
    }
}

impl Default for ServiceRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
