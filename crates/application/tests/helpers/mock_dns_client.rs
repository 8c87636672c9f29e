#![allow(dead_code)]

use async_trait::async_trait;
use mesos_dns_application::ports::DnsClient;
use mesos_dns_domain::{DnsRecord, DomainError, RecordType, ServiceRecord};
use std::collections::HashMap;
use std::sync::Mutex;

/// Canned `DnsClient`: answers by name and records every call it receives.
#[derive(Default)]
pub struct MockDnsClient {
    responses: Mutex<HashMap<String, Vec<DnsRecord>>>,
    errors: Mutex<HashMap<String, DomainError>>,
    calls: Mutex<Vec<(String, Vec<RecordType>)>>,
}

impl MockDnsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, name: &str, records: Vec<DnsRecord>) {
        self.responses
            .lock()
            .unwrap()
            .insert(name.to_string(), records);
    }

    pub fn set_error(&self, name: &str, error: DomainError) {
        self.errors.lock().unwrap().insert(name.to_string(), error);
    }

    pub fn calls(&self) -> Vec<(String, Vec<RecordType>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_name(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|(name, _)| name.clone())
    }
}

#[async_trait]
impl DnsClient for MockDnsClient {
    async fn lookup(
        &self,
        name: &str,
        record_types: &[RecordType],
    ) -> Result<Vec<DnsRecord>, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((name.to_string(), record_types.to_vec()));

        if let Some(error) = self.errors.lock().unwrap().get(name) {
            return Err(error.clone());
        }

        let records = self
            .responses
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_default();

        Ok(records
            .into_iter()
            .filter(|r| record_types.is_empty() || record_types.contains(&r.record_type()))
            .collect())
    }
}

pub fn srv(name: &str, priority: u16, weight: u16, port: u16, target: &str) -> DnsRecord {
    DnsRecord::create(
        RecordType::SRV,
        name,
        &format!("{} {} {} {}", priority, weight, port, target),
    )
    .unwrap()
}

pub fn a(name: &str, value: &str) -> DnsRecord {
    DnsRecord::create(RecordType::A, name, value).unwrap()
}

pub fn priorities_and_weights(records: &[ServiceRecord]) -> Vec<(u16, u16)> {
    records.iter().map(|r| (r.priority(), r.weight())).collect()
}
