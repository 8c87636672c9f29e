#![allow(dead_code)]

use async_trait::async_trait;
use mesos_dns_application::ports::DnsClient;
use mesos_dns_domain::{DnsRecord, DomainError, RecordType, ResolutionError};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

type Answer = Result<Vec<DnsRecord>, DomainError>;

/// `DnsClient` that replays a fixed sequence of answers, then repeats the
/// last one. Counts every call.
pub struct ScriptedDnsClient {
    script: Mutex<VecDeque<Answer>>,
    last: Mutex<Answer>,
    calls: AtomicUsize,
    latency: Option<Duration>,
}

impl ScriptedDnsClient {
    pub fn new(script: Vec<Answer>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(Ok(Vec::new())),
            calls: AtomicUsize::new(0),
            latency: None,
        }
    }

    pub fn always(answer: Answer) -> Self {
        Self::new(vec![answer])
    }

    pub fn always_empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsClient for ScriptedDnsClient {
    async fn lookup(
        &self,
        _name: &str,
        _record_types: &[RecordType],
    ) -> Result<Vec<DnsRecord>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(answer) => {
                *self.last.lock().unwrap() = answer.clone();
                answer
            }
            None => self.last.lock().unwrap().clone(),
        }
    }
}

pub fn a_record(name: &str, ip: &str) -> DnsRecord {
    DnsRecord::create(RecordType::A, name, ip).unwrap()
}

pub fn not_found(name: &str) -> DomainError {
    ResolutionError::NotFound {
        name: name.to_string(),
    }
    .into()
}
