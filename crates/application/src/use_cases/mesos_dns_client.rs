use crate::errors::MesosDnsError;
use crate::ports::DnsClient;
use mesos_dns_domain::{DiscoveryName, DnsRecord, Protocol, RecordType, ServiceRecord};
use std::sync::Arc;
use tracing::debug;

const ADDRESS_TYPES: &[RecordType] = &[RecordType::A, RecordType::AAAA];

/// Looks up the Mesos-DNS discovery namespace (leader, masters, agents,
/// frameworks and tasks) through any [`DnsClient`].
pub struct MesosDnsClient {
    client: Arc<dyn DnsClient>,
}

impl MesosDnsClient {
    pub fn new(client: Arc<dyn DnsClient>) -> Self {
        Self { client }
    }

    /// A or AAAA records of the leading master, `leader.<domain>`.
    pub async fn lookup_leading_cluster(
        &self,
        domain: &str,
    ) -> Result<Vec<DnsRecord>, MesosDnsError> {
        let domain = require(domain, "domain")?;

        self.lookup(&DiscoveryName::leader(domain), ADDRESS_TYPES)
            .await
    }

    /// SRV records of the leading master, `_leader._<protocol>.<domain>`.
    pub async fn lookup_leading_cluster_service_records(
        &self,
        domain: &str,
        protocol: Protocol,
    ) -> Result<Vec<ServiceRecord>, MesosDnsError> {
        let domain = require(domain, "domain")?;

        self.lookup_service_records(&DiscoveryName::leader_service(domain, protocol))
            .await
    }

    /// A or AAAA records of every scheduler of `framework`.
    pub async fn lookup_framework_schedulers(
        &self,
        domain: &str,
        framework: &str,
    ) -> Result<Vec<DnsRecord>, MesosDnsError> {
        let domain = require(domain, "domain")?;
        let framework = require(framework, "framework")?;

        self.lookup(&DiscoveryName::framework(domain, framework), ADDRESS_TYPES)
            .await
    }

    pub async fn lookup_framework_schedulers_service_records(
        &self,
        domain: &str,
        framework: &str,
        protocol: Protocol,
    ) -> Result<Vec<ServiceRecord>, MesosDnsError> {
        let domain = require(domain, "domain")?;
        let framework = require(framework, "framework")?;

        self.lookup_service_records(&DiscoveryName::framework_service(
            domain, framework, protocol,
        ))
        .await
    }

    /// A or AAAA records of every known master, `master.<domain>`.
    pub async fn lookup_clusters(&self, domain: &str) -> Result<Vec<DnsRecord>, MesosDnsError> {
        let domain = require(domain, "domain")?;

        self.lookup(&DiscoveryName::masters(domain), ADDRESS_TYPES)
            .await
    }

    pub async fn lookup_clusters_service_records(
        &self,
        domain: &str,
        protocol: Protocol,
    ) -> Result<Vec<ServiceRecord>, MesosDnsError> {
        let domain = require(domain, "domain")?;

        self.lookup_service_records(&DiscoveryName::masters_service(domain, protocol))
            .await
    }

    /// A or AAAA records of every known agent, `slave.<domain>`.
    pub async fn lookup_agents(&self, domain: &str) -> Result<Vec<DnsRecord>, MesosDnsError> {
        let domain = require(domain, "domain")?;

        self.lookup(&DiscoveryName::agents(domain), ADDRESS_TYPES)
            .await
    }

    pub async fn lookup_agents_service_records(
        &self,
        domain: &str,
        protocol: Protocol,
    ) -> Result<Vec<ServiceRecord>, MesosDnsError> {
        let domain = require(domain, "domain")?;

        self.lookup_service_records(&DiscoveryName::agents_service(domain, protocol))
            .await
    }

    /// Addresses of the agents a task is running on.
    pub async fn lookup_agents_for(
        &self,
        domain: &str,
        framework: &str,
        task: &str,
    ) -> Result<Vec<DnsRecord>, MesosDnsError> {
        let domain = require(domain, "domain")?;
        let framework = require(framework, "framework")?;
        let task = require(task, "task")?;

        self.lookup(&DiscoveryName::task_agents(domain, framework, task), &[])
            .await
    }

    /// SRV records of a task. A task exposing several services on the same
    /// protocol yields one record per service here; use
    /// [`lookup_service_records_for_task_service`](Self::lookup_service_records_for_task_service)
    /// to pick one.
    pub async fn lookup_task_service_records(
        &self,
        domain: &str,
        framework: &str,
        task: &str,
        protocol: Protocol,
    ) -> Result<Vec<ServiceRecord>, MesosDnsError> {
        let domain = require(domain, "domain")?;
        let framework = require(framework, "framework")?;
        let task = require(task, "task")?;

        self.lookup_service_records(&DiscoveryName::task_service(
            domain, framework, task, protocol,
        ))
        .await
    }

    /// SRV records of one named service of a task, e.g. `http`.
    pub async fn lookup_service_records_for_task_service(
        &self,
        domain: &str,
        framework: &str,
        task: &str,
        service: &str,
        protocol: Protocol,
    ) -> Result<Vec<ServiceRecord>, MesosDnsError> {
        let domain = require(domain, "domain")?;
        let framework = require(framework, "framework")?;
        let task = require(task, "task")?;
        let service = require(service, "service")?;

        self.lookup_service_records(&DiscoveryName::task_named_service(
            domain, framework, task, service, protocol,
        ))
        .await
    }

    /// Records of `<task>.<framework>.<domain>`; an empty `record_types`
    /// returns every type.
    pub async fn lookup_task(
        &self,
        domain: &str,
        framework: &str,
        task: &str,
        record_types: &[RecordType],
    ) -> Result<Vec<DnsRecord>, MesosDnsError> {
        let domain = require(domain, "domain")?;
        let framework = require(framework, "framework")?;
        let task = require(task, "task")?;

        self.lookup(&DiscoveryName::task(domain, framework, task), record_types)
            .await
    }

    /// First record of a single-type lookup, if any.
    pub async fn lookup_first(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Option<DnsRecord>, MesosDnsError> {
        let records = self.lookup(name, &[record_type]).await?;
        Ok(records.into_iter().next())
    }

    pub async fn lookup(
        &self,
        name: &str,
        record_types: &[RecordType],
    ) -> Result<Vec<DnsRecord>, MesosDnsError> {
        let name = require(name, "name")?;
        debug!(name = %name, record_types = %RecordType::join(record_types), "Discovery lookup");

        self.client
            .lookup(name, record_types)
            .await
            .map_err(|source| MesosDnsError::Lookup {
                name: name.to_string(),
                source,
            })
    }

    pub async fn lookup_service_records(
        &self,
        name: &str,
    ) -> Result<Vec<ServiceRecord>, MesosDnsError> {
        let name = require(name, "name")?;
        debug!(name = %name, "Discovery SRV lookup");

        self.client
            .lookup_service_records(name)
            .await
            .map_err(|source| MesosDnsError::Lookup {
                name: name.to_string(),
                source,
            })
    }
}

fn require<'a>(value: &'a str, argument: &str) -> Result<&'a str, MesosDnsError> {
    if value.trim().is_empty() {
        return Err(MesosDnsError::InvalidArgument(format!(
            "{} must not be empty",
            argument
        )));
    }
    Ok(value)
}
