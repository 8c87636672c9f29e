use super::cache_layer::{CachingDnsClient, DEFAULT_CACHE_TTL};
use super::config::WireConfig;
use super::core::HickoryDnsClient;
use super::retry_layer::{RetryPolicy, RetryingDnsClient};
use mesos_dns_application::ports::{DnsClient, DnsRecordFactory};
use mesos_dns_domain::{ClientConfig, DomainError, ServerAddr, DEFAULT_DOMAIN};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Assembles the client stack: wire client, then cache, then retry.
pub struct DnsClientBuilder {
    config: WireConfig,
    domain: String,
    record_factory: Option<Arc<dyn DnsRecordFactory>>,
    cache_ttl: Option<Duration>,
    retry_policy: Option<RetryPolicy>,
}

impl Default for DnsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DnsClientBuilder {
    pub fn new() -> Self {
        Self {
            config: WireConfig::default(),
            domain: DEFAULT_DOMAIN.to_string(),
            record_factory: None,
            cache_ttl: Some(DEFAULT_CACHE_TTL),
            retry_policy: Some(RetryPolicy::default()),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, DomainError> {
        let mut builder = Self::new().with_timeout(Duration::from_millis(config.resolver.timeout_ms));
        builder.domain = config.resolver.domain.clone();

        for server in &config.resolver.servers {
            builder = builder.with_server(server)?;
        }
        if config.resolver.authoritative {
            builder = builder.authoritative();
        }

        builder = if config.cache.enabled {
            builder.with_cache(Duration::from_secs(config.cache.ttl_secs))
        } else {
            builder.without_cache()
        };

        builder = if config.retry.enabled {
            builder.with_retry(RetryPolicy::from_config(&config.retry))
        } else {
            builder.without_retry()
        };

        Ok(builder)
    }

    /// Require the AA flag on every answer.
    pub fn authoritative(mut self) -> Self {
        self.config.authoritative = true;
        self
    }

    /// Add a server given as `host[:port]`.
    pub fn with_server(mut self, host: &str) -> Result<Self, DomainError> {
        let server = host
            .parse::<ServerAddr>()
            .map_err(DomainError::InvalidArgument)?;
        self.config.servers.push(server);
        Ok(self)
    }

    /// Use `hosts` as the servers of the cluster named `domain`.
    pub fn with_domain(mut self, domain: &str, hosts: &[&str]) -> Result<Self, DomainError> {
        if domain.trim().is_empty() {
            return Err(DomainError::InvalidArgument(
                "domain must not be empty".to_string(),
            ));
        }
        if hosts.is_empty() {
            return Err(DomainError::InvalidArgument(
                "at least one host must be provided".to_string(),
            ));
        }

        self.domain = domain.to_string();
        self.config.servers.clear();
        for host in hosts {
            self = self.with_server(host)?;
        }
        Ok(self)
    }

    /// [`with_domain`](Self::with_domain) for the `mesos` domain.
    pub fn with_default_domain(self, hosts: &[&str]) -> Result<Self, DomainError> {
        self.with_domain(DEFAULT_DOMAIN, hosts)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.query_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_record_factory(mut self, record_factory: Arc<dyn DnsRecordFactory>) -> Self {
        self.record_factory = Some(record_factory);
        self
    }

    pub fn with_cache(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    pub fn without_cache(mut self) -> Self {
        self.cache_ttl = None;
        self
    }

    pub fn with_retry(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    pub fn without_retry(mut self) -> Self {
        self.retry_policy = None;
        self
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn wire_config(&self) -> &WireConfig {
        &self.config
    }

    pub fn build(self) -> Result<Arc<dyn DnsClient>, DomainError> {
        if self.config.servers.is_empty() {
            return Err(DomainError::InvalidArgument(
                "at least one server must be provided".to_string(),
            ));
        }

        info!(
            servers = self.config.servers.len(),
            domain = %self.domain,
            authoritative = self.config.authoritative,
            cache = self.cache_ttl.is_some(),
            retry = self.retry_policy.is_some(),
            "Building DNS client"
        );

        let mut wire = HickoryDnsClient::new(self.config);
        if let Some(factory) = self.record_factory {
            wire = wire.with_record_factory(factory);
        }

        let mut client: Arc<dyn DnsClient> = Arc::new(wire);

        if let Some(ttl) = self.cache_ttl {
            client = Arc::new(CachingDnsClient::with_ttl(client, ttl));
        }

        if let Some(policy) = self.retry_policy {
            client = Arc::new(RetryingDnsClient::with_policy(client, policy));
        }

        info!("DNS client built successfully");
        Ok(client)
    }
}
