use super::config::WireConfig;
use crate::dns::forwarding::{DnsResponse, MessageBuilder, ResponseParser, WireAnswer};
use crate::dns::transport::resolver::server_socket_addrs;
use crate::dns::transport::Transport;
use async_trait::async_trait;
use mesos_dns_application::ports::{DefaultDnsRecordFactory, DnsClient, DnsRecordFactory};
use mesos_dns_domain::{DnsRecord, DomainError, RecordType, ResolutionError, ServerAddr};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// `DnsClient` speaking the DNS wire protocol to Mesos-DNS servers.
///
/// Servers are tried in order; only transport failures move on to the next
/// one. Truncated UDP answers are repeated over TCP.
pub struct HickoryDnsClient {
    config: WireConfig,
    record_factory: Arc<dyn DnsRecordFactory>,
}

impl HickoryDnsClient {
    pub fn new(config: WireConfig) -> Self {
        info!(
            servers = config.servers.len(),
            authoritative = config.authoritative,
            timeout_ms = config.query_timeout_ms,
            "Wire DNS client created"
        );

        Self {
            config,
            record_factory: Arc::new(DefaultDnsRecordFactory),
        }
    }

    pub fn with_record_factory(mut self, record_factory: Arc<dyn DnsRecordFactory>) -> Self {
        self.record_factory = record_factory;
        self
    }

    async fn query(
        &self,
        name: &str,
        record_type: Option<RecordType>,
    ) -> Result<Vec<WireAnswer>, DomainError> {
        if self.config.servers.is_empty() {
            return Err(ResolutionError::NoServers.into());
        }

        let (id, message) = MessageBuilder::build_query(name, record_type)?;
        let mut last_error: Option<DomainError> = None;

        for server in &self.config.servers {
            let addrs = match server_socket_addrs(server, self.config.query_timeout()).await {
                Ok(addrs) => addrs,
                Err(e) => {
                    debug!(server = %server, error = %e, "Server address lookup failed");
                    last_error = Some(e);
                    continue;
                }
            };

            for addr in addrs {
                match self.exchange(server, addr, id, &message).await {
                    Ok(response) => return self.check_response(name, response),
                    Err(e) if ResponseParser::is_transport_error(&e) => {
                        debug!(server = %addr, error = %e, "Server unavailable, trying next");
                        last_error = Some(e);
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        Err(last_error.unwrap_or_else(|| ResolutionError::NoServers.into()))
    }

    async fn exchange(
        &self,
        server: &ServerAddr,
        addr: SocketAddr,
        id: u16,
        message: &[u8],
    ) -> Result<DnsResponse, DomainError> {
        let timeout = self.config.query_timeout();

        let mut reply = Transport::udp(addr).send(message, timeout).await?;
        let mut response = ResponseParser::parse(&reply.bytes)?;

        if response.truncated {
            debug!(server = %server, "UDP response truncated, retrying over TCP");
            reply = Transport::tcp(addr).send(message, timeout).await?;
            response = ResponseParser::parse(&reply.bytes)?;
        }

        debug!(
            server = %server,
            protocol = reply.protocol_used,
            answers = response.answers.len(),
            "Wire response received"
        );

        if response.id != id {
            return Err(ResolutionError::MalformedResponse(format!(
                "response id {} does not match query id {}",
                response.id, id
            ))
            .into());
        }

        Ok(response)
    }

    fn check_response(
        &self,
        name: &str,
        response: DnsResponse,
    ) -> Result<Vec<WireAnswer>, DomainError> {
        if response.is_nxdomain() {
            return Err(ResolutionError::NotFound {
                name: name.to_string(),
            }
            .into());
        }

        if !response.is_success() {
            return Err(ResolutionError::ServerFailure {
                name: name.to_string(),
                rcode: ResponseParser::rcode_to_status(response.rcode).to_string(),
            }
            .into());
        }

        if self.config.authoritative && !response.authoritative {
            return Err(ResolutionError::NotAuthoritative {
                name: name.to_string(),
            }
            .into());
        }

        Ok(response.answers)
    }

    fn to_record(&self, name: &str, answer: WireAnswer) -> DnsRecord {
        match self
            .record_factory
            .create_record(answer.record_type, name, &answer.value)
        {
            Ok(record) => record,
            Err(e) => {
                warn!(
                    name = %name,
                    record_type = %answer.record_type,
                    value = %answer.value,
                    error = %e,
                    "Record value rejected, keeping it unparsed"
                );
                DnsRecord::plain(answer.record_type, name, answer.value)
            }
        }
    }
}

#[async_trait]
impl DnsClient for HickoryDnsClient {
    async fn lookup(
        &self,
        name: &str,
        record_types: &[RecordType],
    ) -> Result<Vec<DnsRecord>, DomainError> {
        debug!(
            name = %name,
            record_types = %RecordType::join(record_types),
            "Wire query"
        );

        let mut records = Vec::new();

        if record_types.is_empty() {
            for answer in self.query(name, None).await? {
                records.push(self.to_record(name, answer));
            }
        } else {
            for &record_type in record_types {
                for answer in self.query(name, Some(record_type)).await? {
                    if answer.record_type == record_type {
                        records.push(self.to_record(name, answer));
                    }
                }
            }
        }

        debug!(name = %name, records = records.len(), "Wire query answered");
        Ok(records)
    }
}
