use mesos_dns_domain::{DomainError, ResolutionError, ServerAddr};
use std::net::SocketAddr;
use std::time::Duration;

/// Resolves a hostname to all its IP addresses (IPv4 + IPv6).
pub async fn resolve_all(
    hostname: &str,
    port: u16,
    timeout: Duration,
) -> Result<Vec<SocketAddr>, DomainError> {
    let target = format!("{}:{}", hostname, port);

    let addrs: Vec<SocketAddr> = tokio::time::timeout(timeout, tokio::net::lookup_host(&target))
        .await
        .map_err(|_| ResolutionError::Timeout {
            server: target.clone(),
        })?
        .map_err(|e| ResolutionError::Unreachable {
            server: target.clone(),
            reason: format!("host lookup failed: {}", e),
        })?
        .collect();

    if addrs.is_empty() {
        return Err(ResolutionError::Unreachable {
            server: target,
            reason: "host has no addresses".to_string(),
        }
        .into());
    }

    Ok(addrs)
}

/// Socket addresses for a configured server, in resolution order.
pub async fn server_socket_addrs(
    server: &ServerAddr,
    timeout: Duration,
) -> Result<Vec<SocketAddr>, DomainError> {
    match server {
        ServerAddr::Resolved(addr) => Ok(vec![*addr]),
        ServerAddr::Unresolved { hostname, port } => resolve_all(hostname, *port, timeout).await,
    }
}
