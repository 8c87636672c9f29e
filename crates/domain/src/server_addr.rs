use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// A Mesos-DNS server given as `host[:port]`; the port defaults to 53.
///
/// Hostnames stay unresolved until the wire client looks them up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServerAddr {
    Resolved(SocketAddr),
    Unresolved { hostname: Arc<str>, port: u16 },
}

impl ServerAddr {
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match self {
            ServerAddr::Resolved(addr) => Some(*addr),
            ServerAddr::Unresolved { .. } => None,
        }
    }

    pub fn port(&self) -> u16 {
        match self {
            ServerAddr::Resolved(addr) => addr.port(),
            ServerAddr::Unresolved { port, .. } => *port,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, ServerAddr::Unresolved { .. })
    }

    /// Returns (hostname, port) if this address is unresolved.
    pub fn unresolved_parts(&self) -> Option<(&str, u16)> {
        match self {
            ServerAddr::Unresolved { hostname, port } => Some((hostname, *port)),
            ServerAddr::Resolved(_) => None,
        }
    }
}

impl fmt::Display for ServerAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerAddr::Resolved(addr) => write!(f, "{}", addr),
            ServerAddr::Unresolved { hostname, port } => write!(f, "{}:{}", hostname, port),
        }
    }
}

fn parse_host_port(s: &str) -> Result<(&str, Option<u16>), String> {
    if let Some(rest) = s.strip_prefix('[') {
        let end = rest
            .find(']')
            .ok_or_else(|| format!("Unterminated IPv6 literal in '{}'", s))?;
        let host = &rest[..end];
        let after = &rest[end + 1..];
        if after.is_empty() {
            return Ok((host, None));
        }
        let port_str = after
            .strip_prefix(':')
            .ok_or_else(|| format!("Invalid address '{}'", s))?;
        let port = port_str
            .parse::<u16>()
            .map_err(|e| format!("Invalid port in '{}': {}", s, e))?;
        return Ok((host, Some(port)));
    }

    match s.rsplit_once(':') {
        Some((host, port_str)) => {
            let port = port_str
                .parse::<u16>()
                .map_err(|e| format!("Invalid port in '{}': {}", s, e))?;
            Ok((host, Some(port)))
        }
        None => Ok((s, None)),
    }
}

impl FromStr for ServerAddr {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Server address must not be empty".to_string());
        }

        if let Ok(addr) = s.parse::<SocketAddr>() {
            return Ok(ServerAddr::Resolved(addr));
        }
        if let Ok(ip) = s.parse::<IpAddr>() {
            return Ok(ServerAddr::Resolved(SocketAddr::new(ip, DEFAULT_DNS_PORT)));
        }

        let (host, port) = parse_host_port(s)?;
        let port = port.unwrap_or(DEFAULT_DNS_PORT);
        if host.is_empty() {
            return Err(format!("Missing host in '{}'", s));
        }

        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(ServerAddr::Resolved(SocketAddr::new(ip, port)));
        }

        Ok(ServerAddr::Unresolved {
            hostname: host.into(),
            port,
        })
    }
}
