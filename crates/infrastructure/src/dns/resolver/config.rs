use mesos_dns_domain::ServerAddr;
use std::time::Duration;

/// Parameters of the wire client.
#[derive(Clone, Debug)]
pub struct WireConfig {
    pub servers: Vec<ServerAddr>,

    /// Reject answers without the AA flag.
    pub authoritative: bool,

    pub query_timeout_ms: u64,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            servers: Vec::new(),
            authoritative: false,
            query_timeout_ms: 2000,
        }
    }
}

impl WireConfig {
    pub fn with_server(mut self, server: ServerAddr) -> Self {
        self.servers.push(server);
        self
    }

    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.query_timeout_ms = timeout_ms;
        self
    }

    pub fn authoritative(mut self) -> Self {
        self.authoritative = true;
        self
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}
