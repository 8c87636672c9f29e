use serde::{Deserialize, Serialize};

use crate::discovery::DEFAULT_DOMAIN;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Mesos-DNS servers as `host[:port]`, tried in order.
    #[serde(default)]
    pub servers: Vec<String>,

    #[serde(default = "default_domain")]
    pub domain: String,

    #[serde(default)]
    pub authoritative: bool,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            servers: Vec::new(),
            domain: default_domain(),
            authoritative: false,
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

fn default_timeout_ms() -> u64 {
    2000
}
