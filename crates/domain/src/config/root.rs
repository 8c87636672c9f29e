use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::retry::RetryConfig;
use crate::ServerAddr;

const LOCAL_CONFIG_PATH: &str = "mesos-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/mesos-dns/config.toml";

/// Main configuration structure for the Mesos-DNS client
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ClientConfig {
    /// Servers, discovery domain and wire settings
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Result cache
    #[serde(default)]
    pub cache: CacheConfig,

    /// Retry on empty answers
    #[serde(default)]
    pub retry: RetryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. mesos-dns.toml in current directory
    /// 3. /etc/mesos-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if !overrides.servers.is_empty() {
            self.resolver.servers = overrides.servers;
        }
        if let Some(domain) = overrides.domain {
            self.resolver.domain = domain;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.resolver.timeout_ms = timeout_ms;
        }
        if overrides.authoritative {
            self.resolver.authoritative = true;
        }
        if overrides.no_cache {
            self.cache.enabled = false;
        }
        if overrides.no_retry {
            self.retry.enabled = false;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.servers.is_empty() {
            return Err(ConfigError::Validation(
                "No Mesos-DNS servers configured".to_string(),
            ));
        }

        for server in &self.resolver.servers {
            ServerAddr::from_str(server).map_err(ConfigError::Validation)?;
        }

        if self.resolver.domain.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Discovery domain cannot be empty".to_string(),
            ));
        }

        if self.resolver.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }

        if self.cache.enabled && self.cache.ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "Cache TTL cannot be 0 while the cache is enabled".to_string(),
            ));
        }

        if self.retry.enabled && self.retry.max_attempts == 0 && self.retry.max_elapsed_secs == 0 {
            return Err(ConfigError::Validation(
                "Retry needs either max_attempts or max_elapsed_secs".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub servers: Vec<String>,
    pub domain: Option<String>,
    pub timeout_ms: Option<u64>,
    pub authoritative: bool,
    pub no_cache: bool,
    pub no_retry: bool,
    pub log_level: Option<String>,
}
