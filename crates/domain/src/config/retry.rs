use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetryConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Wall-clock budget measured from the first attempt.
    #[serde(default = "default_max_elapsed_secs")]
    pub max_elapsed_secs: u64,

    /// When non-zero, stop after this many attempts instead of after `max_elapsed_secs`.
    #[serde(default)]
    pub max_attempts: u32,

    #[serde(default = "default_backoff_unit_ms")]
    pub backoff_unit_ms: u64,

    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_elapsed_secs: default_max_elapsed_secs(),
            max_attempts: 0,
            backoff_unit_ms: default_backoff_unit_ms(),
            max_backoff_ms: default_max_backoff_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_elapsed_secs() -> u64 {
    60
}

fn default_backoff_unit_ms() -> u64 {
    1
}

fn default_max_backoff_ms() -> u64 {
    30_000
}
