use async_trait::async_trait;
use mesos_dns_application::ports::DnsClient;
use mesos_dns_domain::config::RetryConfig;
use mesos_dns_domain::{DnsRecord, DomainError, RecordType};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tokio_retry::strategy::{FibonacciBackoff, FixedInterval};
use tracing::{debug, error, warn};

/// Wait between two attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// `unit * fib(n)` before attempt `n + 1`, never more than `max_delay`.
    Fibonacci { unit: Duration, max_delay: Duration },
    Fixed(Duration),
    None,
}

impl Backoff {
    fn delays(&self) -> Box<dyn Iterator<Item = Duration> + Send> {
        match *self {
            // from_millis(1) yields the bare sequence 1, 1, 2, 3, 5 ... which is
            // then scaled, so sub-millisecond units keep their precision
            Backoff::Fibonacci { unit, max_delay } => Box::new(
                FibonacciBackoff::from_millis(1).map(move |step| {
                    let factor = u32::try_from(step.as_millis()).unwrap_or(u32::MAX);
                    unit.saturating_mul(factor).min(max_delay)
                }),
            ),
            Backoff::Fixed(delay) => Box::new(FixedInterval::new(delay)),
            Backoff::None => Box::new(std::iter::repeat(Duration::ZERO)),
        }
    }
}

/// When to give up on an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopCondition {
    /// Wall-clock budget measured from the first attempt.
    AfterDelay(Duration),
    AfterAttempts(u32),
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub backoff: Backoff,
    pub stop: StopCondition,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            backoff: Backoff::Fibonacci {
                unit: Duration::from_millis(1),
                max_delay: Duration::from_secs(30),
            },
            stop: StopCondition::AfterDelay(Duration::from_secs(60)),
        }
    }
}

impl RetryPolicy {
    pub fn new(backoff: Backoff, stop: StopCondition) -> Self {
        Self { backoff, stop }
    }

    pub fn from_config(config: &RetryConfig) -> Self {
        let stop = if config.max_attempts > 0 {
            StopCondition::AfterAttempts(config.max_attempts)
        } else {
            StopCondition::AfterDelay(Duration::from_secs(config.max_elapsed_secs))
        };

        Self {
            backoff: Backoff::Fibonacci {
                unit: Duration::from_millis(config.backoff_unit_ms),
                max_delay: Duration::from_millis(config.max_backoff_ms),
            },
            stop,
        }
    }

    /// Wait before the next attempt, or `None` when the policy says stop.
    fn next_wait(&self, attempts: u32, started: Instant, delay: Duration) -> Option<Duration> {
        match self.stop {
            StopCondition::AfterAttempts(max) => (attempts < max).then_some(delay),
            StopCondition::AfterDelay(budget) => {
                let elapsed = started.elapsed();
                (elapsed < budget).then(|| delay.min(budget - elapsed))
            }
            StopCondition::Never => Some(delay),
        }
    }
}

/// Re-runs lookups that came back empty, since discovery records may not
/// have propagated yet.
///
/// An empty result after the policy stops is returned as-is. Resolution
/// errors end the loop immediately and reach the caller.
pub struct RetryingDnsClient {
    inner: Arc<dyn DnsClient>,
    policy: RetryPolicy,
}

impl RetryingDnsClient {
    pub fn new(inner: Arc<dyn DnsClient>) -> Self {
        Self::with_policy(inner, RetryPolicy::default())
    }

    pub fn with_policy(inner: Arc<dyn DnsClient>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }
}

#[async_trait]
impl DnsClient for RetryingDnsClient {
    async fn lookup(
        &self,
        name: &str,
        record_types: &[RecordType],
    ) -> Result<Vec<DnsRecord>, DomainError> {
        let started = Instant::now();
        let mut delays = self.policy.backoff.delays();
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;

            match self.inner.lookup(name, record_types).await {
                Ok(records) if !records.is_empty() => {
                    if attempts > 1 {
                        debug!(name = %name, attempts = attempts, "Lookup succeeded after retry");
                    }
                    return Ok(records);
                }
                Ok(_) => {}
                Err(e) if e.is_resolution() => return Err(e),
                Err(e) => {
                    error!(name = %name, attempts = attempts, error = %e, "Lookup failed unexpectedly");
                    break;
                }
            }

            let delay = delays.next().unwrap_or(Duration::ZERO);
            let Some(wait) = self.policy.next_wait(attempts, started, delay) else {
                break;
            };

            debug!(
                name = %name,
                attempt = attempts,
                wait_ms = wait.as_millis() as u64,
                "Empty result, retrying"
            );
            tokio::time::sleep(wait).await;
        }

        warn!(
            attempts = attempts,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "lookup of '{}' ({}) failed",
            name,
            RecordType::join(record_types)
        );
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci_delays() {
        let backoff = Backoff::Fibonacci {
            unit: Duration::from_millis(10),
            max_delay: Duration::from_millis(50),
        };

        let delays: Vec<u64> = backoff
            .delays()
            .take(6)
            .map(|d| d.as_millis() as u64)
            .collect();

        assert_eq!(delays, vec![10, 10, 20, 30, 50, 50]);
    }

    #[test]
    fn test_fibonacci_keeps_sub_millisecond_unit() {
        let backoff = Backoff::Fibonacci {
            unit: Duration::from_micros(1500),
            max_delay: Duration::from_secs(1),
        };

        let delays: Vec<Duration> = backoff.delays().take(4).collect();

        assert_eq!(
            delays,
            vec![
                Duration::from_micros(1500),
                Duration::from_micros(1500),
                Duration::from_micros(3000),
                Duration::from_micros(4500),
            ]
        );
    }

    #[test]
    fn test_fixed_delays() {
        let delays: Vec<Duration> = Backoff::Fixed(Duration::from_millis(7))
            .delays()
            .take(3)
            .collect();

        assert_eq!(delays, vec![Duration::from_millis(7); 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_clipped_to_remaining_budget() {
        let policy = RetryPolicy::new(
            Backoff::None,
            StopCondition::AfterDelay(Duration::from_secs(10)),
        );
        let started = Instant::now();
        tokio::time::advance(Duration::from_secs(8)).await;

        let wait = policy.next_wait(5, started, Duration::from_secs(5));

        assert_eq!(wait, Some(Duration::from_secs(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_budget_spent_stops() {
        let policy = RetryPolicy::new(
            Backoff::None,
            StopCondition::AfterDelay(Duration::from_secs(10)),
        );
        let started = Instant::now();
        tokio::time::advance(Duration::from_secs(10)).await;

        assert_eq!(policy.next_wait(2, started, Duration::ZERO), None);
    }

    #[test]
    fn test_attempt_limit() {
        let policy = RetryPolicy::new(Backoff::None, StopCondition::AfterAttempts(3));
        let now = Instant::now();

        assert!(policy.next_wait(2, now, Duration::ZERO).is_some());
        assert!(policy.next_wait(3, now, Duration::ZERO).is_none());
    }

    #[test]
    fn test_policy_from_config() {
        let mut config = RetryConfig::default();
        assert_eq!(RetryPolicy::from_config(&config), RetryPolicy::default());

        config.max_attempts = 5;
        assert_eq!(
            RetryPolicy::from_config(&config).stop,
            StopCondition::AfterAttempts(5)
        );
    }
}
