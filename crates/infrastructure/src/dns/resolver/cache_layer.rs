use crate::dns::cache::CacheKey;
use async_trait::async_trait;
use dashmap::DashMap;
use mesos_dns_application::ports::DnsClient;
use mesos_dns_domain::{DnsRecord, DomainError, RecordType};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, error};

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

struct CachedEntry {
    records: Vec<DnsRecord>,
    stored_at: Instant,
}

impl CachedEntry {
    fn is_live(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() < ttl
    }
}

type Slot = Arc<Mutex<Option<CachedEntry>>>;

/// Memoizes lookups for a fixed TTL.
///
/// Each key has its own lock, so concurrent lookups of one key share a single
/// load while distinct keys load in parallel. Empty results and failures are
/// never kept, and a key's slot only outlives its lookup when a result is
/// stored in it.
pub struct CachingDnsClient {
    inner: Arc<dyn DnsClient>,
    ttl: Duration,
    slots: DashMap<CacheKey, Slot>,
}

impl CachingDnsClient {
    pub fn new(inner: Arc<dyn DnsClient>) -> Self {
        Self::with_ttl(inner, DEFAULT_CACHE_TTL)
    }

    pub fn with_ttl(inner: Arc<dyn DnsClient>, ttl: Duration) -> Self {
        debug!(ttl_secs = ttl.as_secs(), "Lookup cache created");
        Self {
            inner,
            ttl,
            slots: DashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn slot(&self, key: &CacheKey) -> Slot {
        Arc::clone(self.slots.entry(key.clone()).or_default().value())
    }

    /// Drop `slot` from the map when it holds nothing and no other lookup
    /// has picked it up. The map's reference plus the caller's make two.
    fn release_slot(&self, key: &CacheKey, slot: &Slot) {
        self.slots.remove_if(key, |_, current| {
            Arc::ptr_eq(current, slot)
                && Arc::strong_count(current) <= 2
                && matches!(current.try_lock(), Ok(entry) if entry.is_none())
        });
    }

    /// Drop the stored result of one lookup. Returns whether anything was stored.
    pub async fn invalidate(&self, name: &str, record_types: &[RecordType]) -> bool {
        let key = CacheKey::new(name, record_types);
        let Some(slot) = self.slots.get(&key).map(|s| Arc::clone(s.value())) else {
            return false;
        };

        let removed = slot.lock().await.take().is_some();
        if removed {
            debug!(key = %key, reason = "invalidated", "Cache entry removed");
        }
        self.release_slot(&key, &slot);
        removed
    }

    pub async fn invalidate_all(&self) {
        let slots: Vec<(CacheKey, Slot)> = self
            .slots
            .iter()
            .map(|s| (s.key().clone(), Arc::clone(s.value())))
            .collect();

        for (key, slot) in slots {
            if slot.lock().await.take().is_some() {
                debug!(key = %key, reason = "invalidated", "Cache entry removed");
            }
            self.release_slot(&key, &slot);
        }
    }

    /// Remove expired and empty slots that no lookup is currently using.
    /// Returns the number of expired entries evicted.
    pub fn purge_expired(&self) -> usize {
        let ttl = self.ttl;
        let mut evicted = 0;

        self.slots.retain(|key, slot| {
            // a lookup holding a clone may not have locked it yet
            if Arc::strong_count(slot) > 1 {
                return true;
            }
            let Ok(entry) = slot.try_lock() else {
                return true;
            };
            match entry.as_ref() {
                Some(cached) if cached.is_live(ttl) => true,
                Some(_) => {
                    debug!(key = %key, "Cache entry evicted");
                    evicted += 1;
                    false
                }
                None => false,
            }
        });

        evicted
    }

    /// Number of stored results, expired or not.
    ///
    /// Approximate while lookups run: a slot locked by any lookup, a plain
    /// cache hit included, is skipped.
    pub fn len(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s.value().try_lock(), Ok(entry) if entry.is_some()))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DnsClient for CachingDnsClient {
    async fn lookup(
        &self,
        name: &str,
        record_types: &[RecordType],
    ) -> Result<Vec<DnsRecord>, DomainError> {
        let key = CacheKey::new(name, record_types);
        let slot = self.slot(&key);
        let mut entry = slot.lock().await;

        let expired = match entry.as_ref() {
            Some(cached) if cached.is_live(self.ttl) => {
                debug!(key = %key, records = cached.records.len(), "Cache HIT");
                return Ok(cached.records.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            debug!(key = %key, "Cache entry evicted");
            *entry = None;
        }

        debug!(key = %key, "Cache MISS");

        let result = match self.inner.lookup(name, record_types).await {
            Ok(records) if records.is_empty() => {
                debug!(key = %key, reason = "empty result", "Cache entry removed");
                Ok(records)
            }
            Ok(records) => {
                *entry = Some(CachedEntry {
                    records: records.clone(),
                    stored_at: Instant::now(),
                });
                return Ok(records);
            }
            Err(e) if e.is_resolution() => Err(e),
            Err(e) => {
                error!(key = %key, error = %e, "Lookup failed unexpectedly");
                Ok(Vec::new())
            }
        };

        drop(entry);
        self.release_slot(&key, &slot);
        result
    }
}
