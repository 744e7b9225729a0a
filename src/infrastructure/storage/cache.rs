// In-memory result cache using DashMap
use crate::domain::model::{CallerRecord, PhoneNumber};
use dashmap::DashMap;
use std::time::Duration;
use tokio::time::Instant;

/// Default time-to-live for a cached lookup (24 hours)
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub record: CallerRecord,
    pub stored_at: Instant,
}

/// Thread-safe cache of remote lookup results keyed by raw phone number.
///
/// Entries older than the TTL are treated as absent but are not evicted;
/// they stay in the map until overwritten or until `clear`. When a capacity
/// is configured, inserting a new key into a full cache evicts the entry with
/// the oldest `stored_at`.
#[derive(Debug)]
pub struct ResultCache {
    map: DashMap<PhoneNumber, CacheEntry>,
    ttl: Duration,
    max_entries: Option<usize>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self {
            map: DashMap::new(),
            ttl: DEFAULT_TTL,
            max_entries: None,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = Some(max_entries.max(1));
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }

    /// Raw entry for a number, fresh or not.
    pub fn get(&self, phone_number: &str) -> Option<CacheEntry> {
        self.map.get(phone_number).map(|entry| entry.value().clone())
    }

    /// Store a record stamped with the current time, overwriting any
    /// previous entry for the number.
    pub fn put(&self, phone_number: &str, record: CallerRecord) {
        if let Some(max) = self.max_entries {
            if !self.map.contains_key(phone_number) && self.map.len() >= max {
                self.evict_oldest();
            }
        }

        let entry = CacheEntry {
            record: CallerRecord {
                cached: false,
                ..record
            },
            stored_at: Instant::now(),
        };
        self.map.insert(phone_number.to_string(), entry);
    }

    pub fn is_fresh(&self, entry: &CacheEntry) -> bool {
        entry.stored_at.elapsed() < self.ttl
    }

    /// Cached record for a number if present and within the TTL.
    pub fn get_fresh(&self, phone_number: &str) -> Option<CallerRecord> {
        self.get(phone_number)
            .filter(|entry| self.is_fresh(entry))
            .map(|entry| entry.record)
    }

    pub fn clear(&self) {
        self.map.clear();
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of entries still within the TTL.
    pub fn fresh_len(&self) -> usize {
        self.map
            .iter()
            .filter(|entry| self.is_fresh(entry.value()))
            .count()
    }

    fn evict_oldest(&self) {
        let oldest = self
            .map
            .iter()
            .min_by_key(|entry| entry.value().stored_at)
            .map(|entry| entry.key().clone());

        if let Some(key) = oldest {
            tracing::debug!(phone_number = %key, "evicting oldest cache entry");
            self.map.remove(&key);
        }
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}
