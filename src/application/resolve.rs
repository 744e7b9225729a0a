use crate::domain::error::CallerIdError;
use crate::domain::model::CallerRecord;
use crate::domain::traits::LookupClient;
use crate::infrastructure::config::{Config, DEFAULT_TIMEOUT_MS};
use crate::infrastructure::contacts::ContactDirectory;
use crate::infrastructure::storage::cache::ResultCache;
use futures_util::future::join_all;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ResolverOptions {
    pub timeout: Duration,
    /// Send known contacts through full resolution as well.
    pub lookup_known_contacts: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            lookup_known_contacts: false,
        }
    }
}

impl From<&Config> for ResolverOptions {
    fn from(config: &Config) -> Self {
        Self {
            timeout: config.timeout(),
            lookup_known_contacts: config.lookup_known_contacts,
        }
    }
}

/// Resolves a phone number to a caller record.
///
/// Resolution order:
/// 1. Contact directory (skipped when `lookup_known_contacts` is set)
/// 2. Fresh cache entry, returned with `cached = true`
/// 3. Remote lookup raced against the timeout; a win is written to the cache
///
/// Any failure in step 3 yields `CallerRecord::lookup_failed`, which is never
/// cached. `resolve` therefore always returns a record.
pub struct CallerResolver {
    client: Arc<dyn LookupClient>,
    contacts: ContactDirectory,
    cache: Arc<ResultCache>,
    options: ResolverOptions,
}

impl CallerResolver {
    pub fn new(
        client: Arc<dyn LookupClient>,
        contacts: ContactDirectory,
        cache: Arc<ResultCache>,
        options: ResolverOptions,
    ) -> Self {
        Self {
            client,
            contacts,
            cache,
            options,
        }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    pub fn cache(&self) -> &Arc<ResultCache> {
        &self.cache
    }

    pub fn is_known_contact(&self, phone_number: &str) -> bool {
        self.contacts.is_known_contact(phone_number)
    }

    pub fn contact_record(&self, phone_number: &str) -> CallerRecord {
        self.contacts.contact_record(phone_number)
    }

    pub fn clear_cache(&self) {
        let dropped = self.cache.len();
        self.cache.clear();
        tracing::info!(dropped, "caller cache cleared");
    }

    /// Resolve with the configured timeout.
    pub async fn resolve(&self, phone_number: &str) -> CallerRecord {
        self.resolve_with_timeout(phone_number, self.options.timeout)
            .await
    }

    pub async fn resolve_with_timeout(&self, phone_number: &str, timeout: Duration) -> CallerRecord {
        // 1. Contacts
        if !self.options.lookup_known_contacts && self.contacts.is_known_contact(phone_number) {
            tracing::debug!(phone_number, "known contact, skipping lookup");
            return self.contacts.contact_record(phone_number);
        }

        // 2. Cache
        if let Some(cached) = self.cache.get_fresh(phone_number) {
            tracing::debug!(phone_number, "using cached caller info");
            return cached.as_cached();
        }

        // 3. Remote lookup
        match self.lookup_with_timeout(phone_number, timeout).await {
            Ok(record) => {
                tracing::info!(
                    phone_number,
                    spam_likelihood = ?record.spam_likelihood,
                    "caller resolved"
                );
                self.cache.put(phone_number, record.clone());
                record
            }
            Err(e) => {
                tracing::warn!(phone_number, error = %e, "caller lookup failed");
                CallerRecord::lookup_failed(phone_number)
            }
        }
    }

    /// Resolve several numbers concurrently, results in input order.
    /// Repeated numbers are not coalesced.
    pub async fn resolve_many<S: AsRef<str>>(&self, phone_numbers: &[S]) -> Vec<CallerRecord> {
        join_all(phone_numbers.iter().map(|n| self.resolve(n.as_ref()))).await
    }

    // The lookup runs as its own task so losing the race detaches it instead
    // of cancelling it. Its late result is dropped and never reaches the cache.
    async fn lookup_with_timeout(
        &self,
        phone_number: &str,
        timeout: Duration,
    ) -> Result<CallerRecord, CallerIdError> {
        let client = Arc::clone(&self.client);
        let number = phone_number.to_string();
        let lookup = tokio::spawn(async move { client.lookup(&number).await });

        let mut record = tokio::select! {
            biased;
            joined = lookup => joined
                .map_err(|e| CallerIdError::Lookup(format!("lookup task failed: {}", e)))??,
            _ = tokio::time::sleep(timeout) => return Err(CallerIdError::Timeout(timeout)),
        };
        record.cached = false;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::network::client::MockLookupClient;

    fn resolver(delay_ms: u64) -> CallerResolver {
        CallerResolver::new(
            Arc::new(MockLookupClient::with_delay(Duration::from_millis(delay_ms))),
            ContactDirectory::new(),
            Arc::new(ResultCache::new()),
            ResolverOptions::default(),
        )
    }

    #[test]
    fn options_follow_config() {
        let config = Config {
            timeout_ms: 3000,
            lookup_known_contacts: true,
            ..Config::default()
        };
        let options = ResolverOptions::from(&config);
        assert_eq!(options.timeout, Duration::from_millis(3000));
        assert!(options.lookup_known_contacts);
    }

    #[tokio::test(start_paused = true)]
    async fn lookup_finishing_before_timeout_wins() {
        let resolver = resolver(2000);
        let record = resolver.resolve("+15550003").await;
        assert_eq!(record.name.as_deref(), Some("John Smith"));
        assert!(!record.cached);
        assert!(resolver.cache().get("+15550003").is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn slow_lookup_times_out() {
        let resolver = resolver(8000);
        let started = tokio::time::Instant::now();
        let record = resolver
            .resolve_with_timeout("+15550003", Duration::from_millis(1000))
            .await;
        assert!(record.is_degraded());
        assert!(started.elapsed() < Duration::from_millis(1100));

        // let the detached lookup finish; its result must not be cached
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(resolver.cache().get("+15550003").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn resolve_many_keeps_input_order() {
        let resolver = resolver(2000);
        let started = tokio::time::Instant::now();
        let records = resolver
            .resolve_many(&["+15550001", "+15551234", "+15550002"])
            .await;
        // lookups run concurrently
        assert!(started.elapsed() < Duration::from_millis(4000));

        let numbers: Vec<_> = records.iter().map(|r| r.phone_number.as_str()).collect();
        assert_eq!(numbers, ["+15550001", "+15551234", "+15550002"]);
        assert_eq!(records[1].location.as_deref(), Some("From Contacts"));
    }
}
