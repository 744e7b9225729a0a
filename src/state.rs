use crate::application::resolve::{CallerResolver, ResolverOptions};
use crate::domain::traits::LookupClient;
use crate::infrastructure::config::Config;
use crate::infrastructure::contacts::ContactDirectory;
use crate::infrastructure::network::client::MockLookupClient;
use crate::infrastructure::storage::cache::ResultCache;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cache: Arc<ResultCache>,
    pub resolver: Arc<CallerResolver>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = MockLookupClient::with_delay(config.lookup_delay());
        Self::with_client(config, Arc::new(client))
    }

    pub fn with_client(config: Config, client: Arc<dyn LookupClient>) -> Self {
        let mut cache = ResultCache::new().with_ttl(config.cache_ttl());
        if let Some(max) = config.cache.max_entries {
            cache = cache.with_max_entries(max);
        }
        let cache = Arc::new(cache);

        let resolver = CallerResolver::new(
            client,
            ContactDirectory::with_marker_suffix(config.contacts.marker_suffix.clone()),
            Arc::clone(&cache),
            ResolverOptions::from(&config),
        );

        Self {
            config: Arc::new(config),
            cache,
            resolver: Arc::new(resolver),
        }
    }
}
