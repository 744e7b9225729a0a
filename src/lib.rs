//! Caller identification core: contact short-circuit, TTL result cache and
//! timeout-bounded remote lookups with a degraded fallback.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use application::resolve::{CallerResolver, ResolverOptions};
pub use domain::error::CallerIdError;
pub use domain::model::{CallerRecord, PhoneNumber};
pub use domain::traits::LookupClient;
pub use infrastructure::contacts::ContactDirectory;
pub use infrastructure::network::client::MockLookupClient;
pub use infrastructure::storage::cache::{CacheEntry, ResultCache};
