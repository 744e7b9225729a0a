use crate::domain::error::CallerIdError;
use crate::domain::model::CallerRecord;
use async_trait::async_trait;

/// Trait for remote identity / reputation services
///
/// Given the same number an implementation should return the same
/// classification. Latency is bounded by the caller through a timeout, not
/// by the implementation, and a call may fail with `CallerIdError::Lookup`.
#[async_trait]
pub trait LookupClient: Send + Sync {
    /// Look up a phone number
    async fn lookup(&self, phone_number: &str) -> Result<CallerRecord, CallerIdError>;
}
