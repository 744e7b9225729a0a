use crate::domain::error::CallerIdError;
use crate::domain::model::CallerRecord;
use crate::domain::traits::LookupClient;
use async_trait::async_trait;
use std::time::Duration;

/// Simulated network latency of the mock service
pub const DEFAULT_LOOKUP_DELAY: Duration = Duration::from_millis(2000);

/// Stand-in for an external identity / reputation service.
///
/// Sleeps for a fixed delay, then classifies the number by its last digit.
#[derive(Debug, Clone)]
pub struct MockLookupClient {
    delay: Duration,
}

impl MockLookupClient {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_LOOKUP_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for MockLookupClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LookupClient for MockLookupClient {
    async fn lookup(&self, phone_number: &str) -> Result<CallerRecord, CallerIdError> {
        tokio::time::sleep(self.delay).await;
        Ok(classify(phone_number))
    }
}

/// Deterministic classification on `last digit mod 3`.
///
/// A number whose last character is not a digit (or an empty number) falls
/// into the anonymous high-risk bucket.
pub fn classify(phone_number: &str) -> CallerRecord {
    let last_digit = phone_number.chars().last().and_then(|c| c.to_digit(10));

    match last_digit.map(|d| d % 3) {
        Some(0) => CallerRecord {
            name: Some("John Smith".to_string()),
            location: Some("New York, NY".to_string()),
            spam_likelihood: Some(10),
            tags: Some(vec!["Business".to_string(), "Verified".to_string()]),
            ..CallerRecord::new(phone_number)
        },
        Some(1) => CallerRecord {
            name: Some("Unknown Business".to_string()),
            location: Some("Los Angeles, CA".to_string()),
            spam_likelihood: Some(45),
            tags: Some(vec!["Business".to_string()]),
            ..CallerRecord::new(phone_number)
        },
        _ => CallerRecord {
            location: Some("Unknown Location".to_string()),
            spam_likelihood: Some(85),
            tags: Some(vec!["Reported Spam".to_string()]),
            ..CallerRecord::new(phone_number)
        },
    }
}
