//! Fake lookup clients shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use callerid::infrastructure::network::client::classify;
use callerid::{CallerIdError, CallerRecord, LookupClient};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Classifies like the mock service after `delay`, counting calls.
pub struct CountingClient {
    pub delay: Duration,
    calls: AtomicUsize,
}

impl CountingClient {
    pub fn new(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LookupClient for CountingClient {
    async fn lookup(&self, phone_number: &str) -> Result<CallerRecord, CallerIdError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(classify(phone_number))
    }
}

/// Always fails with a transport error.
pub struct FailingClient {
    calls: AtomicUsize,
}

impl FailingClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LookupClient for FailingClient {
    async fn lookup(&self, _phone_number: &str) -> Result<CallerRecord, CallerIdError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CallerIdError::Lookup("connection reset".to_string()))
    }
}

/// Panics inside the lookup task.
pub struct PanickingClient;

#[async_trait]
impl LookupClient for PanickingClient {
    async fn lookup(&self, _phone_number: &str) -> Result<CallerRecord, CallerIdError> {
        panic!("lookup blew up");
    }
}
