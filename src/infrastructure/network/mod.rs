pub mod client;

pub use client::MockLookupClient;
