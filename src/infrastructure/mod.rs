pub mod config;
pub mod contacts;
pub mod network;
pub mod storage;
