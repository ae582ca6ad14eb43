#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultGenAiClient, GenAiClient, NO_CONTENT_REPLY};

// Configuration
pub use config::GenAiClientConfig;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
