//! Integration Tests Module
//!
//! End-to-end tests for Agent Relay: recorded event logs are replayed through
//! the relay service and the HTTP router.

mod common;

// Replay transport -> aggregation -> payload
mod relay_test;

// HTTP surface: /invoke-agent and /health
mod server_test;
