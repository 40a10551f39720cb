//! Agent Relay Core
//!
//! Foundational error types and agent stream event types for the Agent Relay
//! workspace. This crate has no dependencies on transport or HTTP code.
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `streaming` - Typed agent stream events and the adapter trait

pub mod error;
pub mod streaming;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Streaming Types ────────────────────────────────────────────────────
pub use streaming::{
    AdapterError, AgentStreamEvent, RawRetrievedReference, StreamAdapter, SOURCE_URI_METADATA_KEY,
};
