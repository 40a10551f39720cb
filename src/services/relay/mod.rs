//! Relay Service
//!
//! Runs one agent invocation end to end: input validation, session id
//! resolution, transport call, stream aggregation and payload assembly.

pub mod service;
pub mod session;

pub use service::{AgentSettings, RelayService};
pub use session::{generate_session_id, resolve_session_id};
