//! Services
//!
//! Business logic services for the application.
//! Services handle the core functionality and are called by commands.

pub mod relay;

pub use relay::{generate_session_id, resolve_session_id, AgentSettings, RelayService};
