//! Agent Relay - Rust Backend Library
//!
//! Relays chat messages to a knowledge-base agent and returns its answer with
//! de-duplicated, numbered citations. It includes:
//! - HTTP handlers (`/invoke-agent`, `/health`)
//! - The relay service driving one invocation end to end
//! - Config loading and validation
//! - Data models and utilities

pub mod commands;
pub mod models;
pub mod server;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

pub use commands::{get_health, invoke_agent};
pub use models::response::*;
pub use models::settings::{AppConfig, SettingsUpdate};
pub use server::{build_router, serve};
pub use services::relay::{AgentSettings, RelayService};
pub use state::AppState;
pub use storage::ConfigService;
pub use utils::error::{AppError, AppResult};
