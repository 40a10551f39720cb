//! Data Models
//!
//! Contains all data structures used throughout the application.

pub mod response;
pub mod settings;

pub use response::*;
pub use settings::*;
