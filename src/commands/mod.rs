//! HTTP Commands
//!
//! Axum handlers for the relay's HTTP surface.

pub mod health;
pub mod invoke;

pub use health::*;
pub use invoke::*;
