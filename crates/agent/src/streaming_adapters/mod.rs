//! Transport-Specific Stream Adapters
//!
//! Each adapter handles the wire format of one agent runtime.

pub mod bedrock;

pub use bedrock::BedrockEventAdapter;
