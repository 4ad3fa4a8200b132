//! Fitplan Tools module
//!
//! Tool implementations behind the MCP server. Each returns a
//! `ToolResponse` envelope.

pub mod args;
pub mod envelope;
pub mod fitness;
pub mod nutrition;
pub mod status;

pub use envelope::ToolResponse;
