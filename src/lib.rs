//! Fitplan Library
//!
//! Deterministic meal and workout planning: calorie targets, meal plan
//! composition, exercise search and workout composition, exposed as MCP
//! tools.

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fitness;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
