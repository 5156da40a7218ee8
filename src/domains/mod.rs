//! Domains module containing business logic organized by bounded contexts.
//!
//! - **locator**: snippet-to-line-range resolution
//! - **tools**: MCP tool definitions exposing the locator to clients

pub mod locator;
pub mod tools;
