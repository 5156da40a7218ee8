//! Core module containing shared infrastructure components.
//!
//! Configuration, error handling, the filesystem capability, path security,
//! the MCP server handler and its transports.

pub mod config;
pub mod error;
pub mod fs;
pub mod security;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use fs::{FileSystem, TokioFileSystem};
pub use security::{PathSecurityError, validate_path};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
