//! Snippet Locator MCP Server
//!
//! An MCP server with a single tool, `find_line_numbers`: given a file path
//! and a code snippet, it reports the 1-based line range where the snippet
//! occurs. Paths are confined to the process working directory, and
//! symlinks are resolved before that check.
//!
//! # Architecture
//!
//! - **core**: configuration, errors, filesystem capability, path security,
//!   server handler and transports
//! - **domains**
//!   - **locator**: line indexing and snippet matching
//!   - **tools**: MCP tool definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use snippet_locator_mcp::{TokioFileSystem, locate};
//!
//! #[tokio::main]
//! async fn main() {
//!     match locate("src/main.rs", "fn main() {", &TokioFileSystem).await {
//!         Ok(range) => println!("{}-{}", range.start_line, range.end_line),
//!         Err(e) => eprintln!("{}", e),
//!     }
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, FileSystem, McpServer, Result, TokioFileSystem};
pub use domains::locator::{LineRange, LocateError, MatchResult, locate, locate_in};
