//! MCP Server implementation.
//!
//! The handler exposes the tools built in `domains/tools/router.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use super::fs::{FileSystem, TokioFileSystem};
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
///
/// Cloned once per client session; clones share the configuration and the
/// filesystem capability, neither of which holds mutable state.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server reading files from the real filesystem.
    pub fn new(config: Config) -> Self {
        Self::with_filesystem(config, Arc::new(TokioFileSystem))
    }

    /// Create a new MCP server with a custom filesystem capability.
    pub fn with_filesystem(config: Config, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            config: Arc::new(config),
            tool_router: build_tool_router::<Self>(fs),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Names of all tools this server exposes.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Locates code snippets in files under the working directory. \
                 Call find_line_numbers with a file path and a snippet to get \
                 its start and end line."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
