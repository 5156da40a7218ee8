//! Find line numbers tool definition.
//!
//! Locates a code snippet inside a file under the working directory and
//! reports its line range as JSON.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::core::fs::FileSystem;
use crate::domains::locator::{MatchResult, locate};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the find line numbers tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FindLineNumbersParams {
    /// The path to the file with the security vulnerability.
    pub file_path: String,

    /// The code snippet to search for inside the file.
    pub snippet: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Find line numbers tool - maps a snippet back to its line range.
pub struct FindLineNumbersTool;

impl FindLineNumbersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "find_line_numbers";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Finds the line numbers of a code snippet in a file.";

    /// Execute the tool logic.
    ///
    /// The text content is always a JSON object: `{"startLine", "endLine"}`
    /// on success, `{"error"}` otherwise. Both are ordinary tool output;
    /// `isError` is never set.
    #[instrument(skip_all, fields(file_path = %params.file_path))]
    pub async fn execute(params: &FindLineNumbersParams, fs: &dyn FileSystem) -> CallToolResult {
        info!("Find line numbers tool called for path: {}", params.file_path);

        let result = locate(&params.file_path, &params.snippet, fs).await;
        match &result {
            Ok(range) => info!(
                "Snippet found at lines {}-{}",
                range.start_line, range.end_line
            ),
            Err(e) => warn!(kind = e.kind(), "Snippet lookup failed: {}", e),
        }

        let payload = MatchResult::from(result);
        CallToolResult::success(vec![Content::text(payload.to_json())])
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<FindLineNumbersParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(fs: Arc<dyn FileSystem>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let fs = fs.clone();
            async move {
                let params: FindLineNumbersParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, fs.as_ref()).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
