//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::model::Tool;

use crate::core::fs::FileSystem;

use super::definitions::FindLineNumbersTool;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(fs: Arc<dyn FileSystem>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new().with_route(FindLineNumbersTool::create_route(fs))
}

/// Metadata for every registered tool.
pub fn all_tools() -> Vec<Tool> {
    vec![FindLineNumbersTool::to_tool()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fs::TokioFileSystem;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(Arc::new(TokioFileSystem));
        let tools = router.list_all();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name.as_ref(), "find_line_numbers");
    }

    #[test]
    fn test_metadata_matches_router() {
        let router: ToolRouter<TestServer> = build_tool_router(Arc::new(TokioFileSystem));
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        let tools = all_tools();
        assert_eq!(tools.len(), router_names.len());
        for tool in &tools {
            assert!(router_names.contains(&tool.name.as_ref()));
        }
    }
}
