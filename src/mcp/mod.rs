//! MCP server for graphlens: exposes graph analysis and project storage
//! via the Model Context Protocol.
//!
//! Tools: 2 analysis + 3 project = 5 total.

pub mod params;

use params::*;
use crate::analysis::AnalysisConfig;
use crate::api::{ApiError, GraphLensApi};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};
use serde::Serialize;
use tracing::{error, info};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ok_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    match serde_json::to_string_pretty(value) {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(e) => Err(McpError::internal_error(e.to_string(), None)),
    }
}

fn err_json(e: &ApiError) -> Result<CallToolResult, McpError> {
    let text = e.to_json().to_string();
    Ok(CallToolResult::error(vec![Content::text(text)]))
}

fn decode_err(e: serde_json::Error) -> ApiError {
    ApiError::Analysis(e.into())
}

// ---------------------------------------------------------------------------
// GraphLensMcpServer
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct GraphLensMcpServer {
    api: GraphLensApi,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl GraphLensMcpServer {
    pub fn new(api: GraphLensApi) -> Self {
        Self {
            api,
            tool_router: Self::tool_router(),
        }
    }

    fn user(&self) -> String {
        self.api.config().user.clone()
    }

    // ── Analysis tools ──────────────────────────────────────────────────

    #[tool(
        description = "Analyze a directed graph: size, average degree, acyclicity, weak/strong components, longest path (if acyclic), and degree/betweenness/closeness centrality"
    )]
    async fn analyze_graph(
        &self,
        Parameters(p): Parameters<GraphParams>,
    ) -> Result<CallToolResult, McpError> {
        let spec = match p.into_spec() {
            Ok(spec) => spec,
            Err(e) => return err_json(&decode_err(e)),
        };
        match self.api.analyze(spec).await {
            Ok(report) => ok_json(&report),
            Err(e) => err_json(&e),
        }
    }

    #[tool(description = "Check that a graph is well-formed and within size limits without analyzing it")]
    fn validate_graph(
        &self,
        Parameters(p): Parameters<GraphParams>,
    ) -> Result<CallToolResult, McpError> {
        let spec = match p.into_spec() {
            Ok(spec) => spec,
            Err(e) => return err_json(&decode_err(e)),
        };
        match self.api.validate(&spec) {
            Ok(summary) => ok_json(&summary),
            Err(e) => err_json(&e),
        }
    }

    // ── Project tools ───────────────────────────────────────────────────

    #[tool(description = "Save a graph as a named project")]
    fn save_project(
        &self,
        Parameters(p): Parameters<SaveProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let (name, spec) = match p.into_parts() {
            Ok(parts) => parts,
            Err(e) => return err_json(&decode_err(e)),
        };
        match self.api.save_project(&self.user(), &name, &spec) {
            Ok(project) => ok_json(&serde_json::json!({
                "success": true,
                "id": project.id,
                "name": project.name,
            })),
            Err(e) => err_json(&e),
        }
    }

    #[tool(description = "List saved projects with their graphs")]
    fn list_projects(&self) -> Result<CallToolResult, McpError> {
        match self.api.list_projects(&self.user()) {
            Ok(projects) => ok_json(&projects),
            Err(e) => err_json(&e),
        }
    }

    #[tool(description = "Analyze the most recently saved project with the given name")]
    async fn analyze_project(
        &self,
        Parameters(p): Parameters<ProjectNameParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.api.analyze_project(&self.user(), &p.name).await {
            Ok(report) => ok_json(&report),
            Err(e) => err_json(&e),
        }
    }
}

#[tool_handler]
impl ServerHandler for GraphLensMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "graphlens MCP server: structural statistics and centrality for directed graphs, plus saved projects"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run_mcp_server(config: AnalysisConfig) -> i32 {
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("failed to create tokio runtime: {}", e);
            return 1;
        }
    };

    rt.block_on(async {
        info!(
            max_nodes = config.max_nodes,
            max_edges = config.max_edges,
            timeout_seconds = config.timeout_seconds,
            "graphlens mcp server starting on stdio"
        );

        let server = GraphLensMcpServer::new(GraphLensApi::new(config));

        let service = match server.serve(rmcp::transport::stdio()).await {
            Ok(s) => s,
            Err(e) => {
                error!("failed to start MCP server: {}", e);
                return 1;
            }
        };

        if let Err(e) = service.waiting().await {
            error!("MCP server error: {}", e);
            return 1;
        }

        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphSpec;
    use crate::storage::{MemoryProjectStore, ProjectStore};
    use std::sync::Arc;

    fn text_of(result: &CallToolResult) -> String {
        serde_json::to_string(result).unwrap()
    }

    #[test]
    fn list_projects_is_scoped_to_configured_user() {
        let store = Arc::new(MemoryProjectStore::new());
        let spec = GraphSpec::default().with_node(1, "A");
        store.save("local", "mine", &spec).unwrap();
        store.save("someone-else", "theirs", &spec).unwrap();

        let api = GraphLensApi::with_store(AnalysisConfig::default(), store);
        let server = GraphLensMcpServer::new(api);
        let listed = text_of(&server.list_projects().unwrap());

        assert!(listed.contains("mine"));
        assert!(!listed.contains("theirs"));
    }
}
