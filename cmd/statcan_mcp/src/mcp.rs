// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

//! MCP (Model Context Protocol) tool server.
//!
//! Exposes three tools to LLM agents:
//!
//! - `browse_catalogue`: list the known tables
//! - `get_statcan_data`: fetch a table by topic, with sample data as fallback
//! - `search_statcan`: fetch an arbitrary table by identifier
//!
//! It also offers the table viewer page as a `text/html` resource at
//! [`VIEWER_URI`]. The page renders any tool's `structuredContent`.
//!
//! A server holds no per-request state; the HTTP transport builds a fresh one
//! for every request.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{
        AnnotateAble, CallToolResult, Content, ListResourcesResult, PaginatedRequestParam,
        RawResource, ReadResourceRequestParam, ReadResourceResult, Resource, ResourceContents,
        ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalogue::Topic;
use crate::fetch::StatCanClient;
use crate::handlers::{self, DEFAULT_SEARCH_ROWS, DEFAULT_TOPIC_ROWS, MAX_ROWS_RANGE, ToolOutput};

/// Stable URI of the table viewer resource.
pub const VIEWER_URI: &str = "ui://statcan/table.html";

pub const VIEWER_MIME: &str = "text/html";

pub const VIEWER_HTML: &str = include_str!("static/index.html");

fn viewer_resource() -> Resource {
    let mut raw = RawResource::new(VIEWER_URI, "statcan-table-viewer");
    raw.title = Some("Statistics Canada Table Viewer".into());
    raw.description = Some("Renders the structured table returned by the data tools.".into());
    raw.mime_type = Some(VIEWER_MIME.into());
    raw.size = u32::try_from(VIEWER_HTML.len()).ok();
    raw.no_annotation()
}

fn viewer_contents() -> ResourceContents {
    ResourceContents::TextResourceContents {
        uri: VIEWER_URI.into(),
        mime_type: Some(VIEWER_MIME.into()),
        text: VIEWER_HTML.into(),
        meta: None,
    }
}

#[derive(Clone)]
pub struct StatCanServer {
    client: StatCanClient,
    tool_router: ToolRouter<Self>,
}

impl StatCanServer {
    pub fn new(client: StatCanClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }
}

// --- Tool Parameter Types ---

/// Parameters for get_statcan_data tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetDataParams {
    /// Statistical topic to retrieve.
    pub topic: Topic,

    /// Maximum number of rows to return (5-50, default 15).
    #[serde(default = "default_topic_rows")]
    #[schemars(range(min = 5, max = 50))]
    pub max_rows: usize,
}

/// Parameters for search_statcan tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Statistics Canada table identifier, e.g. "17-10-0005-01".
    pub table_id: String,

    /// Maximum number of rows to return (5-50, default 20).
    #[serde(default = "default_search_rows")]
    #[schemars(range(min = 5, max = 50))]
    pub max_rows: usize,
}

fn default_topic_rows() -> usize {
    DEFAULT_TOPIC_ROWS
}

fn default_search_rows() -> usize {
    DEFAULT_SEARCH_ROWS
}

fn check_max_rows(max_rows: usize) -> Result<usize, McpError> {
    if MAX_ROWS_RANGE.contains(&max_rows) {
        Ok(max_rows)
    } else {
        Err(McpError::invalid_params(
            format!(
                "max_rows must be between {} and {}, got {}",
                MAX_ROWS_RANGE.start(),
                MAX_ROWS_RANGE.end(),
                max_rows
            ),
            None,
        ))
    }
}

/// Summary first, then the table as JSON text and as structured content.
fn to_call_result(output: ToolOutput) -> Result<CallToolResult, McpError> {
    let table = serde_json::to_value(&output.table)
        .map_err(|e| McpError::internal_error(format!("JSON error: {}", e), None))?;
    let json = serde_json::to_string_pretty(&table)
        .map_err(|e| McpError::internal_error(format!("JSON error: {}", e), None))?;

    let mut result = CallToolResult::success(vec![Content::text(output.summary), Content::text(json)]);
    result.structured_content = Some(table);
    Ok(result)
}

// --- Tool Implementations ---

#[tool_router]
impl StatCanServer {
    #[tool(
        name = "browse_catalogue",
        description = "List the Statistics Canada tables available by topic, with their table IDs. Call this first to discover topics."
    )]
    async fn browse_catalogue(&self) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::browse_catalogue())
    }

    #[tool(
        name = "get_statcan_data",
        description = "Get Statistics Canada data for a topic (population, labour, cpi, gdp, housing, trade, crime, education). Falls back to sample data if the live table cannot be retrieved."
    )]
    async fn get_statcan_data(
        &self,
        Parameters(params): Parameters<GetDataParams>,
    ) -> Result<CallToolResult, McpError> {
        let max_rows = check_max_rows(params.max_rows)?;
        let output = handlers::get_statcan_data(&self.client, params.topic.as_str(), max_rows).await;
        to_call_result(output)
    }

    #[tool(
        name = "search_statcan",
        description = "Get any Statistics Canada table by its identifier (format NN-NN-NNNN-NN, e.g. 17-10-0005-01). Returns an empty table if it cannot be retrieved."
    )]
    async fn search_statcan(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        let max_rows = check_max_rows(params.max_rows)?;
        let output = handlers::search_statcan(&self.client, &params.table_id, max_rows).await;
        to_call_result(output)
    }
}

#[tool_handler]
impl ServerHandler for StatCanServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "statcan-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: Some("Statistics Canada Data".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Statistics Canada data tools. Use browse_catalogue to list topics, \
                 get_statcan_data to retrieve a topic's table, and search_statcan to \
                 retrieve any table by its identifier."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(vec![viewer_resource()]))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        if request.uri != VIEWER_URI {
            return Err(McpError::resource_not_found(
                format!("Unknown resource: {}", request.uri),
                None,
            ));
        }
        Ok(ReadResourceResult {
            contents: vec![viewer_contents()],
        })
    }
}
