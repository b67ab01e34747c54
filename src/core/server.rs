//! MCP server implementation and lifecycle management.
//!
//! The main server handler implements the MCP protocol by delegating to the
//! resources service and the tool router. Tools are defined in
//! `domains/tools/definitions/` (one file per tool) and routed through the
//! ToolRouter built in `domains/tools/router.rs`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::arango::{ConnectionSettings, ConnectorRegistry, GatewayError};
use crate::domains::resources::{ResourceError, ResourceService};
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
///
/// Owns the connector registry shared by all query tools and the resource
/// service serving collection listings and document reads.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let registry = Arc::new(ConnectorRegistry::new(ConnectionSettings {
            base_url: config.gateway.base_url.clone(),
            credentials: config.gateway.credentials.clone(),
        }));

        let resource_service = Arc::new(ResourceService::new(
            config.gateway.clone(),
            registry.clone(),
        ));

        Self {
            tool_router: build_tool_router::<Self>(registry),
            config,
            resource_service,
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
}

fn resource_error_to_mcp(err: ResourceError) -> McpError {
    match &err {
        ResourceError::InvalidUri(_) => McpError::invalid_params(err.to_string(), None),
        ResourceError::Gateway(GatewayError::DocumentNotFound { .. }) => {
            McpError::resource_not_found(err.to_string(), None)
        }
        _ => McpError::internal_error(err.to_string(), None),
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "ArangoDB MCP gateway. Run AQL with the readQuery and readWriteQuery \
                 tools, enumerate databases and collections, and read single documents \
                 through arangodb:///database/collection/documentId resources."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self
            .resource_service
            .list_resources()
            .await
            .map_err(resource_error_to_mcp)?;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        Ok(ListResourceTemplatesResult {
            resource_templates: self.resource_service.list_resource_templates(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(resource_error_to_mcp)
    }
}
