//! Read-write query tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::run_query;
use crate::arango::{AccessMode, ConnectorRegistry};

/// Parameters for the readWriteQuery tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadWriteQueryParams {
    /// Name of the database to run the query against.
    #[schemars(description = "Name of the database to run the query against")]
    pub database_name: String,

    /// The AQL query to execute.
    #[schemars(description = "The AQL query to execute; it may modify documents")]
    pub aql: String,
}

/// Read-write query tool.
///
/// The statement runs inside a transaction that locks every collection in
/// the database for both read and write.
pub struct ReadWriteQueryTool;

impl ReadWriteQueryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "readWriteQuery";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Run an AQL query that may modify documents. The query executes inside a transaction that locks every collection in the database for read and write.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(database = %params.database_name))]
    pub async fn execute(
        params: &ReadWriteQueryParams,
        registry: &ConnectorRegistry,
    ) -> CallToolResult {
        info!("readWriteQuery against database {}", params.database_name);
        run_query(
            registry,
            &params.database_name,
            &params.aql,
            AccessMode::ReadWrite,
        )
        .await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ReadWriteQueryParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(registry: Arc<ConnectorRegistry>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let registry = registry.clone();
            async move {
                let params: ReadWriteQueryParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &registry).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_tool_metadata() {
        let tool = ReadWriteQueryTool::to_tool();
        assert_eq!(tool.name.as_ref(), "readWriteQuery");

        let schema = serde_json::to_value(tool.input_schema.as_ref()).unwrap();
        let properties = schema.get("properties").unwrap();
        assert!(properties.get("databaseName").is_some());
        assert!(properties.get("aql").is_some());
    }
}
