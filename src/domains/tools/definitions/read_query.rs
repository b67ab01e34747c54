//! Read-only query tool definition.

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

/// Parameters for the readQuery tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadQueryParams {
    /// Name of the database to run the query against.
    #[schemars(description = "Name of the database to run the query against")]
    pub database_name: String,

    /// The AQL query to execute.
    #[schemars(description = "The read-only AQL query to execute")]
    pub aql: String,
}

/// Read-only query tool.
///
/// The statement runs inside a transaction that read-locks every collection
/// in the database, so it sees one consistent snapshot.
pub struct ReadQueryTool;

impl ReadQueryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "readQuery";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Run a read-only AQL query against a database. The query executes inside a transaction that read-locks every collection in the database.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(database = %params.database_name))]
    pub async fn execute(params: &ReadQueryParams, registry: &ConnectorRegistry) -> CallToolResult {
        info!("readQuery against database {}", params.database_name);
        run_query(
            registry,
            &params.database_name,
            &params.aql,
            AccessMode::ReadOnly,
        )
        .await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ReadQueryParams>(),
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
                let params: ReadQueryParams =
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
        let tool = ReadQueryTool::to_tool();
        assert_eq!(tool.name.as_ref(), "readQuery");

        let schema = serde_json::to_value(tool.input_schema.as_ref()).unwrap();
        let properties = schema.get("properties").unwrap();
        assert!(properties.get("databaseName").is_some());
        assert!(properties.get("aql").is_some());
    }

    #[test]
    fn test_params_use_camel_case_keys() {
        let params: ReadQueryParams = serde_json::from_value(serde_json::json!({
            "databaseName": "shop",
            "aql": "FOR u IN users RETURN u.email",
        }))
        .unwrap();
        assert_eq!(params.database_name, "shop");
        assert_eq!(params.aql, "FOR u IN users RETURN u.email");
    }

    #[test]
    fn test_params_reject_missing_database() {
        let result = serde_json::from_value::<ReadQueryParams>(serde_json::json!({
            "aql": "RETURN 1",
        }));
        assert!(result.is_err());
    }
}
