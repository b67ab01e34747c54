//! Database listing tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use super::common::{error_result, json_result};
use crate::arango::{ConnectorRegistry, SYSTEM_DATABASE};

/// Parameters for the listDatabases tool (none).
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListDatabasesParams {}

/// Database listing tool - names of every database the connection can see.
pub struct ListDatabasesTool;

impl ListDatabasesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "listDatabases";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List the names of all databases visible to the connection.";

    /// Execute the tool logic.
    pub async fn execute(
        _params: &ListDatabasesParams,
        registry: &ConnectorRegistry,
    ) -> CallToolResult {
        info!("listDatabases");

        // The database-listing endpoint is only served from _system.
        let connector = match registry.get_or_create(SYSTEM_DATABASE) {
            Ok(connector) => connector,
            Err(err) => return error_result(&format!("Failed to connect to the engine: {err}")),
        };

        match connector.list_databases().await {
            Ok(names) => json_result(&names),
            Err(err) => error_result(&format!("Failed to list databases: {err}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListDatabasesParams>(),
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
                let params: ListDatabasesParams =
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
        let tool = ListDatabasesTool::to_tool();
        assert_eq!(tool.name.as_ref(), "listDatabases");
        assert!(tool.description.is_some());
    }

    #[test]
    fn test_params_accept_empty_object() {
        let result = serde_json::from_value::<ListDatabasesParams>(serde_json::json!({}));
        assert!(result.is_ok());
    }
}
