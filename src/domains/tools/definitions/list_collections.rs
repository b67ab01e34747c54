//! Collection listing tool definition.

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

use super::common::{error_result, json_result};
use crate::arango::{ConnectorRegistry, list_collections};

/// Parameters for the listCollections tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListCollectionsParams {
    /// Name of the database whose collections to list.
    #[schemars(description = "Name of the database whose collections to list")]
    pub database_name: String,
}

/// Collection listing tool - names of every collection in one database.
pub struct ListCollectionsTool;

impl ListCollectionsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "listCollections";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List the names of all collections in a database.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(database = %params.database_name))]
    pub async fn execute(
        params: &ListCollectionsParams,
        registry: &ConnectorRegistry,
    ) -> CallToolResult {
        info!("listCollections for database {}", params.database_name);

        let connector = match registry.get_or_create(&params.database_name) {
            Ok(connector) => connector,
            Err(err) => {
                return error_result(&format!(
                    "Failed to connect to database \"{}\": {err}",
                    params.database_name
                ));
            }
        };

        match list_collections(&connector).await {
            Ok(records) => {
                let names: Vec<String> = records.into_iter().map(|record| record.name).collect();
                json_result(&names)
            }
            Err(err) => error_result(&format!("Failed to list collections: {err}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListCollectionsParams>(),
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
                let params: ListCollectionsParams =
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
        let tool = ListCollectionsTool::to_tool();
        assert_eq!(tool.name.as_ref(), "listCollections");

        let schema = serde_json::to_value(tool.input_schema.as_ref()).unwrap();
        let properties = schema.get("properties").unwrap();
        assert!(properties.get("databaseName").is_some());
    }
}
