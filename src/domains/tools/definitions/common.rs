//! Common utilities shared across the gateway tools.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

use crate::arango::{AccessMode, ConnectorRegistry, executor};

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Render a value as a pretty-printed JSON text payload.
pub fn json_result<T: serde::Serialize>(value: &T) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(err) => error_result(&format!("Failed to serialize result: {err}")),
    }
}

/// Resolve a connector and run one statement in the given access mode.
///
/// Failures come back as error-flagged results carrying the cause text;
/// nothing is retried.
pub async fn run_query(
    registry: &ConnectorRegistry,
    database: &str,
    aql: &str,
    mode: AccessMode,
) -> CallToolResult {
    let connector = match registry.get_or_create(database) {
        Ok(connector) => connector,
        Err(err) => {
            return error_result(&format!(
                "Failed to connect to database \"{database}\": {err}"
            ));
        }
    };

    match executor::execute(&connector, mode, aql).await {
        Ok(rows) => json_result(&rows),
        Err(err) => error_result(&format!("Query failed: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_result_pretty_prints() {
        let result = json_result(&serde_json::json!(["a", "b"]));
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert_eq!(text, "[\n  \"a\",\n  \"b\"\n]");
    }

    #[test]
    fn test_error_result_is_flagged() {
        let result = error_result("something broke");
        assert!(result.is_error.unwrap_or(false));
    }
}
