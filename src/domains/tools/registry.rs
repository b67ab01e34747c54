//! Tool catalog - the single source of truth for the four gateway tools.
//!
//! Any name outside this catalog is rejected by the router before any
//! connector is touched.

use rmcp::model::Tool;

use super::definitions::{
    ListCollectionsTool, ListDatabasesTool, ReadQueryTool, ReadWriteQueryTool,
};

/// Get all tool names.
pub fn tool_names() -> Vec<&'static str> {
    vec![
        ReadQueryTool::NAME,
        ReadWriteQueryTool::NAME,
        ListDatabasesTool::NAME,
        ListCollectionsTool::NAME,
    ]
}

/// Get all tools as Tool models (metadata).
pub fn get_all_tools() -> Vec<Tool> {
    vec![
        ReadQueryTool::to_tool(),
        ReadWriteQueryTool::to_tool(),
        ListDatabasesTool::to_tool(),
        ListCollectionsTool::to_tool(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names() {
        let names = tool_names();
        assert_eq!(names.len(), 4);
        assert!(names.contains(&"readQuery"));
        assert!(names.contains(&"readWriteQuery"));
        assert!(names.contains(&"listDatabases"));
        assert!(names.contains(&"listCollections"));
    }

    #[test]
    fn test_catalog_rejects_unregistered_names() {
        assert!(!tool_names().contains(&"deleteEverything"));
        assert!(!tool_names().contains(&"query"));
    }

    #[test]
    fn test_catalog_tools_match_names() {
        let tools = get_all_tools();
        let names = tool_names();
        assert_eq!(tools.len(), names.len());
        for tool in tools {
            assert!(names.contains(&tool.name.as_ref()));
        }
    }
}
