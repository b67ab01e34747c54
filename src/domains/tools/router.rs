//! Tool Router - builds the rmcp ToolRouter from the catalog.
//!
//! Each tool knows how to create its own route; this module wires them to
//! the shared connector registry. A call with a name outside the routed
//! set fails at the router without reaching any connector.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    ListCollectionsTool, ListDatabasesTool, ReadQueryTool, ReadWriteQueryTool,
};
use crate::arango::ConnectorRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: Arc<ConnectorRegistry>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ReadQueryTool::create_route(registry.clone()))
        .with_route(ReadWriteQueryTool::create_route(registry.clone()))
        .with_route(ListDatabasesTool::create_route(registry.clone()))
        .with_route(ListCollectionsTool::create_route(registry))
}

#[cfg(test)]
mod tests {
    use super::super::registry::tool_names;
    use super::*;
    use crate::arango::ConnectionSettings;
    use reqwest::Url;

    struct TestServer {}

    fn test_registry() -> Arc<ConnectorRegistry> {
        Arc::new(ConnectorRegistry::new(ConnectionSettings {
            base_url: Url::parse("http://localhost:8529").unwrap(),
            credentials: None,
        }))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_registry());
        let tools = router.list_all();
        assert_eq!(tools.len(), 4);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"readQuery"));
        assert!(names.contains(&"readWriteQuery"));
        assert!(names.contains(&"listDatabases"));
        assert!(names.contains(&"listCollections"));
    }

    #[test]
    fn test_router_has_no_unknown_tools() {
        let router: ToolRouter<TestServer> = build_tool_router(test_registry());
        let names: Vec<_> = router.list_all().iter().map(|t| t.name.to_string()).collect();
        assert!(!names.contains(&"deleteEverything".to_string()));
    }

    #[test]
    fn test_catalog_matches_router() {
        // Ensure catalog and router expose the same tools
        let catalog_names = tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(test_registry());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(catalog_names.len(), router_names.len());
        for name in catalog_names {
            assert!(router_names.contains(&name));
        }
    }
}
