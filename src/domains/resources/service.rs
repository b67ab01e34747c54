//! Resource service implementation.
//!
//! The resource surface is dynamic: each collection of the bound database
//! is exposed as one addressable resource, and single documents are read
//! through `arangodb:///database/collection/documentId` addresses.

use std::sync::Arc;

use reqwest::Url;
use rmcp::model::{
    AnnotateAble, RawResource, RawResourceTemplate, ReadResourceResult, Resource,
    ResourceContents, ResourceTemplate,
};
use tracing::{debug, info};

use super::error::ResourceError;
use crate::arango::{self, Connector, ConnectorRegistry, list_collections};
use crate::core::config::GatewayConfig;

/// Service for listing collection resources and reading documents.
pub struct ResourceService {
    /// Engine connection parameters.
    gateway: GatewayConfig,

    /// Shared connector registry, used for collection listings.
    registry: Arc<ConnectorRegistry>,
}

impl ResourceService {
    /// Create a new ResourceService over the given connection parameters.
    pub fn new(gateway: GatewayConfig, registry: Arc<ConnectorRegistry>) -> Self {
        info!("Initializing ResourceService");
        Self { gateway, registry }
    }

    /// List one resource per collection in the bound database.
    pub async fn list_resources(&self) -> Result<Vec<Resource>, ResourceError> {
        let connector = self.registry.get_or_create(&self.gateway.database)?;
        let collections = list_collections(&connector).await?;

        Ok(collections
            .into_iter()
            .map(|collection| document_endpoint_resource(&self.gateway.base_url, &collection.name))
            .collect())
    }

    /// List the static document address template.
    pub fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        vec![
            RawResourceTemplate {
                uri_template: "arangodb:///{database}/{collection}/{documentID}".to_string(),
                name: "ArangoDB document".to_string(),
                title: None,
                description: Some("A document in an ArangoDB collection".to_string()),
                mime_type: Some("application/json".to_string()),
            }
            .no_annotation(),
        ]
    }

    /// Read one document by its `arangodb:///` address.
    ///
    /// This path uses a fresh connector bound to the address's database;
    /// the shared registry is not consulted here.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let address = arango::address::parse(uri)?;
        debug!(
            database = %address.database,
            collection = %address.collection,
            "resolved document address"
        );

        let connector = Connector::new(
            &self.gateway.base_url,
            &address.database,
            self.gateway.credentials.clone(),
        )?;
        let document = connector
            .fetch_document(&address.collection, &address.document_id)
            .await?;

        let text = serde_json::to_string(&document)?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}

/// Build the resource entry advertising one collection's document endpoint.
fn document_endpoint_resource(base_url: &Url, collection_name: &str) -> Resource {
    let mut raw = RawResource::new(
        format!(
            "{}/_api/document/{}",
            base_url.as_str().trim_end_matches('/'),
            collection_name
        ),
        format!("\"{}\" http endpoint", collection_name),
    );
    raw.mime_type = Some("application/json".to_string());
    raw.no_annotation()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> ResourceService {
        ResourceService::new(
            GatewayConfig {
                base_url: Url::parse("http://localhost:8529").unwrap(),
                database: "shop".to_string(),
                credentials: None,
            },
            Arc::new(ConnectorRegistry::new(crate::arango::ConnectionSettings {
                base_url: Url::parse("http://localhost:8529").unwrap(),
                credentials: None,
            })),
        )
    }

    #[test]
    fn test_document_endpoint_resource() {
        let base = Url::parse("http://localhost:8529").unwrap();
        let resource = document_endpoint_resource(&base, "users");

        assert_eq!(
            resource.raw.uri,
            "http://localhost:8529/_api/document/users"
        );
        assert_eq!(resource.raw.name, "\"users\" http endpoint");
        assert_eq!(resource.raw.mime_type.as_deref(), Some("application/json"));
    }

    #[test]
    fn test_resource_template_grammar() {
        let templates = test_service().list_resource_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(
            templates[0].raw.uri_template,
            "arangodb:///{database}/{collection}/{documentID}"
        );
        assert_eq!(templates[0].raw.mime_type.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn test_read_resource_rejects_malformed_uri() {
        let service = test_service();

        let err = service.read_resource("http://not-an-address").await.unwrap_err();
        assert!(matches!(err, ResourceError::InvalidUri(_)));
    }
}
