//! Connector registry.
//!
//! Memoizes one [`Connector`] per database name: created on first use,
//! returned unchanged thereafter. The registry is an explicitly owned,
//! injectable object so each test can construct a fresh one; the map is
//! append-only and entries live for the process lifetime.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use reqwest::Url;
use tracing::debug;

use super::client::{Connector, Credentials};
use super::error::GatewayError;

/// Connection parameters shared by every handle the registry creates.
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub base_url: Url,
    pub credentials: Option<Credentials>,
}

/// Registry of per-database connector handles.
pub struct ConnectorRegistry {
    settings: ConnectionSettings,
    connectors: RwLock<HashMap<String, Arc<Connector>>>,
}

impl ConnectorRegistry {
    /// Create an empty registry over the given connection settings.
    pub fn new(settings: ConnectionSettings) -> Self {
        Self {
            settings,
            connectors: RwLock::new(HashMap::new()),
        }
    }

    /// Return the handle for `database`, creating it on first use.
    ///
    /// Identity-preserving: repeated calls with the same name return the
    /// same handle. Two callers racing on first creation of the same key
    /// may both build a connector; the first insert wins and the loser's
    /// handle is discarded, which is benign since handles are stateless
    /// beyond routing.
    pub fn get_or_create(&self, database: &str) -> Result<Arc<Connector>, GatewayError> {
        if let Some(connector) = self.connectors.read().get(database) {
            return Ok(connector.clone());
        }

        let built = Arc::new(Connector::new(
            &self.settings.base_url,
            database,
            self.settings.credentials.clone(),
        )?);
        debug!(database, "created connector");

        let mut connectors = self.connectors.write();
        Ok(connectors
            .entry(database.to_string())
            .or_insert(built)
            .clone())
    }
}
