//! The transactional query gateway.
//!
//! Everything that talks to ArangoDB lives here:
//!
//! - `address` - parsing of `arangodb:///db/collection/document` URIs
//! - `client` - the per-database connector over the engine's REST API
//! - `registry` - memoized connector handles, one per database name
//! - `collections` - full-collection-set discovery for lock scope
//! - `executor` - whole-database transactional query execution

pub mod address;
pub mod client;
pub mod collections;
pub mod error;
pub mod executor;
pub mod registry;

pub use address::{AddressError, DocumentAddress};
pub use client::{Connector, Credentials, SYSTEM_DATABASE};
pub use collections::{CollectionRecord, list_collections};
pub use error::GatewayError;
pub use executor::{AccessMode, TransactionScope, execute};
pub use registry::{ConnectionSettings, ConnectorRegistry};
