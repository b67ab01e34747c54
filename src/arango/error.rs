//! Gateway-specific error types.

use thiserror::Error;

use super::address::AddressError;

/// Errors that can occur while talking to ArangoDB through the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A document address string did not match the expected grammar.
    #[error("malformed document address: {0}")]
    MalformedAddress(#[from] AddressError),

    /// Collection enumeration returned a record that does not match the
    /// expected `{_id, name}` shape. The whole enumeration fails.
    #[error("invalid collection record: {0}")]
    InvalidCollectionRecord(String),

    /// The HTTP request to the engine could not be completed.
    #[error("database request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The engine reported an error. The engine's own message is passed
    /// through verbatim.
    #[error("engine error {error_num} (HTTP {status}): {message}")]
    Engine {
        status: u16,
        error_num: i64,
        message: String,
    },

    /// An address-addressed document does not exist.
    #[error("document not found: {collection}/{document_id}")]
    DocumentNotFound {
        collection: String,
        document_id: String,
    },
}

impl GatewayError {
    /// Create a new invalid-collection-record error.
    pub fn invalid_collection_record(detail: impl Into<String>) -> Self {
        Self::InvalidCollectionRecord(detail.into())
    }
}
