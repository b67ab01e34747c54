//! Resource-specific error types.

use thiserror::Error;

use crate::arango::{AddressError, GatewayError};

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource URI does not match the document address grammar.
    #[error("invalid resource URI: {0}")]
    InvalidUri(#[from] AddressError),

    /// The gateway failed while listing collections or fetching a document.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The fetched document could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
