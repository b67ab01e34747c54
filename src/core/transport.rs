//! STDIO transport for the MCP server.
//!
//! The gateway speaks MCP over stdin/stdout only; all logging goes to
//! stderr so the protocol stream stays clean.

use rmcp::ServiceExt;
use thiserror::Error;
use tracing::info;

use super::server::McpServer;

/// A specialized Result type for transport operations.
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Errors that can occur in the transport layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The transport could not be initialized.
    #[error("Transport initialization failed: {0}")]
    Init(String),

    /// The transport failed while serving.
    #[error("Transport service error: {0}")]
    Service(String),
}

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the server over stdin/stdout until the client disconnects.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::Init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::Service(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
