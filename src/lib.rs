//! ArangoDB MCP gateway library.
//!
//! This crate exposes an ArangoDB deployment's query surface over the Model
//! Context Protocol: a small set of addressable resources (collections and
//! documents) and invocable tools (AQL queries, database and collection
//! listings). Every client-submitted query runs inside a transaction scoped
//! to the whole target database.
//!
//! # Architecture
//!
//! - **arango**: the transactional query gateway - address parsing, the
//!   connector registry, collection enumeration, and query execution
//! - **core**: configuration, error handling, the MCP server handler, and
//!   the stdio transport
//! - **domains**: the protocol surface - tools and resources
//!
//! # Example
//!
//! ```rust,no_run
//! use arangodb_mcp_server::core::{Cli, Config, McpServer, StdioTransport};
//! use clap::Parser;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_cli(Cli::parse())?;
//!     let server = McpServer::new(config);
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod arango;
pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
