//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the gateway:
//! configuration, error handling, the MCP server handler, and the stdio
//! transport.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::{Cli, Config};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{StdioTransport, TransportError};
