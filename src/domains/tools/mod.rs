//! Tools domain module.
//!
//! The four gateway tools: `readQuery`, `readWriteQuery`, `listDatabases`,
//! and `listCollections`.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder for the stdio transport
//! - `registry.rs` - Central tool catalog

pub mod definitions;
mod registry;
pub mod router;

pub use registry::{get_all_tools, tool_names};
pub use router::build_tool_router;
