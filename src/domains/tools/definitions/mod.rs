//! Tool definitions module.
//!
//! This module exports the four gateway tools.
//! Each tool is defined in its own file for better maintainability.

mod common;
mod list_collections;
mod list_databases;
mod read_query;
mod read_write_query;

pub use list_collections::{ListCollectionsParams, ListCollectionsTool};
pub use list_databases::{ListDatabasesParams, ListDatabasesTool};
pub use read_query::{ReadQueryParams, ReadQueryTool};
pub use read_write_query::{ReadWriteQueryParams, ReadWriteQueryTool};
