//! Transactional query execution.
//!
//! Every client-submitted query runs inside a stream transaction whose lock
//! scope covers *all* collections of the target database, read-locked
//! always and write-locked only in read-write mode. The gateway never
//! parses the statement to narrow the touch-set; locking the whole database
//! trades concurrency for guaranteed-correct isolation, which fits a
//! low-throughput tool-calling gateway.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::client::Connector;
use super::collections::{self, CollectionRecord};
use super::error::GatewayError;

/// Declared access mode for one query transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    ReadOnly,
    ReadWrite,
}

/// Lock scope declared when a transaction is opened.
///
/// Serializes into the engine's `collections` begin-body. `read` always
/// equals the full collection set discovered at open time; `write` is empty
/// in read-only mode and equal to the full set otherwise. Partial locking
/// is not supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionScope {
    pub read: Vec<String>,
    pub write: Vec<String>,
}

impl TransactionScope {
    /// Build the scope for `mode` over a discovered collection set.
    pub fn for_mode(mode: AccessMode, collections: &[CollectionRecord]) -> Self {
        let names: Vec<String> = collections.iter().map(|c| c.name.clone()).collect();
        let write = match mode {
            AccessMode::ReadOnly => Vec::new(),
            AccessMode::ReadWrite => names.clone(),
        };

        Self { read: names, write }
    }
}

/// Execute one AQL statement inside a whole-database transaction.
///
/// Enumerates the database's collections, opens a transaction scoped to all
/// of them at the declared access mode, runs exactly one statement, and
/// returns the fully materialized result rows. Commits on success; aborts
/// and propagates the engine's error verbatim on failure. No retries.
#[instrument(skip(connector, statement), fields(database = connector.database()))]
pub async fn execute(
    connector: &Connector,
    mode: AccessMode,
    statement: &str,
) -> Result<Vec<Value>, GatewayError> {
    let collections = collections::list_collections(connector).await?;
    let scope = TransactionScope::for_mode(mode, &collections);

    let transaction = connector.begin_transaction(&scope).await?;
    debug!(transaction = %transaction, ?mode, "opened transaction");

    match connector.run_query(statement, Some(&transaction)).await {
        Ok(rows) => {
            connector.commit_transaction(&transaction).await?;
            debug!(transaction = %transaction, rows = rows.len(), "committed transaction");
            Ok(rows)
        }
        Err(err) => {
            if let Err(abort_err) = connector.abort_transaction(&transaction).await {
                warn!(transaction = %transaction, "failed to abort transaction: {abort_err}");
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection_set(names: &[&str]) -> Vec<CollectionRecord> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| CollectionRecord {
                id: format!("c/{i}"),
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_read_only_scope_locks_everything_for_read() {
        let collections = collection_set(&["A", "B", "C"]);

        let scope = TransactionScope::for_mode(AccessMode::ReadOnly, &collections);
        assert_eq!(scope.read, vec!["A", "B", "C"]);
        assert!(scope.write.is_empty());
    }

    #[test]
    fn test_read_write_scope_locks_everything_for_both() {
        let collections = collection_set(&["A", "B", "C"]);

        let scope = TransactionScope::for_mode(AccessMode::ReadWrite, &collections);
        assert_eq!(scope.read, vec!["A", "B", "C"]);
        assert_eq!(scope.write, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_scope_over_empty_database() {
        let scope = TransactionScope::for_mode(AccessMode::ReadWrite, &[]);
        assert!(scope.read.is_empty());
        assert!(scope.write.is_empty());
    }

    #[test]
    fn test_scope_begin_body_shape() {
        let collections = collection_set(&["users", "products"]);
        let scope = TransactionScope::for_mode(AccessMode::ReadOnly, &collections);

        let body = serde_json::json!({ "collections": scope });
        assert_eq!(
            body,
            serde_json::json!({
                "collections": {
                    "read": ["users", "products"],
                    "write": [],
                }
            })
        );
    }
}
