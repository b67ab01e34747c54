//! Collection enumeration.
//!
//! Lock scope for query transactions is always the full collection set of
//! the target database, so every operation that needs scope asks the engine
//! for a fresh list. Results are never cached: collections can be created
//! or dropped between calls, and a stale set would silently mis-scope the
//! next transaction.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::client::Connector;
use super::error::GatewayError;

/// The engine's built-in collection-listing function, run as a query.
const COLLECTIONS_QUERY: &str = "RETURN COLLECTIONS()";

/// One collection as reported by `COLLECTIONS()`.
///
/// Strict shape: a record with missing or extra fields rejects the whole
/// enumeration, never just the record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionRecord {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,
}

/// List every collection in the connector's database.
///
/// The raw result is a sequence of sequences (one outer entry per query
/// execution); all inner elements are flattened into one ordered sequence,
/// preserving engine order.
pub async fn list_collections(connector: &Connector) -> Result<Vec<CollectionRecord>, GatewayError> {
    let rows = connector.run_query(COLLECTIONS_QUERY, None).await?;
    let records = parse_collection_rows(rows)?;
    debug!(
        database = connector.database(),
        count = records.len(),
        "enumerated collections"
    );
    Ok(records)
}

fn parse_collection_rows(rows: Vec<Value>) -> Result<Vec<CollectionRecord>, GatewayError> {
    let mut records = Vec::new();

    for row in rows {
        let Value::Array(entries) = row else {
            return Err(GatewayError::invalid_collection_record(format!(
                "expected an array of collection records, got: {row}"
            )));
        };

        for entry in entries {
            let record = serde_json::from_value(entry.clone()).map_err(|err| {
                GatewayError::invalid_collection_record(format!("{entry}: {err}"))
            })?;
            records.push(record);
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flattening_preserves_order() {
        let rows = vec![
            json!([{ "_id": "c/1", "name": "users" }]),
            json!([{ "_id": "c/2", "name": "products" }]),
        ];

        let records = parse_collection_rows(rows).unwrap();
        assert_eq!(
            records,
            vec![
                CollectionRecord {
                    id: "c/1".to_string(),
                    name: "users".to_string(),
                },
                CollectionRecord {
                    id: "c/2".to_string(),
                    name: "products".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_single_outer_entry_with_many_collections() {
        let rows = vec![json!([
            { "_id": "c/1", "name": "users" },
            { "_id": "c/2", "name": "products" },
            { "_id": "c/3", "name": "orders" },
        ])];

        let records = parse_collection_rows(rows).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["users", "products", "orders"]);
    }

    #[test]
    fn test_empty_result() {
        assert!(parse_collection_rows(vec![]).unwrap().is_empty());
        assert!(parse_collection_rows(vec![json!([])]).unwrap().is_empty());
    }

    #[test]
    fn test_extra_field_rejects_whole_enumeration() {
        let rows = vec![json!([
            { "_id": "c/1", "name": "users", "extra": true },
            { "_id": "c/2", "name": "products" },
        ])];

        let err = parse_collection_rows(rows).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidCollectionRecord(_)));
    }

    #[test]
    fn test_missing_field_rejects_whole_enumeration() {
        let rows = vec![json!([{ "name": "users" }])];

        let err = parse_collection_rows(rows).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidCollectionRecord(_)));
    }

    #[test]
    fn test_non_array_outer_entry_is_rejected() {
        let rows = vec![json!({ "_id": "c/1", "name": "users" })];

        let err = parse_collection_rows(rows).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidCollectionRecord(_)));
    }
}
