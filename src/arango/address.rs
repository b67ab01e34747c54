//! Document address parsing.
//!
//! MCP clients address a single document with a URI of the form
//! `arangodb:///databaseName/collectionName/documentId`. This module
//! validates that grammar and nothing more; the component strings are
//! handed to the engine as-is and rely on its own identifier validation.

use thiserror::Error;

/// Fixed scheme prefix every document address must carry.
pub const ADDRESS_PREFIX: &str = "arangodb:///";

/// A parsed document address: one database, one collection, one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentAddress {
    pub database: String,
    pub collection: String,
    pub document_id: String,
}

/// Ways a document address string can be malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must start with \"arangodb:///\"")]
    BadScheme,

    #[error(
        "address must have exactly three components \
         (databaseName/collectionName/documentId), found {found}"
    )]
    ComponentCount { found: usize },

    #[error("database name cannot be empty")]
    EmptyDatabase,

    #[error("collection name cannot be empty")]
    EmptyCollection,

    #[error("document id cannot be empty")]
    EmptyDocumentId,
}

/// Parse and validate a document address string.
///
/// Pure function: no I/O, no allocation beyond the returned address.
pub fn parse(uri: &str) -> Result<DocumentAddress, AddressError> {
    let Some(path) = uri.strip_prefix(ADDRESS_PREFIX) else {
        return Err(AddressError::BadScheme);
    };

    let components: Vec<&str> = path.split('/').collect();
    if components.len() != 3 {
        return Err(AddressError::ComponentCount {
            found: components.len(),
        });
    }

    let (database, collection, document_id) = (components[0], components[1], components[2]);

    if database.is_empty() {
        return Err(AddressError::EmptyDatabase);
    }
    if collection.is_empty() {
        return Err(AddressError::EmptyCollection);
    }
    if document_id.is_empty() {
        return Err(AddressError::EmptyDocumentId);
    }

    Ok(DocumentAddress {
        database: database.to_string(),
        collection: collection.to_string(),
        document_id: document_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed() {
        let address = parse("arangodb:///shop/users/1234").unwrap();
        assert_eq!(address.database, "shop");
        assert_eq!(address.collection, "users");
        assert_eq!(address.document_id, "1234");
    }

    #[test]
    fn test_parse_preserves_unusual_characters() {
        // No sanitization happens at this layer.
        let address = parse("arangodb:///db/coll/key:with weird=chars").unwrap();
        assert_eq!(address.document_id, "key:with weird=chars");
    }

    #[test]
    fn test_reject_bad_scheme() {
        assert_eq!(parse("http://x"), Err(AddressError::BadScheme));
        assert_eq!(parse("arangodb://a/b/c"), Err(AddressError::BadScheme));
        assert_eq!(parse(""), Err(AddressError::BadScheme));
    }

    #[test]
    fn test_reject_too_few_components() {
        assert_eq!(
            parse("arangodb:///a/b"),
            Err(AddressError::ComponentCount { found: 2 })
        );
    }

    #[test]
    fn test_reject_too_many_components() {
        assert_eq!(
            parse("arangodb:///a/b/c/d"),
            Err(AddressError::ComponentCount { found: 4 })
        );
    }

    #[test]
    fn test_reject_bare_prefix() {
        // "arangodb:///" leaves an empty path, which splits into a single
        // empty component rather than three.
        assert!(matches!(
            parse("arangodb:///"),
            Err(AddressError::ComponentCount { .. })
        ));
    }

    #[test]
    fn test_reject_empty_components() {
        assert_eq!(parse("arangodb:////b/c"), Err(AddressError::EmptyDatabase));
        assert_eq!(parse("arangodb:///a//c"), Err(AddressError::EmptyCollection));
        assert_eq!(parse("arangodb:///a/b/"), Err(AddressError::EmptyDocumentId));
    }
}
