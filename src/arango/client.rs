//! ArangoDB connector.
//!
//! A [`Connector`] is a reusable HTTP session bound to one database and one
//! set of credentials. It speaks the engine's REST API directly: the cursor
//! endpoint for queries, the stream-transaction endpoints for lock scope,
//! and the document endpoint for single-document reads.

use reqwest::{Method, StatusCode, Url};
use serde::Deserialize;
use serde_json::{Value, json};

use super::error::GatewayError;
use super::executor::TransactionScope;

/// Header carrying the stream-transaction id on in-transaction requests.
const TRANSACTION_HEADER: &str = "x-arango-trx-id";

/// The engine's system database, required for deployment-wide endpoints.
pub const SYSTEM_DATABASE: &str = "_system";

/// Basic-auth credentials for engine connections.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Custom Debug implementation to redact the password from logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A client session bound to one database.
///
/// Cheap to construct and stateless beyond routing; the shared registry
/// hands out one per database name for the process lifetime.
#[derive(Debug, Clone)]
pub struct Connector {
    http: reqwest::Client,
    api_root: String,
    database: String,
    credentials: Option<Credentials>,
}

impl Connector {
    /// Create a connector bound to `database` at `base_url`.
    pub fn new(
        base_url: &Url,
        database: &str,
        credentials: Option<Credentials>,
    ) -> Result<Self, GatewayError> {
        // No request timeout: a hung engine call is allowed to wait forever.
        let http = reqwest::Client::builder().build()?;

        let api_root = format!(
            "{}/_db/{}/_api",
            base_url.as_str().trim_end_matches('/'),
            database
        );

        Ok(Self {
            http,
            api_root,
            database: database.to_string(),
            credentials,
        })
    }

    /// Name of the database this connector is bound to.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Run one AQL statement through the cursor API and materialize every
    /// batch into a single row vector.
    ///
    /// With `transaction` set, the statement executes inside that stream
    /// transaction's snapshot and lock context.
    pub async fn run_query(
        &self,
        statement: &str,
        transaction: Option<&str>,
    ) -> Result<Vec<Value>, GatewayError> {
        let url = format!("{}/cursor", self.api_root);
        let mut request = self
            .request(Method::POST, &url)
            .json(&json!({ "query": statement }));
        if let Some(id) = transaction {
            request = request.header(TRANSACTION_HEADER, id);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(engine_error(response).await);
        }

        let mut page: CursorPage = response.json().await?;
        let mut rows = std::mem::take(&mut page.result);

        while page.has_more {
            let Some(cursor_id) = page.id.as_deref() else {
                break;
            };
            let url = format!("{}/cursor/{}", self.api_root, cursor_id);
            let mut request = self.request(Method::POST, &url);
            if let Some(id) = transaction {
                request = request.header(TRANSACTION_HEADER, id);
            }

            let response = request.send().await?;
            if !response.status().is_success() {
                return Err(engine_error(response).await);
            }

            page = response.json().await?;
            rows.extend(std::mem::take(&mut page.result));
        }

        Ok(rows)
    }

    /// Open a stream transaction with the given lock scope.
    ///
    /// Returns the engine-assigned transaction id.
    pub async fn begin_transaction(
        &self,
        scope: &TransactionScope,
    ) -> Result<String, GatewayError> {
        let url = format!("{}/transaction/begin", self.api_root);
        let response = self
            .request(Method::POST, &url)
            .json(&json!({ "collections": scope }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(engine_error(response).await);
        }

        let begun: TransactionBegun = response.json().await?;
        Ok(begun.result.id)
    }

    /// Commit a stream transaction.
    pub async fn commit_transaction(&self, id: &str) -> Result<(), GatewayError> {
        let url = format!("{}/transaction/{}", self.api_root, id);
        let response = self.request(Method::PUT, &url).send().await?;
        if !response.status().is_success() {
            return Err(engine_error(response).await);
        }
        Ok(())
    }

    /// Abort a stream transaction.
    pub async fn abort_transaction(&self, id: &str) -> Result<(), GatewayError> {
        let url = format!("{}/transaction/{}", self.api_root, id);
        let response = self.request(Method::DELETE, &url).send().await?;
        if !response.status().is_success() {
            return Err(engine_error(response).await);
        }
        Ok(())
    }

    /// Fetch exactly one document by collection and document id.
    pub async fn fetch_document(
        &self,
        collection: &str,
        document_id: &str,
    ) -> Result<Value, GatewayError> {
        let url = format!(
            "{}/{}",
            self.api_root,
            document_locator(collection, document_id)
        );
        let response = self.request(Method::GET, &url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(GatewayError::DocumentNotFound {
                collection: collection.to_string(),
                document_id: document_id.to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(engine_error(response).await);
        }

        Ok(response.json().await?)
    }

    /// List the names of all databases visible to this connection.
    ///
    /// The engine serves this endpoint from the `_system` database only.
    pub async fn list_databases(&self) -> Result<Vec<String>, GatewayError> {
        let url = format!("{}/database", self.api_root);
        let response = self.request(Method::GET, &url).send().await?;
        if !response.status().is_success() {
            return Err(engine_error(response).await);
        }

        let list: DatabaseList = response.json().await?;
        Ok(list.result)
    }

    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, url);
        if let Some(credentials) = &self.credentials {
            builder = builder.basic_auth(&credentials.username, Some(&credentials.password));
        }
        builder
    }
}

/// Build the engine path for one document.
///
/// Identifier components are passed through unescaped; the engine's own
/// name validation is the only guard. Any future escaping happens here.
pub fn document_locator(collection: &str, document_id: &str) -> String {
    format!("document/{}/{}", collection, document_id)
}

// ============================================================================
// Wire types
// ============================================================================

/// One batch of a cursor response.
#[derive(Debug, Deserialize)]
struct CursorPage {
    result: Vec<Value>,

    #[serde(default, rename = "hasMore")]
    has_more: bool,

    #[serde(default)]
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TransactionBegun {
    result: TransactionStatus,
}

#[derive(Debug, Deserialize)]
struct TransactionStatus {
    id: String,
}

#[derive(Debug, Deserialize)]
struct DatabaseList {
    result: Vec<String>,
}

/// Error body the engine attaches to failed requests.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default, rename = "errorMessage")]
    error_message: Option<String>,

    #[serde(default, rename = "errorNum")]
    error_num: Option<i64>,
}

/// Turn a non-success response into an engine error, preserving the
/// engine's own message verbatim.
async fn engine_error(response: reqwest::Response) -> GatewayError {
    let status = response.status().as_u16();
    match response.bytes().await {
        Ok(body) => decode_engine_error(status, &body),
        Err(err) => GatewayError::Transport(err),
    }
}

fn decode_engine_error(status: u16, body: &[u8]) -> GatewayError {
    let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();

    let message = match parsed.error_message {
        Some(message) => message,
        None => {
            let raw = String::from_utf8_lossy(body);
            let raw = raw.trim();
            if raw.is_empty() {
                format!("HTTP {status}")
            } else {
                raw.to_string()
            }
        }
    };

    GatewayError::Engine {
        status,
        error_num: parsed.error_num.unwrap_or(0),
        message,
    }
}
