//! Configuration for the gateway.
//!
//! The command line supplies the connection contract (base URL, bound
//! database, credentials); the environment can fill in credentials and the
//! log level. Everything is assembled into one [`Config`] at startup.

use clap::Parser;
use reqwest::Url;

use super::error::Error;
use crate::arango::Credentials;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "arangodb-mcp-server",
    version,
    about = "MCP gateway exposing ArangoDB query and document access"
)]
pub struct Cli {
    /// Base URL of the ArangoDB deployment, e.g. http://localhost:8529
    pub url: String,

    /// Database the resource listing is bound to
    #[arg(default_value = "_system")]
    pub database: String,

    /// Username for basic authentication (falls back to ARANGO_USERNAME)
    #[arg(long)]
    pub username: Option<String>,

    /// Password for basic authentication (falls back to ARANGO_PASSWORD)
    #[arg(long)]
    pub password: Option<String>,
}

/// Main configuration structure for the gateway.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Engine connection parameters.
    pub gateway: GatewayConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Engine connection configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the ArangoDB deployment.
    pub base_url: Url,

    /// Database the resource listing is bound to.
    pub database: String,

    /// Credentials shared by every connector the gateway creates.
    pub credentials: Option<Credentials>,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Config {
    /// Assemble the configuration from parsed command-line arguments plus
    /// environment fallbacks (`ARANGO_USERNAME`, `ARANGO_PASSWORD`,
    /// `MCP_LOG_LEVEL`).
    pub fn from_cli(cli: Cli) -> Result<Self, Error> {
        dotenvy::dotenv().ok();

        let base_url = Url::parse(&cli.url)
            .map_err(|err| Error::config(format!("invalid database URL {:?}: {err}", cli.url)))?;

        let username = cli
            .username
            .or_else(|| std::env::var("ARANGO_USERNAME").ok());
        let password = cli
            .password
            .or_else(|| std::env::var("ARANGO_PASSWORD").ok());

        let credentials = username.map(|username| Credentials {
            username,
            password: password.unwrap_or_default(),
        });

        let level = std::env::var("MCP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            server: ServerConfig {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            gateway: GatewayConfig {
                base_url,
                database: cli.database,
                credentials,
            },
            logging: LoggingConfig { level },
        })
    }
}
