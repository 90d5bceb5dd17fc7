use anyhow::{Context, Result};

/// Configuration for the ingest service, resolved from the environment.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// SerpApi API key.
    pub serpapi_key: String,

    /// Postgres connection URL.
    pub database_url: String,

    /// Bind host for the HTTP trigger.
    pub host: String,

    /// Bind port for the HTTP trigger.
    pub port: u16,

    /// Connection pool size.
    pub max_connections: u32,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// `SERPAPI_KEY` and `DATABASE_URL` are required; host/port default
    /// to `0.0.0.0:3000`.
    pub fn from_env() -> Result<Self> {
        let serpapi_key = std::env::var("SERPAPI_KEY")
            .context("SERPAPI_KEY environment variable is required")?;
        let database_url = std::env::var("DATABASE_URL")
            .context("DATABASE_URL environment variable is required")?;

        let host = std::env::var("INGEST_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("INGEST_PORT") {
            Ok(raw) => raw.parse::<u16>().context("INGEST_PORT must be a port number")?,
            Err(_) => 3000,
        };
        let max_connections = match std::env::var("INGEST_DB_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse::<u32>()
                .context("INGEST_DB_MAX_CONNECTIONS must be a positive integer")?,
            Err(_) => 10,
        };

        Ok(Self { serpapi_key, database_url, host, port, max_connections })
    }
}
