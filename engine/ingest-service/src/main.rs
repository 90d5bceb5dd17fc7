use anyhow::{Context, Result};
use ingest_service::{create_routes, ensure_seeded_teams, IngestContext, ServiceConfig};
use npb_store::{GamesStore, StandingsStore, TeamsStore};
use serpapi_client::SerpApiClient;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    info!("Starting NPB Ingest Service");

    let config = ServiceConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    let teams = TeamsStore::new(pool.clone());

    // Refuse to start at all when the seeded roster is incomplete; a
    // per-request failure would hide a deployment problem.
    ensure_seeded_teams(&teams).await?;

    let ctx = Arc::new(IngestContext {
        client: SerpApiClient::new(config.serpapi_key.clone())?,
        teams,
        standings: StandingsStore::new(pool.clone()),
        games: GamesStore::new(pool),
    });

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid INGEST_HOST/INGEST_PORT")?;

    info!(%addr, "listening");
    warp::serve(create_routes(ctx)).run(addr).await;

    Ok(())
}
