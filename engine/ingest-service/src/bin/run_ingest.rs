//! One-shot ingestion runner.
//!
//! Drives the same daily cycle as the HTTP trigger, once, from the
//! command line. Safe to re-run: all writes are natural-key upserts.
//!
//! Usage: run-ingest [--date=YYYY-MM-DD] [--season=YYYY]

use anyhow::{bail, Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use ingest_service::{ensure_seeded_teams, run_daily_cycle, IngestContext, ServiceConfig};
use npb_store::{GamesStore, StandingsStore, TeamsStore};
use serpapi_client::SerpApiClient;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

struct RunArgs {
    date: NaiveDate,
    season: i32,
}

fn parse_args() -> Result<RunArgs> {
    let today = Local::now().date_naive();
    let mut date = today;
    let mut season = today.year();

    for arg in std::env::args().skip(1) {
        if let Some(raw) = arg.strip_prefix("--date=") {
            date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .with_context(|| format!("invalid date {raw:?}, expected YYYY-MM-DD"))?;
        } else if let Some(raw) = arg.strip_prefix("--season=") {
            season = raw
                .parse::<i32>()
                .with_context(|| format!("invalid season {raw:?}, expected a year"))?;
        } else {
            bail!("unknown argument {arg:?}; usage: run-ingest [--date=YYYY-MM-DD] [--season=YYYY]");
        }
    }

    Ok(RunArgs { date, season })
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = parse_args()?;
    let config = ServiceConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    let teams = TeamsStore::new(pool.clone());
    ensure_seeded_teams(&teams).await?;

    let ctx = IngestContext {
        client: SerpApiClient::new(config.serpapi_key.clone())?,
        teams,
        standings: StandingsStore::new(pool.clone()),
        games: GamesStore::new(pool),
    };

    let report = run_daily_cycle(&ctx, args.date, args.season).await?;

    info!(
        date = %report.date,
        season = report.season,
        preseason = report.preseason,
        games = report.games_count,
        standings = report.standings_count,
        "ingestion run completed"
    );

    Ok(())
}
