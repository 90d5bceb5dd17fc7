//! One ingestion cycle: fetch, validate, persist.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use npb_store::{GamesStore, StandingsStore, TeamsStore};
use serpapi_client::SerpApiClient;
use standings_ingest::{
    apply_thumbnails, fetch_both_leagues, fetch_games, validate_standings, IngestError,
    StandingsFetch, ROSTER_SIZE,
};
use team_registry::{Team, TeamRegistry};
use tracing::info;

/// Everything one ingestion run needs. The stores share one pool; the
/// client is reused across runs.
pub struct IngestContext {
    pub client: SerpApiClient,
    pub teams: TeamsStore,
    pub standings: StandingsStore,
    pub games: GamesStore,
}

/// Summary of a completed cycle, reported by the trigger endpoint.
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub date: NaiveDate,
    pub season: i32,
    /// True when the standings source reported preseason and only the
    /// keepalive ran.
    pub preseason: bool,
    pub games_count: usize,
    /// Rows upserted, or rows touched by the keepalive in preseason.
    pub standings_count: usize,
}

/// Startup precondition: the store must hold the exact seeded roster.
/// Callers treat a failure here as fatal for the whole process.
pub async fn ensure_seeded_teams(store: &TeamsStore) -> Result<Vec<Team>> {
    let teams = store.fetch_all().await?;
    if teams.len() != ROSTER_SIZE {
        bail!(
            "expected exactly {ROSTER_SIZE} teams in the store, found {}; \
             seed teams (npb-store/migrations/002_seed_teams.sql) before starting",
            teams.len()
        );
    }
    info!(count = teams.len(), "teams validation passed");
    Ok(teams)
}

/// Run one full ingestion cycle for a date and season.
///
/// Both fetch paths complete before anything is written, and standings
/// are validated before the first write, so a failing run persists
/// nothing. On preseason the standings upsert is replaced by the
/// keepalive touch.
pub async fn run_daily_cycle(
    ctx: &IngestContext,
    date: NaiveDate,
    season: i32,
) -> Result<CycleReport, IngestError> {
    info!(%date, season, "starting daily ingestion cycle");

    // Canonical entities are read once per run and shared by reference.
    let teams = ctx.teams.fetch_all().await?;
    if teams.len() != ROSTER_SIZE {
        return Err(IngestError::SeededTeams { count: teams.len(), expected: ROSTER_SIZE });
    }
    let registry = TeamRegistry::from_teams(teams);

    let (standings_fetch, game_records) = tokio::try_join!(
        fetch_both_leagues(&ctx.client, &registry, season),
        fetch_games(&ctx.client, &registry, date),
    )?;

    let report = match standings_fetch {
        StandingsFetch::Standings(reconciled) => {
            validate_standings(&reconciled.records)?;

            let game_rows = ctx.games.upsert(&game_records).await?;
            let standing_rows = ctx.standings.upsert(&reconciled.records).await?;
            apply_thumbnails(&ctx.teams, &reconciled.thumbnails).await;

            CycleReport {
                date,
                season,
                preseason: false,
                games_count: game_rows.len(),
                standings_count: standing_rows.len(),
            }
        }
        StandingsFetch::Preseason => {
            let game_rows = ctx.games.upsert(&game_records).await?;
            let touched = ctx.standings.touch_season(season).await?;

            CycleReport {
                date,
                season,
                preseason: true,
                games_count: game_rows.len(),
                standings_count: touched as usize,
            }
        }
    };

    info!(
        games = report.games_count,
        standings = report.standings_count,
        preseason = report.preseason,
        "daily ingestion cycle completed"
    );
    Ok(report)
}
