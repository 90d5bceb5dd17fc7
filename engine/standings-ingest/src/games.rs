//! Games ingestion.
//!
//! Structurally similar to the standings path but deliberately more
//! tolerant: no league partitioning, a single query, and unmappable or
//! sparse rows are skipped with a warning instead of failing the run,
//! because day-to-day absence of games is a normal condition.

use crate::error::IngestError;
use chrono::{Datelike, NaiveDate};
use npb_store::{GameRecord, GameStatus};
use serpapi_client::{parse_games, ParsedGame, SerpApiClient};
use std::collections::HashSet;
use team_registry::TeamRegistry;
use tracing::{info, warn};

/// Build the games query for a run date.
pub fn games_query(date: NaiveDate) -> String {
    format!("NPB games {}", date.format("%B %-d, %Y"))
}

/// Fetch and reconcile the day's games. Transport and upstream API
/// failures propagate; everything row-level is tolerated.
pub async fn fetch_games(
    client: &SerpApiClient,
    registry: &TeamRegistry,
    date: NaiveDate,
) -> Result<Vec<GameRecord>, IngestError> {
    let query = games_query(date);
    info!(%query, "fetching games");

    let response = client.search(&query).await?;
    let parsed = parse_games(&response, &query);
    let records = reconcile_games(parsed, registry, date);

    info!(count = records.len(), "reconciled game records");
    Ok(records)
}

/// Map parsed game rows onto canonical ids. Rows whose team names do
/// not resolve are dropped with a warning; duplicate natural keys keep
/// the first occurrence (the key omits start time, so a doubleheader
/// collapses here - known limitation).
fn reconcile_games(
    parsed: Vec<ParsedGame>,
    registry: &TeamRegistry,
    run_date: NaiveDate,
) -> Vec<GameRecord> {
    let mut seen: HashSet<(NaiveDate, String, String)> = HashSet::new();
    let mut records = Vec::new();

    for game in parsed {
        let home = match registry.resolve(&game.home_team_name) {
            Ok(team) => team,
            Err(error) => {
                warn!(%error, "skipping game: unresolvable home team");
                continue;
            }
        };
        let away = match registry.resolve(&game.away_team_name) {
            Ok(team) => team,
            Err(error) => {
                warn!(%error, "skipping game: unresolvable away team");
                continue;
            }
        };

        let date = resolve_game_date(game.date.as_deref(), run_date);

        let key = (date, home.id.as_str().to_string(), away.id.as_str().to_string());
        if !seen.insert(key) {
            warn!(
                %date, home = %home.id, away = %away.id,
                "dropping game with duplicate natural key (doubleheader?)"
            );
            continue;
        }

        records.push(GameRecord {
            date,
            home_team_id: home.id.clone(),
            away_team_id: away.id.clone(),
            // The search payload does not reliably carry scores; they
            // stay NULL until a richer source exists.
            home_score: None,
            away_score: None,
            status: GameStatus::from_upstream(game.status.as_deref()),
        });
    }

    records
}

const DATE_FORMATS: [&str; 2] = ["%b %d, %Y", "%B %d, %Y"];

/// Resolve upstream date text ("Jan 25, 2026" or "Mar 27") to a date.
/// Text without a year is assumed to be in the run date's year;
/// unparseable text falls back to the run date.
fn resolve_game_date(raw: Option<&str>, run_date: NaiveDate) -> NaiveDate {
    let text = match raw.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => return run_date,
    };

    let has_year = text
        .as_bytes()
        .windows(4)
        .any(|window| window.iter().all(u8::is_ascii_digit));

    if has_year {
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(text, format) {
                return date;
            }
        }
    } else {
        let with_year = format!("{}, {}", text, run_date.year());
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(&with_year, format) {
                return date;
            }
        }
    }

    run_date
}
