//! League-anchored standings fetching and reconciliation.
//!
//! Generic league-only queries are unreliable upstream; anchoring the
//! query to one well-known team per league ("Yomiuri Giants standings
//! 2026") reliably returns the whole league table. The anchor map is
//! immutable configuration.

use crate::error::IngestError;
use npb_store::{StandingRecord, TeamsStore};
use serpapi_client::{parse_standings, ParsedStanding, SerpApiClient, StandingsOutcome};
use std::collections::HashSet;
use team_registry::{League, TeamId, TeamRegistry};
use tracing::{info, warn};

/// Exact number of teams per league.
pub const LEAGUE_SIZE: usize = 6;

/// Exact number of teams across both leagues.
pub const ROSTER_SIZE: usize = 12;

/// Flagship anchor team per league.
fn anchor_team(league: League) -> &'static str {
    match league {
        League::Central => "Yomiuri Giants",
        League::Pacific => "Fukuoka SoftBank Hawks",
    }
}

/// Build the anchored query for one league and season.
pub fn anchored_query(league: League, season: i32) -> String {
    format!("{} standings {}", anchor_team(league), season)
}

/// Reconciled output of one or both league fetches, plus any thumbnail
/// URLs seen along the way (side-channel data, outside every invariant).
#[derive(Debug, Default)]
pub struct ReconciledStandings {
    pub records: Vec<StandingRecord>,
    pub thumbnails: Vec<(TeamId, String)>,
}

/// Outcome of fetching a single league.
#[derive(Debug)]
pub enum LeagueFetch {
    Standings(ReconciledStandings),
    Preseason,
}

/// Outcome of fetching and merging both leagues.
#[derive(Debug)]
pub enum StandingsFetch {
    Standings(ReconciledStandings),
    Preseason,
}

/// Fetch and reconcile one league's standings.
pub async fn fetch_league(
    client: &SerpApiClient,
    registry: &TeamRegistry,
    season: i32,
    league: League,
) -> Result<LeagueFetch, IngestError> {
    let query = anchored_query(league, season);
    info!(%query, %league, "fetching league standings");

    let response = client.search(&query).await?;
    match parse_standings(&response, &query)? {
        StandingsOutcome::Preseason => {
            info!(%league, season, "standings response carries no statistics yet");
            Ok(LeagueFetch::Preseason)
        }
        StandingsOutcome::Rows(rows) => {
            let reconciled = reconcile_league(rows, registry, season, league, &query)?;
            info!(%league, count = reconciled.records.len(), "reconciled league standings");
            Ok(LeagueFetch::Standings(reconciled))
        }
    }
}

/// Map parsed rows onto canonical ids and enforce the per-league
/// invariants. Unresolved names are batched into one error; a team from
/// the wrong league fails immediately.
fn reconcile_league(
    rows: Vec<ParsedStanding>,
    registry: &TeamRegistry,
    season: i32,
    league: League,
    query: &str,
) -> Result<ReconciledStandings, IngestError> {
    let mut reconciled = ReconciledStandings::default();
    let mut unresolved: Vec<String> = Vec::new();

    for row in rows {
        let team = match registry.resolve(&row.team_name) {
            Ok(team) => team,
            Err(_) => {
                unresolved.push(row.team_name);
                continue;
            }
        };

        if team.league != league {
            return Err(IngestError::LeagueMismatch {
                team_name: row.team_name,
                team_id: team.id.clone(),
                expected: league,
                actual: team.league,
                query: query.to_string(),
            });
        }

        if let Some(url) = &row.thumbnail {
            reconciled.thumbnails.push((team.id.clone(), url.clone()));
        }

        reconciled.records.push(StandingRecord {
            team_id: team.id.clone(),
            season,
            wins: row.wins,
            losses: row.losses,
            ties: 0,
            games_back: row.games_back,
            win_pct: row.win_pct,
            home_record: row.home_record,
            away_record: row.away_record,
            last_10: row.last_10,
            league,
        });
    }

    if !unresolved.is_empty() {
        return Err(IngestError::UnresolvedTeams {
            league,
            names: unresolved,
            query: query.to_string(),
        });
    }

    if reconciled.records.len() != LEAGUE_SIZE {
        return Err(IngestError::LeagueCardinality {
            league,
            count: reconciled.records.len(),
            expected: LEAGUE_SIZE,
        });
    }

    Ok(reconciled)
}

/// Fetch both leagues concurrently and merge.
///
/// The two fetches share nothing mutable, so they run independently; a
/// failure in either aborts the run. If either league reports preseason
/// the merged outcome is preseason - no reconciliation is attempted.
pub async fn fetch_both_leagues(
    client: &SerpApiClient,
    registry: &TeamRegistry,
    season: i32,
) -> Result<StandingsFetch, IngestError> {
    let (central, pacific) = tokio::try_join!(
        fetch_league(client, registry, season, League::Central),
        fetch_league(client, registry, season, League::Pacific),
    )?;

    merge_leagues(central, pacific)
}

/// Merge the two league outcomes, re-checking cardinality and rejecting
/// duplicate `(team_id, season)` keys across leagues (a duplicate here
/// means the same team appeared in both result sets - configuration or
/// upstream corruption).
fn merge_leagues(central: LeagueFetch, pacific: LeagueFetch) -> Result<StandingsFetch, IngestError> {
    let (central, pacific) = match (central, pacific) {
        (LeagueFetch::Standings(c), LeagueFetch::Standings(p)) => (c, p),
        _ => return Ok(StandingsFetch::Preseason),
    };

    for (league, half) in [(League::Central, &central), (League::Pacific, &pacific)] {
        if half.records.len() != LEAGUE_SIZE {
            return Err(IngestError::LeagueCardinality {
                league,
                count: half.records.len(),
                expected: LEAGUE_SIZE,
            });
        }
    }

    let mut merged = ReconciledStandings::default();
    merged.records.extend(central.records);
    merged.records.extend(pacific.records);
    merged.thumbnails.extend(central.thumbnails);
    merged.thumbnails.extend(pacific.thumbnails);

    let mut seen: HashSet<(String, i32)> = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    for record in &merged.records {
        let (team_id, season) = record.natural_key();
        if !seen.insert((team_id.to_string(), season)) {
            duplicates.push(format!("{season}-{team_id}"));
        }
    }

    if !duplicates.is_empty() {
        return Err(IngestError::DuplicateKeys { keys: duplicates });
    }

    Ok(StandingsFetch::Standings(merged))
}

/// Best-effort thumbnail caching. Failures are logged and never
/// propagated; this side channel must not fail an ingestion run.
pub async fn apply_thumbnails(store: &TeamsStore, thumbnails: &[(TeamId, String)]) {
    for (team_id, url) in thumbnails {
        if let Err(error) = store.update_thumbnail(team_id, url).await {
            warn!(team = %team_id, %error, "failed to cache team thumbnail");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serpapi_client::SerpApiResponse;

    const CENTRAL_NAMES: [&str; 6] =
        ["Yomiuri", "Hanshin", "Chunichi", "Yakult", "Hiroshima", "DeNA"];

    fn registry() -> TeamRegistry {
        TeamRegistry::seeded()
    }

    fn parsed_row(team_name: &str, wins: i32, losses: i32, games_back: f64) -> ParsedStanding {
        ParsedStanding {
            team_name: team_name.to_string(),
            wins,
            losses,
            win_pct: None,
            games_back,
            home_record: None,
            away_record: None,
            last_10: None,
            thumbnail: None,
        }
    }

    fn central_rows() -> Vec<ParsedStanding> {
        CENTRAL_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| parsed_row(name, 50 - i as i32, 40 + i as i32, i as f64 * 2.0))
            .collect()
    }

    fn pacific_rows() -> Vec<ParsedStanding> {
        ["SoftBank", "Lotte", "Rakuten", "Seibu", "Nippon-Ham", "Orix"]
            .iter()
            .enumerate()
            .map(|(i, name)| parsed_row(name, 50 - i as i32, 40 + i as i32, i as f64 * 2.0))
            .collect()
    }

    #[test]
    fn anchored_queries_use_flagship_teams() {
        assert_eq!(anchored_query(League::Central, 2026), "Yomiuri Giants standings 2026");
        assert_eq!(
            anchored_query(League::Pacific, 2026),
            "Fukuoka SoftBank Hawks standings 2026"
        );
    }

    #[test]
    fn full_league_reconciles_to_six_records() {
        let reconciled =
            reconcile_league(central_rows(), &registry(), 2026, League::Central, "q").unwrap();
        assert_eq!(reconciled.records.len(), 6);
        assert!(reconciled.records.iter().all(|r| r.league == League::Central));
        assert!(reconciled.records.iter().all(|r| r.season == 2026));
        assert!(reconciled.records.iter().all(|r| r.ties == 0));
    }

    #[test]
    fn parsed_leader_row_keeps_zero_games_back_end_to_end() {
        // Full path: raw response -> parser -> reconciliation, leader row
        // carrying the dash sentinel.
        let rows: Vec<serde_json::Value> = CENTRAL_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let gb = if i == 0 { "-".to_string() } else { format!("{}.5", i) };
                serde_json::json!({
                    "team": {"name": name},
                    "w": format!("{}", 50 - i),
                    "l": format!("{}", 40 + i),
                    "gb": gb
                })
            })
            .collect();
        let response: SerpApiResponse = serde_json::from_value(serde_json::json!({
            "sports_results": {"league": {"standings": rows}}
        }))
        .unwrap();

        let query = anchored_query(League::Central, 2026);
        let parsed = match parse_standings(&response, &query).unwrap() {
            StandingsOutcome::Rows(rows) => rows,
            StandingsOutcome::Preseason => panic!("expected rows"),
        };
        let reconciled =
            reconcile_league(parsed, &registry(), 2026, League::Central, &query).unwrap();

        assert_eq!(reconciled.records.len(), 6);
        let leader = reconciled
            .records
            .iter()
            .find(|r| r.team_id == TeamId::new("yomiuri-giants"))
            .unwrap();
        assert_eq!(leader.games_back, 0.0);
    }

    #[test]
    fn five_rows_fail_as_incomplete() {
        let mut rows = central_rows();
        rows.pop();
        let err = reconcile_league(rows, &registry(), 2026, League::Central, "q").unwrap_err();
        match &err {
            IngestError::LeagueCardinality { count, expected, .. } => {
                assert_eq!(*count, 5);
                assert_eq!(*expected, 6);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("incomplete"));
    }

    #[test]
    fn seven_rows_with_a_repeated_team_fail_as_duplicated() {
        let mut rows = central_rows();
        rows.push(parsed_row("Yomiuri", 50, 40, 0.0));
        let err = reconcile_league(rows, &registry(), 2026, League::Central, "q").unwrap_err();
        match &err {
            IngestError::LeagueCardinality { count, .. } => assert_eq!(*count, 7),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("duplicated or corrupted"));
    }

    #[test]
    fn wrong_league_team_is_data_corruption() {
        let mut rows = central_rows();
        rows[5] = parsed_row("SoftBank", 45, 44, 5.0);
        let err = reconcile_league(rows, &registry(), 2026, League::Central, "q").unwrap_err();
        match err {
            IngestError::LeagueMismatch { team_id, expected, actual, .. } => {
                assert_eq!(team_id, TeamId::new("fukuoka-softbank-hawks"));
                assert_eq!(expected, League::Central);
                assert_eq!(actual, League::Pacific);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unresolved_names_are_reported_together() {
        let mut rows = central_rows();
        rows[1] = parsed_row("Mystery Nine", 45, 44, 3.0);
        rows[4] = parsed_row("Phantom Club", 41, 48, 7.0);
        let err = reconcile_league(rows, &registry(), 2026, League::Central, "q").unwrap_err();
        match err {
            IngestError::UnresolvedTeams { names, league, .. } => {
                assert_eq!(league, League::Central);
                assert_eq!(names, vec!["Mystery Nine".to_string(), "Phantom Club".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn merge_of_two_full_leagues_yields_twelve_records() {
        let registry = registry();
        let central = reconcile_league(central_rows(), &registry, 2026, League::Central, "q")
            .map(LeagueFetch::Standings)
            .unwrap();
        let pacific = reconcile_league(pacific_rows(), &registry, 2026, League::Pacific, "q")
            .map(LeagueFetch::Standings)
            .unwrap();

        match merge_leagues(central, pacific).unwrap() {
            StandingsFetch::Standings(merged) => {
                assert_eq!(merged.records.len(), 12);
            }
            StandingsFetch::Preseason => panic!("expected standings"),
        }
    }

    #[test]
    fn preseason_in_either_league_short_circuits_the_merge() {
        let registry = registry();
        let central = reconcile_league(central_rows(), &registry, 2026, League::Central, "q")
            .map(LeagueFetch::Standings)
            .unwrap();

        match merge_leagues(central, LeagueFetch::Preseason).unwrap() {
            StandingsFetch::Preseason => {}
            StandingsFetch::Standings(_) => panic!("expected preseason"),
        }
    }

    #[test]
    fn cross_league_duplicate_key_is_fatal() {
        let registry = registry();
        let central = reconcile_league(central_rows(), &registry, 2026, League::Central, "q")
            .unwrap();

        // A corrupted pacific half where one record reuses a central id.
        let mut pacific = reconcile_league(pacific_rows(), &registry, 2026, League::Pacific, "q")
            .unwrap();
        pacific.records[5].team_id = TeamId::new("yomiuri-giants");

        let err = merge_leagues(
            LeagueFetch::Standings(central),
            LeagueFetch::Standings(pacific),
        )
        .unwrap_err();
        match err {
            IngestError::DuplicateKeys { keys } => {
                assert_eq!(keys, vec!["2026-yomiuri-giants".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
