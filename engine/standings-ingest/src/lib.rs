//! Ingestion and reconciliation pipeline
//!
//! Drives the search client per league using anchor-team queries, maps
//! parsed rows onto canonical team ids, enforces the roster invariants
//! (6 per league, 12 total, unique `(team_id, season)` keys), and hands
//! validated record sets to the store. A run either fully succeeds or
//! fully fails - a half-updated standings table is worse than a stale
//! one.

pub mod error;
pub mod games;
pub mod standings;
pub mod validation;

pub use error::IngestError;
pub use games::{fetch_games, games_query};
pub use standings::{
    anchored_query, apply_thumbnails, fetch_both_leagues, fetch_league, LeagueFetch,
    ReconciledStandings, StandingsFetch, LEAGUE_SIZE, ROSTER_SIZE,
};
pub use validation::validate_standings;
