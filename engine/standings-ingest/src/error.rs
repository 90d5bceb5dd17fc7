//! Error taxonomy for the ingestion pipeline.
//!
//! Client, parse and store errors pass through transparently; the
//! variants defined here are the reconciliation-level failures. All of
//! them are fatal for standings - nothing is swallowed on that path.

use npb_store::StoreError;
use serpapi_client::{ParseError, SerpApiError};
use team_registry::{League, TeamId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error(transparent)]
    Api(#[from] SerpApiError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// A row resolved to a team that the canonical data places in the
    /// other league. Treated as data corruption, not a warning.
    #[error(
        "league mismatch: team \"{team_name}\" ({team_id}) belongs to the {actual} league \
         but appeared in {expected} league standings (query \"{query}\")"
    )]
    LeagueMismatch {
        team_name: String,
        team_id: TeamId,
        expected: League,
        actual: League,
        query: String,
    },

    /// Every unresolved name in a league, reported together.
    #[error(
        "{} team name(s) could not be resolved for the {league} league: {} (query \"{query}\")",
        names.len(),
        names.join(", ")
    )]
    UnresolvedTeams { league: League, names: Vec<String>, query: String },

    #[error(
        "{league} league returned {count} teams, expected exactly {expected}; {}",
        cardinality_hint(*count, *expected)
    )]
    LeagueCardinality { league: League, count: usize, expected: usize },

    #[error("expected exactly {expected} standings rows, got {count}")]
    TotalCardinality { count: usize, expected: usize },

    #[error("duplicate (team, season) keys detected: {}", keys.join(", "))]
    DuplicateKeys { keys: Vec<String> },

    /// The canonical team list read from the store is not the full
    /// roster; ingestion cannot start.
    #[error("expected exactly {expected} seeded teams, found {count}; seed the store before ingesting")]
    SeededTeams { count: usize, expected: usize },
}

/// Too few rows means incomplete upstream data; too many means
/// duplicated or corrupted rows. The message distinguishes the two.
fn cardinality_hint(count: usize, expected: usize) -> &'static str {
    if count < expected {
        "upstream data looks incomplete"
    } else {
        "rows look duplicated or corrupted"
    }
}
