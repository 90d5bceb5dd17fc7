//! Defensive games parsing.
//!
//! Day-to-day absence of games is a normal condition, so this parser
//! never fails: missing containers yield an empty list and individual
//! malformed rows are skipped with a warning. Team names are extracted
//! by an ordered list of shape strategies, one per known upstream
//! convention, each independently testable.

use crate::models::{SerpApiGameRow, SerpApiResponse};
use tracing::warn;

/// One parsed game row. Date/time/venue/status are carried through as
/// raw text; interpretation happens downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedGame {
    pub date: Option<String>,
    pub time: Option<String>,
    pub home_team_name: String,
    pub away_team_name: String,
    pub venue: Option<String>,
    pub status: Option<String>,
}

/// A team-name extraction strategy: returns `(away, home)` when the row
/// matches this shape.
type TeamShape = fn(&SerpApiGameRow) -> Option<(String, String)>;

/// Known shapes, tried in order. The paired array is the dominant shape
/// in practice, so it goes first.
const TEAM_SHAPES: &[TeamShape] = &[paired_array_shape, named_fields_shape];

/// Paired-array convention: `teams: [{name: away}, {name: home}]`.
fn paired_array_shape(row: &SerpApiGameRow) -> Option<(String, String)> {
    let teams = row.teams.as_ref()?;
    if teams.len() < 2 {
        return None;
    }
    let away = teams[0].name.as_deref().filter(|n| !n.is_empty())?;
    let home = teams[1].name.as_deref().filter(|n| !n.is_empty())?;
    Some((away.to_string(), home.to_string()))
}

/// Named-field convention: `home_team: {name}, away_team: {name}`.
fn named_fields_shape(row: &SerpApiGameRow) -> Option<(String, String)> {
    let home = row
        .home_team
        .as_ref()
        .and_then(|t| t.name.as_deref())
        .filter(|n| !n.is_empty())?;
    let away = row
        .away_team
        .as_ref()
        .and_then(|t| t.name.as_deref())
        .filter(|n| !n.is_empty())?;
    Some((away.to_string(), home.to_string()))
}

/// Parse game rows out of a raw response. Always returns a list.
pub fn parse_games(response: &SerpApiResponse, query: &str) -> Vec<ParsedGame> {
    let rows = match response.sports_results.as_ref().and_then(|sports| sports.games.as_ref()) {
        Some(rows) => rows,
        None => return Vec::new(),
    };

    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let (away_team_name, home_team_name) =
                match TEAM_SHAPES.iter().find_map(|shape| shape(row)) {
                    Some(pair) => pair,
                    None => {
                        warn!(%query, index, "skipping game row with no resolvable team names");
                        return None;
                    }
                };

            Some(ParsedGame {
                date: row.date.clone(),
                time: row.time.clone(),
                home_team_name,
                away_team_name,
                venue: row.venue.clone(),
                status: row.status.clone(),
            })
        })
        .collect()
}
