//! Strict standings parsing with preseason classification.

use crate::error::ParseError;
use crate::models::{SerpApiResponse, SerpApiStandingRow};

/// One parsed standings row. Transient: consumed by reconciliation and
/// discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedStanding {
    pub team_name: String,
    pub wins: i32,
    pub losses: i32,
    pub win_pct: Option<f64>,
    pub games_back: f64,
    pub home_record: Option<String>,
    pub away_record: Option<String>,
    pub last_10: Option<String>,
    pub thumbnail: Option<String>,
}

/// Result of parsing a standings response.
///
/// `Preseason` is a first-class outcome, not an error: the structural
/// containers exist but no row carries statistics yet. Callers must
/// handle both variants explicitly.
#[derive(Debug)]
pub enum StandingsOutcome {
    Rows(Vec<ParsedStanding>),
    Preseason,
}

/// Leader sentinels for the games-back column. The em-dash form also
/// appears through a UTF-8/latin-1 round trip as `â€”`.
const GAMES_BACK_LEADER_TOKENS: &[&str] = &["-", "—", "â€”"];

/// Parse standings rows out of a raw response.
///
/// Fails loudly on structural absence and on any malformed row; an
/// all-rows-without-statistics response classifies as `Preseason`.
pub fn parse_standings(
    response: &SerpApiResponse,
    query: &str,
) -> Result<StandingsOutcome, ParseError> {
    let search_id = response.search_id().to_string();

    let league = response
        .sports_results
        .as_ref()
        .and_then(|sports| sports.league.as_ref())
        .ok_or_else(|| ParseError::MissingResults {
            query: query.to_string(),
            search_id: search_id.clone(),
        })?;

    let rows = match &league.standings {
        Some(rows) if !rows.is_empty() => rows,
        _ => {
            return Err(ParseError::EmptyStandings {
                query: query.to_string(),
                search_id,
            })
        }
    };

    // Preseason: the container is present but no row has both wins and
    // losses. Not an error - the season simply has no statistics yet.
    let has_stats = rows.iter().any(|row| row.w.is_some() && row.l.is_some());
    if !has_stats {
        return Ok(StandingsOutcome::Preseason);
    }

    let parsed = rows
        .iter()
        .enumerate()
        .map(|(index, row)| parse_row(row, index, query))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(StandingsOutcome::Rows(parsed))
}

fn parse_row(
    row: &SerpApiStandingRow,
    index: usize,
    query: &str,
) -> Result<ParsedStanding, ParseError> {
    let team_name = row
        .team
        .as_ref()
        .and_then(|team| team.name.as_deref())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ParseError::MissingField {
            field: "team name",
            team: format!("row {index}"),
            query: query.to_string(),
        })?
        .to_string();

    let wins = parse_count(row.w.as_deref(), "wins (w)", &team_name, query)?;
    let losses = parse_count(row.l.as_deref(), "losses (l)", &team_name, query)?;

    let raw_gb = row.gb.as_deref().ok_or_else(|| ParseError::MissingField {
        field: "games back (gb)",
        team: team_name.clone(),
        query: query.to_string(),
    })?;
    let games_back = parse_games_back(raw_gb, &team_name, query)?;

    // Winning percentage is optional; a malformed value degrades to None
    // rather than failing the row.
    let win_pct = row.pct.as_deref().and_then(|pct| pct.parse::<f64>().ok());

    Ok(ParsedStanding {
        team_name,
        wins,
        losses,
        win_pct,
        games_back,
        home_record: row.home.clone(),
        away_record: row.away.clone(),
        last_10: row.l10.clone(),
        thumbnail: row.team.as_ref().and_then(|team| team.thumbnail.clone()),
    })
}

fn parse_count(
    raw: Option<&str>,
    field: &'static str,
    team: &str,
    query: &str,
) -> Result<i32, ParseError> {
    let value = raw.ok_or_else(|| ParseError::MissingField {
        field,
        team: team.to_string(),
        query: query.to_string(),
    })?;

    value.trim().parse::<i32>().map_err(|_| ParseError::InvalidNumber {
        field,
        value: value.to_string(),
        team: team.to_string(),
        query: query.to_string(),
    })
}

/// A leader sentinel (or blank) normalizes to zero games back.
fn parse_games_back(raw: &str, team: &str, query: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || GAMES_BACK_LEADER_TOKENS.contains(&trimmed) {
        return Ok(0.0);
    }

    trimmed.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
        field: "games back (gb)",
        value: raw.to_string(),
        team: team.to_string(),
        query: query.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SerpApiResponse;

    fn response_from(json: serde_json::Value) -> SerpApiResponse {
        serde_json::from_value(json).unwrap()
    }

    fn standings_response(rows: serde_json::Value) -> SerpApiResponse {
        response_from(serde_json::json!({
            "search_metadata": {"id": "test-search"},
            "sports_results": {"league": {"standings": rows}}
        }))
    }

    #[test]
    fn missing_sports_results_fails_with_query_and_search_id() {
        let response = response_from(serde_json::json!({"search_metadata": {"id": "s-1"}}));
        let err = parse_standings(&response, "Yomiuri Giants standings 2026").unwrap_err();
        match err {
            ParseError::MissingResults { query, search_id } => {
                assert_eq!(query, "Yomiuri Giants standings 2026");
                assert_eq!(search_id, "s-1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_standings_list_fails() {
        let response = standings_response(serde_json::json!([]));
        let err = parse_standings(&response, "q").unwrap_err();
        assert!(matches!(err, ParseError::EmptyStandings { .. }));
    }

    #[test]
    fn rows_without_statistics_classify_as_preseason() {
        let response = standings_response(serde_json::json!([
            {"team": {"name": "Yomiuri"}},
            {"team": {"name": "Hanshin"}}
        ]));
        let outcome = parse_standings(&response, "q").unwrap();
        assert!(matches!(outcome, StandingsOutcome::Preseason));
    }

    #[test]
    fn leader_dash_normalizes_to_zero_games_back() {
        let response = standings_response(serde_json::json!([
            {"team": {"name": "Yomiuri"}, "w": "49", "l": "40", "pct": ".551", "gb": "-"}
        ]));
        match parse_standings(&response, "q").unwrap() {
            StandingsOutcome::Rows(rows) => {
                assert_eq!(rows[0].games_back, 0.0);
                assert_eq!(rows[0].wins, 49);
                assert_eq!(rows[0].losses, 40);
                assert_eq!(rows[0].win_pct, Some(0.551));
            }
            StandingsOutcome::Preseason => panic!("expected rows"),
        }
    }

    #[test]
    fn mojibake_dash_also_normalizes_to_zero() {
        let response = standings_response(serde_json::json!([
            {"team": {"name": "Yomiuri"}, "w": "49", "l": "40", "gb": "â€”"}
        ]));
        match parse_standings(&response, "q").unwrap() {
            StandingsOutcome::Rows(rows) => assert_eq!(rows[0].games_back, 0.0),
            StandingsOutcome::Preseason => panic!("expected rows"),
        }
    }

    #[test]
    fn fractional_games_back_parses() {
        let response = standings_response(serde_json::json!([
            {"team": {"name": "Hanshin"}, "w": "46", "l": "43", "gb": "3.5"}
        ]));
        match parse_standings(&response, "q").unwrap() {
            StandingsOutcome::Rows(rows) => assert_eq!(rows[0].games_back, 3.5),
            StandingsOutcome::Preseason => panic!("expected rows"),
        }
    }

    #[test]
    fn garbled_games_back_names_the_row() {
        let response = standings_response(serde_json::json!([
            {"team": {"name": "Hanshin"}, "w": "46", "l": "43", "gb": "n/a"}
        ]));
        let err = parse_standings(&response, "q").unwrap_err();
        match err {
            ParseError::InvalidNumber { field, value, team, .. } => {
                assert_eq!(field, "games back (gb)");
                assert_eq!(value, "n/a");
                assert_eq!(team, "Hanshin");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_wins_on_one_row_is_fatal_when_others_have_stats() {
        let response = standings_response(serde_json::json!([
            {"team": {"name": "Yomiuri"}, "w": "49", "l": "40", "gb": "-"},
            {"team": {"name": "Hanshin"}, "l": "43", "gb": "3.5"}
        ]));
        let err = parse_standings(&response, "q").unwrap_err();
        match err {
            ParseError::MissingField { field, team, .. } => {
                assert_eq!(field, "wins (w)");
                assert_eq!(team, "Hanshin");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_pct_is_non_fatal() {
        let response = standings_response(serde_json::json!([
            {"team": {"name": "Yomiuri"}, "w": "49", "l": "40", "pct": "??", "gb": "-"}
        ]));
        match parse_standings(&response, "q").unwrap() {
            StandingsOutcome::Rows(rows) => assert_eq!(rows[0].win_pct, None),
            StandingsOutcome::Preseason => panic!("expected rows"),
        }
    }

    #[test]
    fn thumbnail_is_carried_through() {
        let response = standings_response(serde_json::json!([
            {"team": {"name": "Yomiuri", "thumbnail": "https://img/x.png"},
             "w": "49", "l": "40", "gb": "-"}
        ]));
        match parse_standings(&response, "q").unwrap() {
            StandingsOutcome::Rows(rows) => {
                assert_eq!(rows[0].thumbnail.as_deref(), Some("https://img/x.png"));
            }
            StandingsOutcome::Preseason => panic!("expected rows"),
        }
    }
}
