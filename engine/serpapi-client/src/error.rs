//! Error types for the SerpApi client and parsers

use thiserror::Error;

/// Errors raised by the search client itself. Transport-level failures
/// and upstream-reported failures are kept distinct so callers can tell
/// "could not reach the source" from "the source rejected the request".
#[derive(Error, Debug)]
pub enum SerpApiError {
    #[error("SerpApi API key is required")]
    MissingApiKey,

    /// Request never produced a response (connect failure, timeout).
    #[error("failed to reach SerpApi: {0}")]
    Network(#[source] reqwest::Error),

    /// Response arrived with a non-2xx status.
    #[error("SerpApi returned error status {status}: {reason}")]
    Transport { status: u16, reason: String },

    /// Response body was not the expected JSON document.
    #[error("failed to decode SerpApi response: {0}")]
    Decode(#[source] reqwest::Error),

    /// The upstream API reported an application-level error.
    #[error("SerpApi API error: {0}")]
    Upstream(String),
}

/// Errors raised while parsing a structurally present response.
///
/// All variants carry the originating query (and the upstream search id
/// where available) so a failed ingestion run is diagnosable from logs
/// alone.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error(
        "no sports results for query \"{query}\" (search id: {search_id}); \
         team-anchored queries (e.g. \"Yomiuri Giants standings 2026\") are \
         required for reliable sports_results"
    )]
    MissingResults { query: String, search_id: String },

    #[error("standings list missing or empty for query \"{query}\" (search id: {search_id})")]
    EmptyStandings { query: String, search_id: String },

    #[error("standings row for {team} is missing {field} (query \"{query}\")")]
    MissingField { field: &'static str, team: String, query: String },

    #[error("invalid {field} value \"{value}\" for {team} (query \"{query}\")")]
    InvalidNumber { field: &'static str, value: String, team: String, query: String },
}
