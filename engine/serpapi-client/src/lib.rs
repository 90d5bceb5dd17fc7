//! SerpApi Client
//!
//! One outbound search call per query against the SerpApi Google engine,
//! plus the parsers that turn raw `sports_results` payloads into typed
//! standings and game rows. Standings parsing is strict (the downstream
//! store must never see malformed rows); games parsing is deliberately
//! tolerant because sparse or malformed game rows are a normal condition.

pub mod client;
pub mod error;
pub mod games;
pub mod models;
pub mod standings;

pub use client::SerpApiClient;
pub use error::{ParseError, SerpApiError};
pub use games::{parse_games, ParsedGame};
pub use models::SerpApiResponse;
pub use standings::{parse_standings, ParsedStanding, StandingsOutcome};
