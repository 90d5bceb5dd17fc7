//! Reconciled records accepted by the upsert writers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use team_registry::{League, TeamId};

/// A fully reconciled standings record for one team and season.
///
/// Constructed by the fetcher after name reconciliation, checked by the
/// validation gate, persisted by [`crate::StandingsStore`], then
/// discarded - the store holds the permanent copy. Unique by
/// `(team_id, season)` within one ingestion cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingRecord {
    pub team_id: TeamId,
    pub season: i32,
    pub wins: i32,
    pub losses: i32,
    /// The source never reports ties; defaulted to 0.
    pub ties: i32,
    pub games_back: f64,
    pub win_pct: Option<f64>,
    pub home_record: Option<String>,
    pub away_record: Option<String>,
    pub last_10: Option<String>,
    pub league: League,
}

impl StandingRecord {
    /// Natural key: repeated runs for the same team and season overwrite
    /// rather than duplicate.
    pub fn natural_key(&self) -> (&str, i32) {
        (self.team_id.as_str(), self.season)
    }
}

/// Game status, normalized from upstream free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Completed,
    Postponed,
    Unknown,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Scheduled => "scheduled",
            GameStatus::InProgress => "in_progress",
            GameStatus::Completed => "completed",
            GameStatus::Postponed => "postponed",
            GameStatus::Unknown => "unknown",
        }
    }

    /// Normalize upstream status text. Absent text means the game is
    /// upcoming; unrecognized text maps to `Unknown` rather than being
    /// silently misclassified.
    pub fn from_upstream(raw: Option<&str>) -> GameStatus {
        let text = match raw {
            Some(text) => text.to_lowercase(),
            None => return GameStatus::Scheduled,
        };
        let text = text.trim();

        if text.contains("final") || text.contains("completed") {
            return GameStatus::Completed;
        }
        if text.contains("live") || text.contains("in progress") || text.contains("playing") {
            return GameStatus::InProgress;
        }
        if text.contains("postponed")
            || text.contains("delay")
            || text.contains("suspended")
            || text.contains("cancelled")
            || text.contains("canceled")
        {
            return GameStatus::Postponed;
        }
        if text.contains("scheduled") || text.contains("upcoming") {
            return GameStatus::Scheduled;
        }

        GameStatus::Unknown
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reconciled game record.
///
/// Natural key `(date, home_team_id, away_team_id)` deliberately omits
/// start time: a date+matchup pair is assumed to occur at most once per
/// day. Known limitation: a doubleheader collides and overwrites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub date: NaiveDate,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: GameStatus,
}

impl GameRecord {
    pub fn natural_key(&self) -> (NaiveDate, &str, &str) {
        (self.date, self.home_team_id.as_str(), self.away_team_id.as_str())
    }
}
