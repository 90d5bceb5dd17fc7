use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One of the two fixed NPB leagues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum League {
    Central,
    Pacific,
}

impl League {
    /// Stable lowercase form used in queries, store columns and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            League::Central => "central",
            League::Pacific => "pacific",
        }
    }

    /// Parse the stored lowercase form back into a league.
    pub fn parse(s: &str) -> Option<League> {
        match s {
            "central" => Some(League::Central),
            "pacific" => Some(League::Pacific),
            _ => None,
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical team identifier, derived deterministically from the English
/// display name (e.g. "Yomiuri Giants" -> "yomiuri-giants"). Matches the
/// ids seeded into the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive the id from a canonical English name: lowercase, whitespace
    /// collapsed to single dashes.
    pub fn from_english_name(name_en: &str) -> Self {
        let slug = name_en
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        Self(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A canonical team. Immutable reference data seeded out-of-band; the
/// ingestion pipeline only ever reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    /// Localized (Japanese) display name.
    pub name: String,
    /// Canonical English display name; reconciliation target.
    pub name_en: String,
    pub league: League,
}

impl Team {
    pub fn new(name: impl Into<String>, name_en: impl Into<String>, league: League) -> Self {
        let name_en = name_en.into();
        Self {
            id: TeamId::from_english_name(&name_en),
            name: name.into(),
            name_en,
            league,
        }
    }
}

/// Errors that can occur while resolving free-text team names.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// No strategy matched. Carries every canonical English name so the
    /// failure is diagnosable from the message alone.
    #[error("could not resolve team name \"{name}\"; known teams: {}", known.join(", "))]
    UnresolvedName { name: String, known: Vec<String> },

    /// A team id that is not part of the registry roster.
    #[error("unknown team id: {0}")]
    UnknownTeamId(TeamId),
}
