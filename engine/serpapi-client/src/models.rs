use serde::{Deserialize, Serialize};

/// Top-level SerpApi search response. Everything below `sports_results`
/// is externally controlled and optional; numeric fields arrive as text.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SerpApiResponse {
    #[serde(default)]
    pub sports_results: Option<SportsResults>,

    #[serde(default)]
    pub search_metadata: Option<SearchMetadata>,

    /// Application-level error reported by the upstream API.
    #[serde(default)]
    pub error: Option<String>,
}

impl SerpApiResponse {
    /// Opaque upstream trace id, for error messages.
    pub fn search_id(&self) -> &str {
        self.search_metadata
            .as_ref()
            .and_then(|m| m.id.as_deref())
            .unwrap_or("unknown")
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchMetadata {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SportsResults {
    #[serde(default)]
    pub league: Option<LeagueResults>,

    #[serde(default)]
    pub games: Option<Vec<SerpApiGameRow>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeagueResults {
    #[serde(default)]
    pub standings: Option<Vec<SerpApiStandingRow>>,
}

/// One standings row as delivered by the upstream source.
///
/// `w`/`l`/`pct`/`gb` are strings ("49", ".566", "3.5"); `gb` uses a dash
/// sentinel for the league leader. In preseason responses the statistical
/// fields are absent entirely.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SerpApiStandingRow {
    #[serde(default)]
    pub team: Option<TeamCell>,

    #[serde(default)]
    pub w: Option<String>,

    #[serde(default)]
    pub l: Option<String>,

    #[serde(default)]
    pub pct: Option<String>,

    #[serde(default)]
    pub gb: Option<String>,

    /// Home record display string (e.g. "39-30").
    #[serde(default)]
    pub home: Option<String>,

    /// Away record display string (e.g. "38-29").
    #[serde(default)]
    pub away: Option<String>,

    /// Last-10-games record display string (e.g. "6-4").
    #[serde(default)]
    pub l10: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TeamCell {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// One game row. The upstream source uses several team-reference
/// conventions; both known shapes are modeled and tried in order.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SerpApiGameRow {
    /// Game date text ("Jan 25, 2026" or "Mar 27").
    #[serde(default)]
    pub date: Option<String>,

    /// Start time text ("6:00 PM").
    #[serde(default)]
    pub time: Option<String>,

    /// Paired-array shape: first entry away, second entry home.
    #[serde(default)]
    pub teams: Option<Vec<GameTeamRef>>,

    /// Named-field shape.
    #[serde(default)]
    pub home_team: Option<GameTeamRef>,

    #[serde(default)]
    pub away_team: Option<GameTeamRef>,

    #[serde(default)]
    pub venue: Option<String>,

    /// Free-text game status ("Final", "Live", "Rain delay", ...).
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub tournament: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GameTeamRef {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub kgmid: Option<String>,
}
