use crate::roster::NAME_ALIASES;
use crate::types::{League, ResolveError, Team, TeamId};
use std::collections::HashMap;
use tracing::debug;

/// Team Registry - canonical roster with deterministic name resolution.
///
/// Built once per ingestion run from the store's team rows (or from the
/// seed roster in tests) and passed by shared reference into every
/// pipeline stage. Holds no mutable state.
pub struct TeamRegistry {
    teams: Vec<Team>,
    by_id: HashMap<TeamId, usize>,
}

impl TeamRegistry {
    /// Build a registry from the canonical team list.
    pub fn from_teams(teams: Vec<Team>) -> Self {
        let by_id = teams
            .iter()
            .enumerate()
            .map(|(index, team)| (team.id.clone(), index))
            .collect();
        Self { teams, by_id }
    }

    /// Registry over the built-in seed roster.
    pub fn seeded() -> Self {
        Self::from_teams(crate::roster::seed_teams())
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn get(&self, id: &TeamId) -> Option<&Team> {
        self.by_id.get(id).map(|&index| &self.teams[index])
    }

    /// League membership for a canonical id.
    pub fn league_of(&self, id: &TeamId) -> Result<League, ResolveError> {
        self.get(id)
            .map(|team| team.league)
            .ok_or_else(|| ResolveError::UnknownTeamId(id.clone()))
    }

    /// Resolve an upstream free-text team name to a canonical team.
    ///
    /// Strategies are applied in order, first match wins:
    /// 1. exact match on the English name
    /// 2. case-insensitive match on the English name
    /// 3. bidirectional substring containment
    /// 4. token overlap (tokens longer than 2 chars, at least 2 shared)
    /// 5. explicit alias table, re-resolved exactly
    ///
    /// Containment and token overlap are deliberately last: they are
    /// heuristics, bounded so short names cannot over-match.
    pub fn resolve(&self, free_text: &str) -> Result<&Team, ResolveError> {
        let normalized = free_text.trim();
        let lowered = normalized.to_lowercase();

        if let Some(team) = self.teams.iter().find(|t| t.name_en == normalized) {
            return Ok(team);
        }

        if let Some(team) = self.teams.iter().find(|t| t.name_en.to_lowercase() == lowered) {
            return Ok(team);
        }

        if let Some(team) = self.teams.iter().find(|t| {
            let canonical = t.name_en.to_lowercase();
            canonical.contains(&lowered) || lowered.contains(&canonical)
        }) {
            debug!(name = %normalized, team = %team.id, "resolved team name by containment");
            return Ok(team);
        }

        if let Some(team) = self.teams.iter().find(|t| token_overlap(&lowered, &t.name_en) >= 2) {
            debug!(name = %normalized, team = %team.id, "resolved team name by token overlap");
            return Ok(team);
        }

        if let Some((_, canonical)) = NAME_ALIASES.iter().find(|(alias, _)| *alias == normalized) {
            if let Some(team) = self.teams.iter().find(|t| t.name_en == *canonical) {
                return Ok(team);
            }
        }

        Err(ResolveError::UnresolvedName {
            name: normalized.to_string(),
            known: self.teams.iter().map(|t| t.name_en.clone()).collect(),
        })
    }
}

/// Count shared whitespace tokens longer than 2 characters.
fn token_overlap(lowered_name: &str, canonical_name: &str) -> usize {
    let canonical = canonical_name.to_lowercase();
    let canonical_tokens: Vec<&str> =
        canonical.split_whitespace().filter(|t| t.len() > 2).collect();
    lowered_name
        .split_whitespace()
        .filter(|t| t.len() > 2)
        .filter(|t| canonical_tokens.contains(t))
        .count()
}
