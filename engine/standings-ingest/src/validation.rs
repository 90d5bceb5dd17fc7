//! Final pre-persistence validation gate.
//!
//! Deliberately redundant with the fetcher's own checks: this gate is
//! reusable by any ingestion path, not only the anchored fetcher. Pure
//! function, no I/O, no side effects.

use crate::error::IngestError;
use crate::standings::{LEAGUE_SIZE, ROSTER_SIZE};
use npb_store::StandingRecord;
use std::collections::HashSet;
use team_registry::League;

/// Check the merged record set immediately before persistence: exactly
/// 12 records, exactly 6 per league, no duplicate `(team_id, season)`
/// key. Any violation is fatal and carries the observed counts or keys.
pub fn validate_standings(records: &[StandingRecord]) -> Result<(), IngestError> {
    if records.len() != ROSTER_SIZE {
        return Err(IngestError::TotalCardinality {
            count: records.len(),
            expected: ROSTER_SIZE,
        });
    }

    for league in [League::Central, League::Pacific] {
        let count = records.iter().filter(|r| r.league == league).count();
        if count != LEAGUE_SIZE {
            return Err(IngestError::LeagueCardinality {
                league,
                count,
                expected: LEAGUE_SIZE,
            });
        }
    }

    let mut seen: HashSet<(String, i32)> = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    for record in records {
        let (team_id, season) = record.natural_key();
        if !seen.insert((team_id.to_string(), season)) {
            duplicates.push(format!("{season}-{team_id}"));
        }
    }
    if !duplicates.is_empty() {
        return Err(IngestError::DuplicateKeys { keys: duplicates });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use team_registry::{TeamId, TeamRegistry};

    fn full_record_set(season: i32) -> Vec<StandingRecord> {
        TeamRegistry::seeded()
            .teams()
            .iter()
            .map(|team| StandingRecord {
                team_id: team.id.clone(),
                season,
                wins: 45,
                losses: 45,
                ties: 0,
                games_back: 0.0,
                win_pct: Some(0.5),
                home_record: None,
                away_record: None,
                last_10: None,
                league: team.league,
            })
            .collect()
    }

    #[test]
    fn full_roster_passes() {
        assert!(validate_standings(&full_record_set(2026)).is_ok());
    }

    #[test]
    fn missing_record_fails_total_count() {
        let mut records = full_record_set(2026);
        records.pop();
        match validate_standings(&records).unwrap_err() {
            IngestError::TotalCardinality { count, expected } => {
                assert_eq!(count, 11);
                assert_eq!(expected, 12);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn lopsided_league_split_fails_league_count() {
        let mut records = full_record_set(2026);
        // Flip one pacific record into central: still 12 total, but 7/5.
        let flipped = records
            .iter_mut()
            .find(|r| r.league == League::Pacific)
            .unwrap();
        flipped.league = League::Central;

        match validate_standings(&records).unwrap_err() {
            IngestError::LeagueCardinality { league, count, .. } => {
                assert_eq!(league, League::Central);
                assert_eq!(count, 7);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn duplicate_key_fails_with_the_offending_key() {
        let mut records = full_record_set(2026);
        records[1].team_id = TeamId::new("yomiuri-giants");
        records[1].league = records[0].league;

        match validate_standings(&records).unwrap_err() {
            IngestError::DuplicateKeys { keys } => {
                assert_eq!(keys, vec!["2026-yomiuri-giants".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
