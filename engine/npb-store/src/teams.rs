//! Canonical team read side and the thumbnail side channel.

use crate::error::{Result, StoreError};
use sqlx::PgPool;
use team_registry::{League, Team, TeamId};

#[derive(Debug, Clone, sqlx::FromRow)]
struct TeamRow {
    id: String,
    name: String,
    name_en: String,
    league: String,
}

/// Read access to the seeded `teams` table. The ingestion pipeline
/// treats these rows as authoritative and read-only; the single
/// exception is the auxiliary thumbnail column.
pub struct TeamsStore {
    pool: PgPool,
}

impl TeamsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the full canonical team list.
    pub async fn fetch_all(&self) -> Result<Vec<Team>> {
        let rows: Vec<TeamRow> =
            sqlx::query_as("SELECT id, name, name_en, league FROM teams ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter()
            .map(|row| {
                let league = League::parse(&row.league).ok_or_else(|| {
                    StoreError::Corrupt(format!(
                        "team {} has unknown league {:?}",
                        row.id, row.league
                    ))
                })?;
                Ok(Team {
                    id: TeamId::new(row.id),
                    name: row.name,
                    name_en: row.name_en,
                    league,
                })
            })
            .collect()
    }

    /// Count seeded teams; used as the startup precondition.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Auxiliary write: cache a thumbnail URL seen in an upstream
    /// response. Fallible like any write, but callers treat failure as
    /// non-critical (log and continue) - this column is outside every
    /// reconciliation invariant.
    pub async fn update_thumbnail(&self, team_id: &TeamId, url: &str) -> Result<()> {
        sqlx::query(
            "UPDATE teams SET thumbnail_url = $2, thumbnail_updated_at = now() WHERE id = $1",
        )
        .bind(team_id.as_str())
        .bind(url)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
